use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::utils::logger;
use crate::utils::progress::Progress;
use crate::utils::style_message::StyleMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepEffect {
    ReadOnly,
    Mutates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based position inside the operation
    pub number: usize,
    pub name: &'static str,
    pub effect: StepEffect,
}

impl Display for StepRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number, self.name)
    }
}

/// Steps of a compound operation that ran to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReport {
    pub operation: &'static str,
    pub steps: Vec<StepRecord>,
}

/// A compound operation stopped at `failed`. Whatever `completed` mutated is
/// still in place, nothing is undone.
#[derive(Debug)]
pub struct TransactionError {
    pub operation: &'static str,
    pub failed: StepRecord,
    pub completed: Vec<StepRecord>,
    pub cause: anyhow::Error,
}

impl TransactionError {
    /// The failing step's own error.
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }

    pub fn mutated_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.completed
            .iter()
            .filter(|step| step.effect == StepEffect::Mutates)
    }

    /// True when steps before the failure already changed the repository.
    pub fn left_partial_state(&self) -> bool {
        self.mutated_steps().next().is_some()
    }

    /// Report what is left behind, if anything.
    pub fn log_partial_state(&self) {
        if !self.left_partial_state() {
            return;
        }
        let steps = self
            .mutated_steps()
            .map(|step| step.to_string())
            .collect::<Vec<_>>();
        logger::error(StyleMessage::partial_state(&steps));
    }
}

impl Display for TransactionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} failed at {}: {}",
            self.operation,
            self.failed,
            self.cause.to_string().trim()
        )
    }
}

impl Error for TransactionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = &*self.cause;
        Some(cause)
    }
}

/// Ordered, non-atomic sequence of steps. The first failing step ends it.
pub struct Transaction<'p> {
    operation: &'static str,
    completed: Vec<StepRecord>,
    progress: &'p dyn Progress,
}

impl<'p> Transaction<'p> {
    pub fn new(operation: &'static str, progress: &'p dyn Progress) -> Self {
        progress.operation_start(operation);
        Self {
            operation,
            completed: Vec::new(),
            progress,
        }
    }

    pub fn step<T>(
        &mut self,
        name: &'static str,
        effect: StepEffect,
        f: impl FnOnce() -> anyhow::Result<T>,
    ) -> Result<T, TransactionError> {
        let record = StepRecord {
            number: self.completed.len() + 1,
            name,
            effect,
        };
        self.progress.step_start(self.operation, &record);

        match f() {
            Ok(value) => {
                self.progress.step_end(self.operation, &record, true);
                self.completed.push(record);
                Ok(value)
            }
            Err(cause) => {
                self.progress.step_end(self.operation, &record, false);
                self.progress.operation_end(self.operation);
                Err(TransactionError {
                    operation: self.operation,
                    failed: record,
                    completed: std::mem::take(&mut self.completed),
                    cause,
                })
            }
        }
    }

    pub fn finish(self) -> TransactionReport {
        self.progress.operation_end(self.operation);
        TransactionReport {
            operation: self.operation,
            steps: self.completed,
        }
    }
}
