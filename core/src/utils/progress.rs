use crate::ops::StepRecord;

pub trait Progress {
    /// compound operation started
    fn operation_start(&self, operation: &str);

    /// step about to issue its git invocation(s)
    fn step_start(&self, operation: &str, step: &StepRecord);

    /// step finished, `is_success` false means the operation aborts here
    fn step_end(&self, operation: &str, step: &StepRecord, is_success: bool);

    /// compound operation ended, successfully or not
    fn operation_end(&self, operation: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn operation_start(&self, _operation: &str) {}

    fn step_start(&self, _operation: &str, _step: &StepRecord) {}

    fn step_end(&self, _operation: &str, _step: &StepRecord, _is_success: bool) {}

    fn operation_end(&self, _operation: &str) {}
}
