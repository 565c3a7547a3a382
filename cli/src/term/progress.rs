use std::sync::Mutex;
use std::time::Duration;

use gstash::ops::StepRecord;
use gstash::utils::progress::Progress;
use gstash::utils::style_message::{StyleMessage, PURPLE_BOLD};
use indicatif::{ProgressBar, ProgressStyle};

/// One spinner per compound operation, finished steps are kept as lines above it.
#[derive(Default)]
pub(crate) struct StepProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StepProgress {
    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(locked) = self.spinner.lock() {
            if let Some(spinner) = locked.as_ref() {
                f(spinner);
            }
        }
    }
}

impl Progress for StepProgress {
    fn operation_start(&self, operation: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green.dim.bold} {prefix} {msg} ") {
            spinner.set_style(style.tick_chars("/-\\| "));
        }
        spinner.set_prefix(PURPLE_BOLD.paint(operation).to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut locked) = self.spinner.lock() {
            *locked = Some(spinner);
        }
    }

    fn step_start(&self, _operation: &str, step: &StepRecord) {
        let message = StyleMessage::step_start(step.number, step.name);
        self.with_spinner(|spinner| spinner.set_message(truncate_spinner_msg(message.to_string())));
    }

    fn step_end(&self, _operation: &str, step: &StepRecord, is_success: bool) {
        let message = StyleMessage::step_end(step.number, step.name, is_success);
        self.with_spinner(|spinner| spinner.println(message.to_string()));
    }

    fn operation_end(&self, _operation: &str) {
        if let Ok(mut locked) = self.spinner.lock() {
            if let Some(spinner) = locked.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

pub fn get_terminal_width() -> usize {
    match console::Term::stderr().size() {
        (_, width) if width > 10 => width as usize - 10,
        _ => 70,
    }
}

pub fn truncate_spinner_msg(msg: impl AsRef<str>) -> String {
    let max_width = get_terminal_width();
    console::truncate_str(msg.as_ref(), max_width, "...").to_string()
}
