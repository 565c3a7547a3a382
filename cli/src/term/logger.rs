use gstash::utils::logger;
use gstash::utils::style_message::{StyleMessage, RED_BOLD};

pub(crate) static TERM_LOGGER: TermLogger = TermLogger {};

#[derive(Clone, Default)]
pub struct TermLogger;

impl logger::Log for TermLogger {
    fn info(&self, message: StyleMessage) {
        log::info!("{}", message)
    }

    fn error(&self, message: StyleMessage) {
        log::error!(
            "{}",
            StyleMessage::new()
                .styled_text("error: ", &RED_BOLD)
                .join(message)
        )
    }
}
