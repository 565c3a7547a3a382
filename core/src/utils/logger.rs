use std::sync::OnceLock;

use crate::utils::style_message::StyleMessage;

/// Sink for user facing messages. Front-ends install their own with [`set_logger`].
pub trait Log: Sync {
    fn info(&self, message: StyleMessage);

    fn error(&self, message: StyleMessage);
}

/// Forwards to the `log` facade when no front-end installed a logger.
struct FacadeLogger;

impl Log for FacadeLogger {
    fn info(&self, message: StyleMessage) {
        log::info!("{}", message)
    }

    fn error(&self, message: StyleMessage) {
        log::error!("{}", message)
    }
}

static FACADE_LOGGER: FacadeLogger = FacadeLogger;
static LOGGER: OnceLock<&'static dyn Log> = OnceLock::new();

/// Install the global logger, only the first call takes effect.
pub fn set_logger(logger: &'static dyn Log) {
    let _ = LOGGER.set(logger);
}

pub fn get_logger() -> &'static dyn Log {
    match LOGGER.get() {
        Some(logger) => *logger,
        None => &FACADE_LOGGER,
    }
}

pub fn info(message: impl Into<StyleMessage>) {
    get_logger().info(message.into())
}

pub fn error(message: impl Into<StyleMessage>) {
    get_logger().error(message.into())
}
