pub(crate) mod logger;
pub(crate) mod progress;
