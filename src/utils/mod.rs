mod logging;
mod sanitize;

pub use logging::init_logging;
pub use sanitize::sanitize_text;
