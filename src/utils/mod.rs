pub mod environment;
pub mod logging;
pub mod terminal;

pub use environment::{default_log_path, normalize_api_url};
pub use logging::{LogTarget, init_logging};
pub use terminal::sanitize_for_terminal;
