// Session-lifetime result history
mod store;

pub use store::{DEFAULT_HISTORY_LIMIT, HistoryStore};
