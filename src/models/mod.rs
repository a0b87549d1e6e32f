//! Data models shared by the client, history, and TUI layers.
//!
//! - [`ProviderInfo`] / [`ModelCatalog`] - Provider catalog from `GET /models`
//! - [`QueryResult`] / [`ResultField`] - Staged answer from `POST /ask`
//! - [`HistoryEntry`] - A completed query retained for comparison

pub mod history;
pub mod provider;
pub mod result;

pub use history::HistoryEntry;
pub use provider::{ModelCatalog, ProviderInfo};
pub use result::{QueryResult, ResultField};
