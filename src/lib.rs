//! Multi-Agent Brainstorm - terminal client for a multi-agent reasoning backend
//!
//! A question goes to a backend that runs a planner, researcher, analyst, critic, and
//! synthesizer, and returns all five stages at once. This library provides:
//!
//! - An HTTP client for the provider catalog and the query endpoint
//! - A character-by-character reveal of the five stages, cancellable per query
//! - A bounded in-memory history of completed results
//! - Side-by-side and semantic-diff comparison of two results' final synthesis
//! - Light/dark/auto theme resolution and a ratatui interface tying it together
//!
//! # Example
//!
//! ```no_run
//! use multiagent_brainstorm::{BackendClient, HistoryStore};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = BackendClient::new("http://localhost:8000");
//! let result = client.submit("How do bees navigate?", "mock").await?;
//!
//! let mut history = HistoryStore::new();
//! let id = history.append(result);
//! println!("stored {}", id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod compare;
pub mod history;
pub mod models;
pub mod reveal;
pub mod theme;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use client::{BackendClient, ClientError};
pub use compare::{CompareMode, ComparisonEngine, ComparisonSelection, DiffOp, DiffSegment, diff_texts};
pub use history::HistoryStore;
pub use models::{HistoryEntry, ModelCatalog, ProviderInfo, QueryResult, ResultField};
pub use reveal::{RevealAnimator, RevealState, RevealTiming, RevealUpdate};
pub use theme::ThemeMode;
