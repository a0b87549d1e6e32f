//! Comparison of the final synthesis of two history entries.
//!
//! Unknown or unselected ids resolve to empty text rather than an error, and comparing an
//! entry with itself is allowed (it yields a single equal segment).

pub mod diff;

pub use diff::{DiffOp, DiffSegment, diff_texts};

use crate::history::HistoryStore;

/// How the comparison overlay presents the two answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    #[default]
    Side,
    Diff,
}

impl CompareMode {
    pub fn toggle(self) -> Self {
        match self {
            CompareMode::Side => CompareMode::Diff,
            CompareMode::Diff => CompareMode::Side,
        }
    }
}

/// One of the two comparison slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }
}

/// Transient state of the comparison overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    pub entry_a: Option<String>,
    pub entry_b: Option<String>,
    pub mode: CompareMode,
}

impl ComparisonSelection {
    pub fn slot(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::A => self.entry_a.as_deref(),
            Slot::B => self.entry_b.as_deref(),
        }
    }

    pub fn select(&mut self, slot: Slot, id: Option<String>) {
        match slot {
            Slot::A => self.entry_a = id,
            Slot::B => self.entry_b = id,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.entry_a.is_some() && self.entry_b.is_some()
    }

    /// Render the current selection in its current mode
    pub fn render<'a>(&self, engine: &ComparisonEngine<'a>) -> ComparisonView<'a> {
        let a = self.entry_a.as_deref().unwrap_or("");
        let b = self.entry_b.as_deref().unwrap_or("");
        match self.mode {
            CompareMode::Side => {
                let (left, right) = engine.render_side_by_side(a, b);
                ComparisonView::SideBySide { left, right }
            }
            CompareMode::Diff => ComparisonView::Diff(engine.render_diff(a, b)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonView<'a> {
    SideBySide { left: &'a str, right: &'a str },
    Diff(Vec<DiffSegment>),
}

pub struct ComparisonEngine<'a> {
    history: &'a HistoryStore,
}

impl<'a> ComparisonEngine<'a> {
    pub fn new(history: &'a HistoryStore) -> Self {
        Self { history }
    }

    fn final_text(&self, id: &str) -> &'a str {
        self.history.get(id).map(|entry| entry.result.final_answer.as_str()).unwrap_or("")
    }

    /// Final answers of both entries, empty for an unresolved id
    pub fn render_side_by_side(&self, id_a: &str, id_b: &str) -> (&'a str, &'a str) {
        (self.final_text(id_a), self.final_text(id_b))
    }

    /// Semantic diff of entry A's final answer against entry B's
    pub fn render_diff(&self, id_a: &str, id_b: &str) -> Vec<DiffSegment> {
        diff_texts(self.final_text(id_a), self.final_text(id_b))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::QueryResult;

    fn result_with_final(text: &str) -> QueryResult {
        QueryResult {
            plan: String::new(),
            research: String::new(),
            analysis: String::new(),
            critique: String::new(),
            final_answer: text.to_string(),
            extra: BTreeMap::new(),
        }
    }

    fn store_with(finals: &[&str]) -> (HistoryStore, Vec<String>) {
        let mut store = HistoryStore::new();
        let ids = finals.iter().map(|text| store.append(result_with_final(text))).collect();
        (store, ids)
    }

    #[test]
    fn test_side_by_side_returns_final_answers() {
        let (store, ids) = store_with(&["first answer", "second answer"]);
        let engine = ComparisonEngine::new(&store);
        assert_eq!(engine.render_side_by_side(&ids[0], &ids[1]), ("first answer", "second answer"));
    }

    #[test]
    fn test_side_by_side_unknown_id_is_empty() {
        let (store, ids) = store_with(&["only"]);
        let engine = ComparisonEngine::new(&store);
        assert_eq!(engine.render_side_by_side("nope", &ids[0]), ("", "only"));
        assert_eq!(engine.render_side_by_side(&ids[0], ""), ("only", ""));
    }

    #[test]
    fn test_diff_with_itself_is_all_equal() {
        let (store, ids) = store_with(&["same text"]);
        let engine = ComparisonEngine::new(&store);
        assert_eq!(engine.render_diff(&ids[0], &ids[0]), vec![DiffSegment::equal("same text")]);
    }

    #[test]
    fn test_diff_between_entries() {
        let (store, ids) = store_with(&["abc", "abd"]);
        let engine = ComparisonEngine::new(&store);
        assert_eq!(
            engine.render_diff(&ids[0], &ids[1]),
            vec![DiffSegment::equal("ab"), DiffSegment::delete("c"), DiffSegment::insert("d")]
        );
    }

    #[test]
    fn test_diff_unknown_ids_is_empty() {
        let (store, _) = store_with(&["abc"]);
        let engine = ComparisonEngine::new(&store);
        assert!(engine.render_diff("x", "y").is_empty());
    }

    #[test]
    fn test_selection_render_modes() {
        let (store, ids) = store_with(&["left", "right"]);
        let engine = ComparisonEngine::new(&store);

        let mut selection = ComparisonSelection::default();
        selection.select(Slot::A, Some(ids[0].clone()));
        assert!(!selection.is_complete());
        assert_eq!(
            selection.render(&engine),
            ComparisonView::SideBySide { left: "left", right: "" }
        );

        selection.select(Slot::B, Some(ids[1].clone()));
        selection.mode = selection.mode.toggle();
        assert!(selection.is_complete());
        match selection.render(&engine) {
            ComparisonView::Diff(segments) => assert!(!segments.is_empty()),
            other => panic!("expected diff view, got {:?}", other),
        }
    }
}
