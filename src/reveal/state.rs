use std::collections::BTreeMap;

use crate::models::{QueryResult, ResultField};

/// One character appended to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealUpdate {
    pub generation: u64,
    pub field: ResultField,
    pub ch: char,
}

/// Partially typed text of each field for a single query.
///
/// Updates tagged with a different generation belong to a superseded query and are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    generation: u64,
    shown: BTreeMap<ResultField, String>,
    targets: BTreeMap<ResultField, usize>,
}

impl RevealState {
    pub fn new(generation: u64, result: &QueryResult) -> Self {
        let shown = ResultField::ALL.into_iter().map(|field| (field, String::new())).collect();
        let targets = ResultField::ALL
            .into_iter()
            .map(|field| (field, result.field(field).chars().count()))
            .collect();
        Self { generation, shown, targets }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply an update; returns false when it was stale
    pub fn apply(&mut self, update: &RevealUpdate) -> bool {
        if update.generation != self.generation {
            return false;
        }
        self.shown.entry(update.field).or_default().push(update.ch);
        true
    }

    pub fn text(&self, field: ResultField) -> &str {
        self.shown.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_field_complete(&self, field: ResultField) -> bool {
        let target = self.targets.get(&field).copied().unwrap_or(0);
        self.text(field).chars().count() >= target
    }

    pub fn is_complete(&self) -> bool {
        ResultField::ALL.into_iter().all(|field| self.is_field_complete(field))
    }

    /// Reveal everything at once
    pub fn finish(&mut self, result: &QueryResult) {
        for field in ResultField::ALL {
            self.shown.insert(field, result.field(field).to_string());
        }
    }
}
