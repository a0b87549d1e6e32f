//! Comparison and theme behaviour across many inputs
use chrono::NaiveTime;
use multiagent_brainstorm::compare::ComparisonView;
use multiagent_brainstorm::theme::{is_dark_hour, resolve};
use multiagent_brainstorm::{
    CompareMode, ComparisonEngine, ComparisonSelection, DiffOp, DiffSegment, HistoryStore,
    QueryResult, ThemeMode, diff_texts,
};

fn result_with_final(text: &str) -> QueryResult {
    serde_json::from_value(serde_json::json!({
        "plan": "p",
        "research": "r",
        "analysis": "a",
        "critique": "c",
        "final": text,
    }))
    .unwrap()
}

fn rebuild(segments: &[DiffSegment]) -> (String, String) {
    let old = segments.iter().filter(|s| s.op != DiffOp::Insert).map(|s| s.text.as_str()).collect();
    let new = segments.iter().filter(|s| s.op != DiffOp::Delete).map(|s| s.text.as_str()).collect();
    (old, new)
}

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "added"),
    ("removed", ""),
    ("The quick brown fox", "The quick red fox"),
    ("Use a hash map.\nIt is O(1).", "Use a B-tree.\nIt is O(log n)."),
    ("café au lait", "cafe au lait ☕"),
    ("abcdef", "fedcba"),
    ("same text", "same text"),
];

#[test]
fn test_diff_reconstructs_both_texts() {
    for (old, new) in PAIRS {
        let segments = diff_texts(old, new);
        assert_eq!(rebuild(&segments), (old.to_string(), new.to_string()), "{old:?} -> {new:?}");
        assert!(segments.iter().all(|s| !s.text.is_empty()));
    }
}

#[test]
fn test_diff_has_no_adjacent_equal_segments() {
    for (old, new) in PAIRS {
        let segments = diff_texts(old, new);
        for pair in segments.windows(2) {
            assert!(
                !(pair[0].op == DiffOp::Equal && pair[1].op == DiffOp::Equal),
                "{old:?} -> {new:?}: {segments:?}"
            );
        }
    }
}

#[test]
fn test_empty_texts_yield_no_segments() {
    assert!(diff_texts("", "").is_empty());
}

#[test]
fn test_comparing_entry_with_itself() {
    let mut history = HistoryStore::new();
    let id = history.append(result_with_final("Identical answer"));
    let engine = ComparisonEngine::new(&history);

    assert_eq!(engine.render_diff(&id, &id), vec![DiffSegment::equal("Identical answer")]);
    assert_eq!(engine.render_side_by_side(&id, &id), ("Identical answer", "Identical answer"));
}

#[test]
fn test_unknown_ids_compare_as_empty() {
    let mut history = HistoryStore::new();
    let id = history.append(result_with_final("Only one"));
    let engine = ComparisonEngine::new(&history);

    assert_eq!(engine.render_side_by_side("missing", &id), ("", "Only one"));
    assert_eq!(engine.render_diff(&id, "missing"), vec![DiffSegment::delete("Only one")]);
}

#[test]
fn test_selection_switches_views() {
    let mut history = HistoryStore::new();
    let a = history.append(result_with_final("left"));
    let b = history.append(result_with_final("right"));
    let engine = ComparisonEngine::new(&history);

    let mut selection =
        ComparisonSelection { entry_a: Some(a), entry_b: Some(b), mode: CompareMode::Side };
    assert_eq!(
        selection.render(&engine),
        ComparisonView::SideBySide { left: "left", right: "right" }
    );

    selection.mode = selection.mode.toggle();
    assert!(matches!(selection.render(&engine), ComparisonView::Diff(_)));
}

#[test]
fn test_evicted_entry_compares_as_empty() {
    let mut history = HistoryStore::with_limit(2);
    let oldest = history.append(result_with_final("old"));
    history.append(result_with_final("mid"));
    let newest = history.append(result_with_final("new"));

    assert!(history.get(&oldest).is_none());
    let engine = ComparisonEngine::new(&history);
    assert_eq!(engine.render_side_by_side(&oldest, &newest), ("", "new"));
}

#[test]
fn test_auto_theme_follows_clock_for_every_hour() {
    for hour in 0..24 {
        let now = NaiveTime::from_hms_opt(hour, 30, 0).unwrap();
        let expected = hour < 6 || hour >= 18;
        assert_eq!(resolve(ThemeMode::Auto, &now), expected, "hour {hour}");
        assert_eq!(is_dark_hour(hour), expected);
        assert!(!resolve(ThemeMode::Light, &now));
        assert!(resolve(ThemeMode::Dark, &now));
    }
}
