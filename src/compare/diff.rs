use similar::{Algorithm, ChangeTag, TextDiff};

/// Classification of a diff segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    /// Common to both texts
    Equal,
    /// Only in the first text
    Delete,
    /// Only in the second text
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub op: DiffOp,
    pub text: String,
}

impl DiffSegment {
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self { op, text: text.into() }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Insert, text)
    }
}

/// Human-readable character diff of `old` against `new`.
///
/// Runs a Myers character diff and then a semantic cleanup that folds short equalities
/// wedged between larger edits into those edits. Two empty inputs yield no segments.
pub fn diff_texts(old: &str, new: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::configure().algorithm(Algorithm::Myers).diff_chars(old, new);

    let mut segments = Vec::new();
    for change in diff.iter_all_changes() {
        let op = match change.tag() {
            ChangeTag::Equal => DiffOp::Equal,
            ChangeTag::Delete => DiffOp::Delete,
            ChangeTag::Insert => DiffOp::Insert,
        };
        push_segment(&mut segments, op, change.value());
    }

    cleanup_semantic(cleanup_merge(segments))
}

/// Eliminate equalities that are no longer than the edits on both sides of them.
///
/// Each eliminated equality becomes a delete plus an insert of the same text; the merge
/// pass then collapses neighbouring edits into one delete and one insert.
pub fn cleanup_semantic(mut segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut changed = false;
    // Indices of equalities seen so far
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    // Edit lengths before (1) and after (2) the last equality
    let (mut inserted_before, mut deleted_before) = (0usize, 0usize);
    let (mut inserted_after, mut deleted_after) = (0usize, 0usize);

    let mut pointer = 0;
    while pointer < segments.len() {
        let segment = &segments[pointer];
        if segment.op == DiffOp::Equal {
            equalities.push(pointer);
            inserted_before = inserted_after;
            deleted_before = deleted_after;
            inserted_after = 0;
            deleted_after = 0;
            last_equality = Some(segment.text.clone());
            pointer += 1;
            continue;
        }

        let len = segment.text.chars().count();
        if segment.op == DiffOp::Insert {
            inserted_after += len;
        } else {
            deleted_after += len;
        }

        let eliminate = last_equality.as_ref().is_some_and(|equality| {
            let eq_len = equality.chars().count();
            eq_len <= inserted_before.max(deleted_before)
                && eq_len <= inserted_after.max(deleted_after)
        });

        if eliminate && let (Some(equality), Some(idx)) = (last_equality.take(), equalities.pop())
        {
            segments.insert(idx, DiffSegment::delete(equality));
            segments[idx + 1].op = DiffOp::Insert;
            // The preceding equality must be re-evaluated too
            equalities.pop();
            pointer = equalities.last().map_or(0, |&i| i + 1);
            inserted_before = 0;
            deleted_before = 0;
            inserted_after = 0;
            deleted_after = 0;
            changed = true;
            continue;
        }

        pointer += 1;
    }

    if changed { cleanup_merge(segments) } else { segments }
}

/// Coalesce runs of edits into one delete followed by one insert, factoring any shared
/// prefix or suffix out into the surrounding equalities.
pub fn cleanup_merge(segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut merged = Vec::with_capacity(segments.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    for segment in segments {
        match segment.op {
            DiffOp::Delete => deleted.push_str(&segment.text),
            DiffOp::Insert => inserted.push_str(&segment.text),
            DiffOp::Equal => {
                flush_edits(&mut merged, &mut deleted, &mut inserted);
                push_segment(&mut merged, DiffOp::Equal, &segment.text);
            }
        }
    }
    flush_edits(&mut merged, &mut deleted, &mut inserted);

    merged
}

fn flush_edits(merged: &mut Vec<DiffSegment>, deleted: &mut String, inserted: &mut String) {
    let mut suffix = String::new();

    if !deleted.is_empty() && !inserted.is_empty() {
        let prefix_len = common_prefix_len(deleted, inserted);
        if prefix_len > 0 {
            let prefix: String = deleted.drain(..prefix_len).collect();
            inserted.drain(..prefix_len);
            push_segment(merged, DiffOp::Equal, &prefix);
        }

        let suffix_len = common_suffix_len(deleted, inserted);
        if suffix_len > 0 {
            suffix = deleted.split_off(deleted.len() - suffix_len);
            inserted.truncate(inserted.len() - suffix_len);
        }
    }

    push_segment(merged, DiffOp::Delete, deleted);
    push_segment(merged, DiffOp::Insert, inserted);
    push_segment(merged, DiffOp::Equal, &suffix);
    deleted.clear();
    inserted.clear();
}

fn push_segment(segments: &mut Vec<DiffSegment>, op: DiffOp, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.op == op => last.text.push_str(text),
        _ => segments.push(DiffSegment::new(op, text)),
    }
}

/// Byte length of the shared leading characters
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).map(|(c, _)| c.len_utf8()).sum()
}

/// Byte length of the shared trailing characters
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}
