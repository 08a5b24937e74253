//! Grantdoc Diff: token-level comparison of two text versions
//!
//! Aligns an old and a new text on mixed Japanese/English tokens and
//! reports merged change spans, token statistics and a Dice similarity.
//!
//! # Example
//!
//! ```
//! use grantdoc_diff::{compute_diff, ChangeKind};
//!
//! let diff = compute_diff("これはテストです。", "これは重要なテストです。");
//! assert!(diff.changes.iter().any(|c| c.kind == ChangeKind::Insert));
//! assert_eq!(diff.inserted_text(), "重要な");
//! assert!(diff.similarity < 100);
//! ```

pub mod lcs;
pub mod tokenizer;

use grantdoc_core::DocumentSection;
use serde::{Deserialize, Serialize};

use lcs::Op;
pub use tokenizer::{tokenize, Token, TokenKind};

/// Kind of a change span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Equal,
    Insert,
    Delete,
}

/// A maximal run of tokens sharing one change kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffChange {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub value: String,
}

/// Token counts for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub total_old: usize,
    pub total_new: usize,
    /// LCS length
    pub unchanged: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl DiffStats {
    pub fn changed(&self) -> usize {
        self.inserted + self.deleted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub changes: Vec<DiffChange>,
    pub stats: DiffStats,
    /// 0-100, 100 only when both token sequences are identical
    pub similarity: u32,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.changes.iter().any(|c| c.kind != ChangeKind::Equal)
    }

    /// Concatenation of every inserted span
    pub fn inserted_text(&self) -> String {
        self.text_of(ChangeKind::Insert)
    }

    /// Concatenation of every deleted span
    pub fn deleted_text(&self) -> String {
        self.text_of(ChangeKind::Delete)
    }

    fn text_of(&self, kind: ChangeKind) -> String {
        self.changes
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.value.as_str())
            .collect()
    }
}

/// Diff of one section across two points in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDiffResult {
    pub section_key: String,
    pub section_title: String,
    #[serde(flatten)]
    pub diff: DiffResult,
}

/// Compare two texts token by token
pub fn compute_diff(old_text: &str, new_text: &str) -> DiffResult {
    let old_tokens = tokenize(old_text);
    let new_tokens = tokenize(new_text);
    let old_units: Vec<&str> = old_tokens.iter().map(|t| t.text).collect();
    let new_units: Vec<&str> = new_tokens.iter().map(|t| t.text).collect();

    let ops = lcs::align(&old_units, &new_units);

    let mut changes: Vec<DiffChange> = Vec::new();
    let mut stats = DiffStats {
        total_old: old_units.len(),
        total_new: new_units.len(),
        ..DiffStats::default()
    };

    for op in ops {
        let (kind, text) = match op {
            Op::Equal(i, _) => {
                stats.unchanged += 1;
                (ChangeKind::Equal, old_units[i])
            }
            Op::Delete(i) => {
                stats.deleted += 1;
                (ChangeKind::Delete, old_units[i])
            }
            Op::Insert(j) => {
                stats.inserted += 1;
                (ChangeKind::Insert, new_units[j])
            }
        };

        match changes.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(text),
            _ => changes.push(DiffChange { kind, value: text.to_string() }),
        }
    }

    let similarity = similarity(&stats);

    tracing::debug!(
        total_old = stats.total_old,
        total_new = stats.total_new,
        inserted = stats.inserted,
        deleted = stats.deleted,
        similarity,
        "computed diff"
    );

    DiffResult { changes, stats, similarity }
}

/// Dice coefficient over tokens: 2·|LCS| / (|old| + |new|), as a percentage
fn similarity(stats: &DiffStats) -> u32 {
    let total = stats.total_old + stats.total_new;
    if total == 0 {
        return 100;
    }
    let percent = (200 * stats.unchanged + total / 2) / total;
    percent.min(100) as u32
}

/// Diff two versions of one section's content
pub fn compare_sections(
    old_content: &str,
    new_content: &str,
    section_key: &str,
    section_title: &str,
) -> SectionDiffResult {
    SectionDiffResult {
        section_key: section_key.to_string(),
        section_title: section_title.to_string(),
        diff: compute_diff(old_content, new_content),
    }
}

/// Diff the effective content of two snapshots of the same section
pub fn compare_section_versions(old: &DocumentSection, new: &DocumentSection) -> SectionDiffResult {
    compare_sections(
        old.effective_content(),
        new.effective_content(),
        &new.section_key,
        &new.section_title,
    )
}
