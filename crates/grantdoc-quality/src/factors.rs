//! Per-section factor scorers
//!
//! Each scorer maps one section's effective content to 0-100. Blank content
//! scores 0 on every factor.

use grantdoc_core::text::{char_len, is_blank};
use lazy_static::lazy_static;
use regex::Regex;

use crate::profile::ScoringProfile;

lazy_static! {
    /// A number, optionally followed by a unit or counter
    static ref NUMERIC_CLAIM: Regex = Regex::new(
        r"[0-9０-９](?:[0-9０-９,，.．]*[0-9０-９])?\s*(%|％|割|円|万|億|千|百|人|名|件|社|店|年|ヶ月|か月|カ月|月|日|時間|分|秒|倍|個|台|回|品|種|部|点|kg|km|㎡)?"
    ).unwrap();
}

/// Factor scores of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionFactors {
    pub completeness: u32,
    pub specificity: u32,
    pub readability: u32,
}

impl SectionFactors {
    pub fn evaluate(content: &str, profile: &ScoringProfile) -> Self {
        Self {
            completeness: completeness(content, profile),
            specificity: specificity(content, profile),
            readability: readability(content, profile),
        }
    }
}

fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Square-root ramp up to `complete_chars`: presence earns credit quickly,
/// length saturates.
pub fn completeness(content: &str, profile: &ScoringProfile) -> u32 {
    if is_blank(content) {
        return 0;
    }
    let chars = char_len(content.trim()) as f64;
    let ratio = (chars / profile.complete_chars as f64).min(1.0);
    to_score(100.0 * ratio.sqrt())
}

/// Weighted numeric claims. A number with a unit counts fully, a bare
/// number counts half.
pub fn numeric_claims(content: &str) -> f64 {
    NUMERIC_CLAIM
        .captures_iter(content)
        .map(|caps| if caps.get(1).is_some() { 1.0 } else { 0.5 })
        .sum()
}

/// Numeric-claim density against the profile target
pub fn specificity(content: &str, profile: &ScoringProfile) -> u32 {
    if is_blank(content) {
        return 0;
    }
    let chars = char_len(content.trim()).max(1) as f64;
    let density = numeric_claims(content) * 100.0 / chars;
    to_score(100.0 * density / profile.target_numeric_density)
}

fn is_terminator(c: char) -> bool {
    matches!(c, '。' | '．' | '！' | '？' | '!' | '?' | '\n')
}

/// Split into trimmed, non-empty sentences. An ASCII period ends a
/// sentence only before whitespace or end of text, so decimals stay whole.
pub fn sentences(content: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = content.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        let ends = is_terminator(c)
            || (c == '.' && iter.peek().map_or(true, |(_, next)| next.is_whitespace()));
        if ends {
            let end = i + c.len_utf8();
            out.push(&content[start..end]);
            start = end;
        }
    }
    out.push(&content[start..]);
    out.into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Sentence-length and paragraph-length heuristics
pub fn readability(content: &str, profile: &ScoringProfile) -> u32 {
    if is_blank(content) {
        return 0;
    }
    let bounds = &profile.readability;
    let lengths: Vec<usize> = sentences(content).iter().map(|s| char_len(s)).collect();
    if lengths.is_empty() {
        return 0;
    }

    let min = bounds.min_sentence_chars as f64;
    let max = bounds.max_sentence_chars as f64;
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    let mut penalty = 0.0;
    if avg < min {
        penalty += 60.0 * (min - avg) / min;
    } else if avg > max {
        penalty += (80.0 * (avg - max) / max).min(40.0);
    }

    // Individual run-on sentences, even when the average is fine
    let run_on = lengths.iter().filter(|&&len| len as f64 > max * 1.5).count();
    penalty += (run_on as f64 * 5.0).min(20.0);

    let longest_paragraph = content
        .split('\n')
        .map(|p| char_len(p.trim()))
        .max()
        .unwrap_or(0);
    if longest_paragraph > bounds.max_paragraph_chars {
        penalty += ((longest_paragraph - bounds.max_paragraph_chars) as f64 / 10.0).min(30.0);
    }

    to_score(100.0 - penalty)
}
