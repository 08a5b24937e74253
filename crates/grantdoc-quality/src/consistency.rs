//! Cross-section consistency
//!
//! Scores how well the sections of one document agree with each other.
//! Starts from 100 and subtracts a penalty per signal found.

use std::collections::{BTreeMap, BTreeSet};

use grantdoc_core::text::{char_len, is_blank, is_fullwidth_digit};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::factors::sentences;

const POLITE_ENDINGS: &[&str] = &["です", "ます", "ました", "でした", "ません", "ましょう", "でしょう"];
const PLAIN_ENDINGS: &[&str] = &["である", "であった", "であろう", "だ", "だった", "ではない"];

/// Coefficient of variation of section lengths tolerated before penalizing
const TOLERATED_LENGTH_CV: f64 = 0.5;

struct LabelledFigure {
    label: &'static str,
    pattern: Regex,
}

lazy_static! {
    /// Figures a document states once and should repeat identically.
    /// Group 1 is the value, group 2 (when present) its unit.
    static ref LABELLED_FIGURES: Vec<LabelledFigure> = vec![
        LabelledFigure {
            label: "従業員数",
            pattern: Regex::new(r"従業員数?(?:は|が|：|:)?\s*(?:約)?([0-9０-９][0-9０-９,，]*)\s*(?:名|人)").unwrap(),
        },
        LabelledFigure {
            label: "資本金",
            pattern: Regex::new(r"資本金(?:は|：|:)?\s*([0-9０-９][0-9０-９,，.．]*)\s*(億円|万円|千円|円)").unwrap(),
        },
        LabelledFigure {
            label: "創業年",
            pattern: Regex::new(r"([0-9０-９]{4})年に?(?:創業|設立)").unwrap(),
        },
        LabelledFigure {
            label: "創業年",
            pattern: Regex::new(r"(?:創業|設立)(?:は|：|:)?\s*([0-9０-９]{4})年").unwrap(),
        },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    LengthImbalance,
    StyleMixing,
    DigitWidthMixing,
    ConflictingFigures,
}

/// One inconsistency found across sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencySignal {
    pub kind: SignalKind,
    pub message: String,
    pub penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// 0-100; 0 when no section has content
    pub score: u32,
    pub signals: Vec<ConsistencySignal>,
}

/// Evaluate the effective contents of a document's sections
pub fn evaluate(contents: &[&str]) -> ConsistencyReport {
    let filled: Vec<&str> = contents.iter().copied().filter(|c| !is_blank(c)).collect();
    if filled.is_empty() {
        return ConsistencyReport {
            score: 0,
            signals: Vec::new(),
        };
    }

    let signals: Vec<ConsistencySignal> = [
        length_imbalance(&filled),
        style_mixing(&filled),
        digit_width_mixing(&filled),
    ]
    .into_iter()
    .flatten()
    .chain(conflicting_figures(&filled))
    .collect();

    let penalty: u32 = signals.iter().map(|s| s.penalty).sum();
    ConsistencyReport {
        score: 100u32.saturating_sub(penalty),
        signals,
    }
}

fn length_imbalance(filled: &[&str]) -> Option<ConsistencySignal> {
    if filled.len() < 2 {
        return None;
    }
    let lengths: Vec<f64> = filled.iter().map(|c| char_len(c.trim()) as f64).collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let cv = variance.sqrt() / mean;

    let penalty = ((cv - TOLERATED_LENGTH_CV).max(0.0) * 40.0).round().min(30.0) as u32;
    (penalty > 0).then(|| ConsistencySignal {
        kind: SignalKind::LengthImbalance,
        message: format!("セクションの分量に大きな偏りがあります（変動係数 {:.2}）", cv),
        penalty,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Polite,
    Plain,
}

fn ending_style(sentence: &str) -> Option<Style> {
    let body = sentence.trim_end_matches(|c: char| {
        matches!(c, '。' | '．' | '.' | '！' | '？' | '!' | '?' | '」' | '）' | ')')
    });
    if POLITE_ENDINGS.iter().any(|e| body.ends_with(e)) {
        Some(Style::Polite)
    } else if PLAIN_ENDINGS.iter().any(|e| body.ends_with(e)) {
        Some(Style::Plain)
    } else {
        None
    }
}

/// Dominant sentence-ending style of one section
fn section_style(content: &str) -> Option<Style> {
    let (mut polite, mut plain) = (0usize, 0usize);
    for sentence in sentences(content) {
        match ending_style(sentence) {
            Some(Style::Polite) => polite += 1,
            Some(Style::Plain) => plain += 1,
            None => {}
        }
    }
    match polite.cmp(&plain) {
        std::cmp::Ordering::Greater => Some(Style::Polite),
        std::cmp::Ordering::Less => Some(Style::Plain),
        std::cmp::Ordering::Equal => None,
    }
}

/// です/ます sections mixed with だ/である sections
fn style_mixing(filled: &[&str]) -> Option<ConsistencySignal> {
    let styles: Vec<Style> = filled.iter().filter_map(|c| section_style(c)).collect();
    let polite = styles.iter().filter(|s| **s == Style::Polite).count();
    let plain = styles.len() - polite;
    let minority = polite.min(plain);
    if minority == 0 {
        return None;
    }
    let penalty = ((40.0 * minority as f64 / styles.len() as f64).round() as u32).min(20);
    Some(ConsistencySignal {
        kind: SignalKind::StyleMixing,
        message: format!(
            "です・ます調（{}セクション）とだ・である調（{}セクション）が混在しています",
            polite, plain
        ),
        penalty,
    })
}

fn digit_width_mixing(filled: &[&str]) -> Option<ConsistencySignal> {
    let ascii = filled.iter().any(|c| c.chars().any(|ch| ch.is_ascii_digit()));
    let fullwidth = filled.iter().any(|c| c.chars().any(is_fullwidth_digit));
    (ascii && fullwidth).then(|| ConsistencySignal {
        kind: SignalKind::DigitWidthMixing,
        message: "半角数字と全角数字が混在しています".to_string(),
        penalty: 10,
    })
}

fn normalize_figure(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '，'))
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '．' => '.',
            other => other,
        })
        .collect()
}

/// The same labelled figure stated with different values
fn conflicting_figures(filled: &[&str]) -> Vec<ConsistencySignal> {
    let mut values: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for content in filled {
        for figure in LABELLED_FIGURES.iter() {
            for caps in figure.pattern.captures_iter(content) {
                let Some(value) = caps.get(1) else { continue };
                let unit = caps.get(2).map_or("", |u| u.as_str());
                values
                    .entry(figure.label)
                    .or_default()
                    .insert(format!("{}{}", normalize_figure(value.as_str()), unit));
            }
        }
    }

    values
        .into_iter()
        .filter(|(_, found)| found.len() > 1)
        .map(|(label, found)| ConsistencySignal {
            kind: SignalKind::ConflictingFigures,
            message: format!(
                "{}の記載が一致しません: {}",
                label,
                found.into_iter().collect::<Vec<_>>().join(" / ")
            ),
            penalty: 15,
        })
        .collect()
}
