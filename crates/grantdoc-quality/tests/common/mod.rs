//! Shared fixtures: the complete JIZOKUKA application from the compliance
//! tests, and the same application with nothing filled in.

#[path = "../../../grantdoc-compliance/tests/common/mod.rs"]
mod jizokuka;

use grantdoc_core::DocumentSection;

pub use jizokuka::{jizokuka_document, JIZOKUKA_SECTIONS};

/// Every required section present, none filled in
pub fn unfilled_document() -> Vec<DocumentSection> {
    JIZOKUKA_SECTIONS
        .iter()
        .map(|(key, title, _)| DocumentSection::new(*key, *title))
        .collect()
}
