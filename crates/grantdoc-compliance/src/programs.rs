//! Program section catalog
//!
//! Maps a grant program identifier to the ordered sections its application
//! must contain. Programs are data: supporting a new one means adding an
//! entry, not a code path. Identifiers missing from the catalog carry no
//! completeness constraint.

use std::collections::{HashMap, HashSet};

use grantdoc_core::{from_yaml, GrantDocError};
use serde::{Deserialize, Serialize};

/// A section a program requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSection {
    pub key: String,
    pub title: String,
}

impl RequiredSection {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Ordered required sections of one program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSectionSet {
    /// Program identifier (ex: "JIZOKUKA")
    pub program: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    pub sections: Vec<RequiredSection>,
}

impl ProgramSectionSet {
    pub fn new(program: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Append a required section
    pub fn with_section(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.sections.push(RequiredSection::new(key, title));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Required sections whose key is not in `present`, in program order
    pub fn missing<'a>(&'a self, present: &HashSet<&str>) -> Vec<&'a RequiredSection> {
        self.sections
            .iter()
            .filter(|s| !present.contains(s.key.as_str()))
            .collect()
    }

    fn validate(&self) -> Result<(), GrantDocError> {
        if self.program.trim().is_empty() {
            return Err(GrantDocError::Config("program identifier is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.key.trim().is_empty() {
                return Err(GrantDocError::Config(format!(
                    "program {} has a section with an empty key",
                    self.program
                )));
            }
            if !seen.insert(section.key.as_str()) {
                return Err(GrantDocError::Config(format!(
                    "program {} lists section {} twice",
                    self.program, section.key
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    programs: Vec<ProgramSectionSet>,
}

/// Lookup table from program identifier to its section set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramCatalog {
    programs: HashMap<String, ProgramSectionSet>,
}

impl ProgramCatalog {
    /// An empty catalog: no program has a completeness constraint
    pub fn empty() -> Self {
        Self::default()
    }

    /// The reference configuration shipped with the engine
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            ProgramSectionSet::new("JIZOKUKA", "小規模事業者持続化補助金")
                .with_section("company_overview", "企業概要")
                .with_section("customer_needs", "顧客ニーズと市場の動向")
                .with_section("strengths", "自社や自社の提供する商品・サービスの強み")
                .with_section("management_policy", "経営方針・目標と今後のプラン")
                .with_section("project_name", "補助事業で行う事業名")
                .with_section("sales_expansion", "販路開拓等の取組内容")
                .with_section("efficiency", "業務効率化の取組内容")
                .with_section("expected_effect", "補助事業の効果"),
        );
        catalog.insert(
            ProgramSectionSet::new("MONODUKURI", "ものづくり・商業・サービス生産性向上促進補助金")
                .with_section("company_overview", "企業概要")
                .with_section("current_challenges", "現状の課題")
                .with_section("project_plan", "事業計画の具体的内容")
                .with_section("technical_feasibility", "技術的能力と実施体制")
                .with_section("market_potential", "事業化に向けた市場性")
                .with_section("expected_effect", "事業の効果"),
        );
        catalog.insert(
            ProgramSectionSet::new("SHINJIGYO", "中小企業新事業進出補助金")
                .with_section("company_overview", "企業概要")
                .with_section("new_business", "新事業の内容")
                .with_section("market_analysis", "市場分析")
                .with_section("implementation_plan", "実施体制とスケジュール")
                .with_section("financial_plan", "収益計画")
                .with_section("policy_alignment", "政策目的との整合性"),
        );
        catalog
    }

    /// Load a catalog from YAML
    ///
    /// ```yaml
    /// programs:
    ///   - program: IT_DONYU
    ///     name: IT導入補助金
    ///     sections:
    ///       - key: company_overview
    ///         title: 企業概要
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, GrantDocError> {
        let file: CatalogFile = from_yaml(yaml)?;
        let mut catalog = Self::empty();
        for set in file.programs {
            set.validate()?;
            if catalog.get(&set.program).is_some() {
                return Err(GrantDocError::Config(format!(
                    "program {} is defined twice",
                    set.program
                )));
            }
            catalog.insert(set);
        }
        Ok(catalog)
    }

    /// Overlay `other` on this catalog; programs in `other` replace ours
    pub fn merge(mut self, other: ProgramCatalog) -> Self {
        self.programs.extend(other.programs);
        self
    }

    pub fn insert(&mut self, set: ProgramSectionSet) {
        self.programs.insert(set.program.clone(), set);
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, program: &str) -> Option<&ProgramSectionSet> {
        self.programs.get(program)
    }

    /// Program identifiers, sorted
    pub fn programs(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.programs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_jizokuka_has_eight_sections() {
        let catalog = ProgramCatalog::builtin();
        let set = catalog.get("JIZOKUKA").unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.keys().next(), Some("company_overview"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = ProgramCatalog::builtin();
        assert!(catalog.get("jizokuka").is_none());
        assert!(catalog.get("UNKNOWN").is_none());
        assert_eq!(catalog.programs(), vec!["JIZOKUKA", "MONODUKURI", "SHINJIGYO"]);
    }

    #[test]
    fn test_missing_sections_in_order() {
        let set = ProgramSectionSet::new("P", "p")
            .with_section("a", "A")
            .with_section("b", "B")
            .with_section("c", "C");
        let present: HashSet<&str> = ["b"].into_iter().collect();
        let missing: Vec<&str> = set.missing(&present).iter().map(|s| s.key.as_str()).collect();
        assert_eq!(missing, vec!["a", "c"]);
    }

    #[test]
    fn test_from_yaml_and_merge() {
        let yaml = r#"
programs:
  - program: IT_DONYU
    name: IT導入補助金
    sections:
      - key: company_overview
        title: 企業概要
      - key: it_tool
        title: 導入するITツール
  - program: JIZOKUKA
    sections:
      - key: company_overview
        title: 企業概要
"#;
        let overlay = ProgramCatalog::from_yaml(yaml).unwrap();
        assert_eq!(overlay.get("IT_DONYU").unwrap().len(), 2);

        let merged = ProgramCatalog::builtin().merge(overlay);
        assert_eq!(merged.get("JIZOKUKA").unwrap().len(), 1);
        assert_eq!(merged.get("MONODUKURI").unwrap().len(), 6);
        assert!(merged.get("IT_DONYU").is_some());
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_keys() {
        let yaml = r#"
programs:
  - program: P
    sections:
      - key: a
        title: A
      - key: a
        title: A again
"#;
        let err = ProgramCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_programs() {
        let yaml = r#"
programs:
  - program: P
    sections: []
  - program: P
    sections: []
"#;
        assert!(ProgramCatalog::from_yaml(yaml).is_err());
    }
}
