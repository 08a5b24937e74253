//! Data Model: DocumentSection
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One editable unit of a generated application document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    pub id: String,
    /// Owning application document
    pub application_id: String,
    /// Stable machine key (ex: "company_overview"), unique within a document
    pub section_key: String,
    /// Human-readable heading
    pub section_title: String,
    /// Display and print order
    pub order_index: i32,

    #[serde(default)]
    pub ai_generated_content: Option<String>,
    #[serde(default)]
    pub user_edited_content: Option<String>,
    #[serde(default)]
    pub final_content: Option<String>,

    /// Provenance, not read by the analysis engine
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentSection {
    /// Create a section with no content layers
    pub fn new(section_key: impl Into<String>, section_title: impl Into<String>) -> Self {
        let section_key = section_key.into();
        let now = Utc::now();
        Self {
            id: format!("section:{}", section_key),
            application_id: String::new(),
            section_key,
            section_title: section_title.into(),
            order_index: 0,
            ai_generated_content: None,
            user_edited_content: None,
            final_content: None,
            model_used: None,
            generated_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_application(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = application_id.into();
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    /// Set the AI-generated layer
    pub fn with_ai_content(mut self, content: impl Into<String>) -> Self {
        self.ai_generated_content = Some(content.into());
        self
    }

    /// Set the user-edited layer
    pub fn with_user_content(mut self, content: impl Into<String>) -> Self {
        self.user_edited_content = Some(content.into());
        self
    }

    /// Set the final layer
    pub fn with_final_content(mut self, content: impl Into<String>) -> Self {
        self.final_content = Some(content.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_used = Some(model.into());
        self
    }

    /// The text every analysis sees for this section.
    ///
    /// Resolves `final_content`, then `user_edited_content`, then
    /// `ai_generated_content`. A layer that is absent or the empty string is
    /// skipped; whitespace-only text still counts as a layer. Falls back to
    /// `""`.
    pub fn effective_content(&self) -> &str {
        [
            &self.final_content,
            &self.user_edited_content,
            &self.ai_generated_content,
        ]
        .into_iter()
        .filter_map(|layer| layer.as_deref())
        .find(|text| !text.is_empty())
        .unwrap_or("")
    }
}
