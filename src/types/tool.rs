//! Tool directory entries, as supplied by the caller.

use serde::{Deserialize, Serialize};

/// A directory entry. The client never mutates or persists these; it only
/// serialises them into prompts and fallback documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Prompt-facing projection of a [`ToolDescriptor`] (no url).
#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary<'a> {
    pub id: u64,
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
}

impl ToolDescriptor {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            url: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn summary(&self) -> ToolSummary<'_> {
        ToolSummary {
            id: self.id,
            name: &self.name,
            category: &self.category,
            description: &self.description,
            tags: &self.tags,
        }
    }
}
