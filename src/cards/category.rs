//! Category reference data.

use serde::{Deserialize, Serialize};

use super::question::CategoryId;

/// A topic category. Presentation fields are carried, never interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    pub description: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub gradient: String,
}

impl Category {
    /// Create a category with empty presentation metadata.
    #[must_use]
    pub fn new(
        id: impl Into<CategoryId>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            color: String::new(),
            gradient: String::new(),
        }
    }

    /// Attach presentation metadata (builder pattern).
    #[must_use]
    pub fn with_presentation(mut self, color: impl Into<String>, gradient: impl Into<String>) -> Self {
        self.color = color.into();
        self.gradient = gradient.into();
        self
    }

    /// Category for a generated batch.
    #[must_use]
    pub fn generated(id: impl Into<CategoryId>, context: &str) -> Self {
        Self::new(id, "AI Magic", format!("Generated for: {context}"))
            .with_presentation("bg-amber-500", "from-amber-400 to-amber-600")
    }
}
