use serde::{Deserialize, Serialize};

/// A stored movie. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i32,
}

/// Input for creating a movie
///
/// Accepted as-is: empty titles and any year are stored without checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub year: i32,
}

impl CreateMovie {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            year,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the store-assigned id
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            year: self.year,
        }
    }
}
