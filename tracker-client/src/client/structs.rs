use serde::Serialize;

/// Body of a story update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateStoryRequest {
    pub description: String,
}

impl UpdateStoryRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
