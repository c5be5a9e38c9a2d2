use serde::{Deserialize, Serialize};

/// A persisted association between a user and a produced image URL.
///
/// Written once per successful transformation and never updated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    pub id: i64,
    pub user_id: i64,
    pub image_uri: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewImageRecord {
    pub user_id: i64,
    pub image_uri: String,
    pub created_at: String,
}

impl NewImageRecord {
    pub fn new(user_id: i64, image_uri: String) -> Self {
        Self {
            user_id,
            image_uri,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
