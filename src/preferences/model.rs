use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::articles::Category;

/// A user's saved category selection.
///
/// The backend filters out invalid categories on save and hands back the
/// full taxonomy as the default for unknown users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub preferred_categories: Vec<Category>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
