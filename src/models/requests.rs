use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ClimberProfile;

/// Query parameters for partner search
///
/// List-valued filters are comma separated, e.g. `climbingTypes=sport,trad`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[serde(rename = "climbingTypes", default)]
    pub climbing_types: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: usize,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_page() -> usize {
    1
}

/// Request to score two arbitrary profiles against each other
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(rename = "userA")]
    pub user_a: ClimberProfile,
    #[serde(rename = "userB")]
    pub user_b: ClimberProfile,
}
