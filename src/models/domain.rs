use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Climber profile with the attributes relevant to partner matching
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimberProfile {
    #[serde(rename = "userId")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "climbingType", default)]
    pub climbing_type: Vec<String>,
    #[serde(default, deserialize_with = "lenient_experience")]
    pub experience: Option<ExperienceLevel>,
    #[serde(rename = "climbingGrade", default)]
    pub climbing_grade: ClimbingGrades,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "preferredGyms", default)]
    pub preferred_gyms: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ClimberProfile {
    /// Location trimmed and lowercased, `None` when absent or empty.
    ///
    /// Only the empty string counts as missing; a whitespace-only location
    /// is kept and trims down to `""`.
    pub fn normalized_location(&self) -> Option<String> {
        self.location
            .as_deref()
            .filter(|loc| !loc.is_empty())
            .map(|loc| loc.trim().to_lowercase())
    }

    /// Age in years, treating zero and NaN as unknown
    pub fn known_age(&self) -> Option<f64> {
        self.age.filter(|age| *age != 0.0 && !age.is_nan())
    }
}

/// Ordinal experience scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    /// Position on the scale, 0 for beginner through 3 for expert
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Expert => "expert",
        }
    }

    /// Exact, case-sensitive match against the canonical lowercase names
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown experience level: {0}")]
pub struct ParseExperienceError(pub String);

impl FromStr for ExperienceLevel {
    type Err = ParseExperienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(ParseExperienceError(s.to_string())),
        }
    }
}

/// Anything but an exact canonical name becomes `None` instead of failing
/// the whole profile. `"Advanced"` is unrecognized here, unlike in a search
/// query where `FromStr` is forgiving.
fn lenient_experience<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ExperienceLevel::from_canonical))
}

/// Climbing disciplines that carry a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Bouldering,
    Sport,
    Trad,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Bouldering, Discipline::Sport, Discipline::Trad];
}

/// Self-reported grade per discipline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbingGrades {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bouldering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trad: Option<String>,
}

impl ClimbingGrades {
    /// Grade for a discipline, ignoring empty strings
    pub fn get(&self, discipline: Discipline) -> Option<&str> {
        let grade = match discipline {
            Discipline::Bouldering => &self.bouldering,
            Discipline::Sport => &self.sport,
            Discipline::Trad => &self.trad,
        };
        grade.as_deref().filter(|g| !g.is_empty())
    }
}

/// Weekly availability slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub weekdays: bool,
    #[serde(default)]
    pub weekends: bool,
    #[serde(default)]
    pub evenings: bool,
}

impl Availability {
    pub fn slots(&self) -> [bool; 3] {
        [self.weekdays, self.weekends, self.evenings]
    }
}

/// Per-factor weights for the compatibility score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub style: f64,
    pub experience: f64,
    pub grade: f64,
    pub availability: f64,
    pub gyms: f64,
    pub goals: f64,
    pub age: f64,
}

impl ScoringWeights {
    /// Production weight table, sums to 1.0
    pub const COMPATIBILITY: ScoringWeights = ScoringWeights {
        location: 0.20,
        style: 0.15,
        experience: 0.12,
        grade: 0.10,
        availability: 0.13,
        gyms: 0.10,
        goals: 0.05,
        age: 0.15,
    };

    pub fn total(&self) -> f64 {
        self.location
            + self.style
            + self.experience
            + self.grade
            + self.availability
            + self.gyms
            + self.goals
            + self.age
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::COMPATIBILITY
    }
}

/// The eight sub-scores behind a compatibility score, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub location: f64,
    pub style: f64,
    pub experience: f64,
    pub grade: f64,
    pub availability: f64,
    pub gyms: f64,
    pub goals: f64,
    pub age: f64,
}

impl ScoreBreakdown {
    /// Weighted sum in [0, 1], accumulated in a fixed factor order
    pub fn weighted_sum(&self, weights: &ScoringWeights) -> f64 {
        let mut sum = 0.0;
        sum += weights.location * self.location;
        sum += weights.style * self.style;
        sum += weights.experience * self.experience;
        sum += weights.grade * self.grade;
        sum += weights.availability * self.availability;
        sum += weights.gyms * self.gyms;
        sum += weights.goals * self.goals;
        sum += weights.age * self.age;
        sum
    }
}

/// Search result entry: the candidate profile plus its score against the seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPartner {
    #[serde(flatten)]
    pub profile: ClimberProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
}

/// Page metadata for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: usize,
    #[serde(rename = "total")]
    pub total_pages: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}
