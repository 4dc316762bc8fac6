// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, ClimberProfile, ClimbingGrades, Discipline, ExperienceLevel, Pagination,
    ParseExperienceError, ScoreBreakdown, ScoredPartner, ScoringWeights,
};
pub use requests::{CompatibilityRequest, SearchRequest};
pub use responses::{CompatibilityResponse, ErrorResponse, HealthResponse, SearchResponse};
