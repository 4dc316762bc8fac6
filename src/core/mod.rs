// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use filters::{matches_search_filters, parse_day_list, AvailabilityQuery, SearchError, SearchFilters};
pub use matcher::{Comparison, PartnerMatcher, SearchResult};
pub use scoring::{
    age_score, availability_score, compatibility_score, compatibility_score_with,
    experience_proximity, experience_score, goals_score, grade_score, gym_score,
    location_score, score_breakdown, style_score,
};
pub use similarity::jaccard_similarity;
