//! Belay Algo - climbing partner compatibility and search service
//!
//! This library provides the compatibility scorer used to rank climbing
//! partners, plus the search pipeline and HTTP surface built around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compatibility_score, score_breakdown, PartnerMatcher, SearchFilters};
pub use models::{ClimberProfile, ExperienceLevel, ScoreBreakdown, ScoredPartner, ScoringWeights, SearchRequest, SearchResponse};
