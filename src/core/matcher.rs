use std::cmp::Ordering;

use crate::models::{ClimberProfile, Pagination, ScoreBreakdown, ScoredPartner, ScoringWeights};
use crate::core::{
    filters::{matches_search_filters, SearchFilters},
    scoring::{score_breakdown, to_percentage},
};

/// Result of a partner search
#[derive(Debug)]
pub struct SearchResult {
    pub partners: Vec<ScoredPartner>,
    pub pagination: Pagination,
}

/// Pairwise comparison with the per-factor detail
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Partner search orchestrator
///
/// # Pipeline Stages
/// 1. Drop the seeker and candidates failing the hard filters
/// 2. Order newest profiles first
/// 3. Cut the requested page
/// 4. Score the page against the seeker and rank it
#[derive(Debug, Clone, Copy)]
pub struct PartnerMatcher {
    weights: ScoringWeights,
}

impl PartnerMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::COMPATIBILITY,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score two profiles and keep the sub-scores
    pub fn compare(&self, a: &ClimberProfile, b: &ClimberProfile) -> Comparison {
        let breakdown = score_breakdown(a, b);
        let score = to_percentage(breakdown.weighted_sum(&self.weights));

        Comparison { score, breakdown }
    }

    /// Find partners for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The climber running the search
    /// * `candidates` - Every profile the search may return
    /// * `filters` - Hard filters from the query
    /// * `page` - 1-based page number (0 is treated as 1)
    /// * `limit` - Page size (0 is treated as 1)
    ///
    /// Ranking by compatibility happens within the page only; the page
    /// itself is cut from the newest-first ordering.
    pub fn search(
        &self,
        seeker: &ClimberProfile,
        candidates: Vec<ClimberProfile>,
        filters: &SearchFilters,
        page: usize,
        limit: usize,
    ) -> SearchResult {
        let page = page.max(1);
        let limit = limit.max(1);

        let mut eligible: Vec<ClimberProfile> = candidates
            .into_iter()
            .filter(|profile| profile.id != seeker.id)
            .filter(|profile| matches_search_filters(profile, filters))
            .collect();

        eligible.sort_by(newest_first);

        let total = eligible.len();
        let skip = (page - 1).saturating_mul(limit);

        let mut partners: Vec<ScoredPartner> = eligible
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|profile| {
                let compatibility_score = self.compare(seeker, &profile).score;
                ScoredPartner {
                    profile,
                    compatibility_score,
                }
            })
            .collect();

        // Stable, so ties keep newest-first order
        partners.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        let pagination = Pagination {
            current: page,
            total_pages: total.div_ceil(limit),
            has_more: skip.saturating_add(partners.len()) < total,
            total_results: total,
        };

        SearchResult {
            partners,
            pagination,
        }
    }
}

impl Default for PartnerMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Newest `created_at` first, missing timestamps last, then by id
fn newest_first(a: &ClimberProfile, b: &ClimberProfile) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}
