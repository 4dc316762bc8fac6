use crate::models::{ClimberProfile, Discipline, ExperienceLevel, ScoreBreakdown, ScoringWeights};
use crate::core::similarity::jaccard_similarity;

/// Calculate the compatibility score (0-100) between two climbers
///
/// Scoring formula:
/// score = round(100 * (
///     location     * 0.20 +   # Same city/region
///     style        * 0.15 +   # Shared climbing types
///     experience   * 0.12 +   # Same or adjacent level
///     grade        * 0.10 +   # Same grade per shared discipline
///     availability * 0.13 +   # Shared weekly slots
///     gyms         * 0.10 +   # Shared preferred gyms
///     goals        * 0.05 +   # Shared goals
///     age          * 0.15     # Age proximity band
/// ))
///
/// Missing data zeroes a factor without rebalancing the others, so sparse
/// profiles cannot reach 100. Rounding is half away from zero.
pub fn compatibility_score(a: &ClimberProfile, b: &ClimberProfile) -> u8 {
    compatibility_score_with(a, b, &ScoringWeights::COMPATIBILITY)
}

/// Same as [`compatibility_score`] with an explicit weight table
pub fn compatibility_score_with(
    a: &ClimberProfile,
    b: &ClimberProfile,
    weights: &ScoringWeights,
) -> u8 {
    to_percentage(score_breakdown(a, b).weighted_sum(weights))
}

/// Compute all eight sub-scores for a pair of profiles
pub fn score_breakdown(a: &ClimberProfile, b: &ClimberProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        location: location_score(a, b),
        style: style_score(a, b),
        experience: experience_score(a, b),
        grade: grade_score(a, b),
        availability: availability_score(a, b),
        gyms: gym_score(a, b),
        goals: goals_score(a, b),
        age: age_score(a, b),
    }
}

/// Scale a weighted sum in [0, 1] to a whole percentage
#[inline]
pub(crate) fn to_percentage(weighted_sum: f64) -> u8 {
    (weighted_sum * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Location score: exact match after trimming and lowercasing
#[inline]
pub fn location_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    match (a.normalized_location(), b.normalized_location()) {
        (Some(loc_a), Some(loc_b)) if loc_a == loc_b => 1.0,
        _ => 0.0,
    }
}

/// Style score: Jaccard overlap of climbing types
#[inline]
pub fn style_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    jaccard_similarity(&a.climbing_type, &b.climbing_type)
}

/// Experience score between two profiles
#[inline]
pub fn experience_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    experience_proximity(a.experience, b.experience)
}

/// Same level = 1, adjacent levels = 0.5, further apart or unknown = 0
pub fn experience_proximity(a: Option<ExperienceLevel>, b: Option<ExperienceLevel>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    match a.rank().abs_diff(b.rank()) {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

/// Grade score: share of commonly graded disciplines with an identical grade
pub fn grade_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    let mut comparisons = 0u32;
    let mut matches = 0u32;

    for discipline in Discipline::ALL {
        if let (Some(grade_a), Some(grade_b)) = (
            a.climbing_grade.get(discipline),
            b.climbing_grade.get(discipline),
        ) {
            comparisons += 1;
            if grade_a == grade_b {
                matches += 1;
            }
        }
    }

    if comparisons == 0 {
        return 0.0;
    }

    matches as f64 / comparisons as f64
}

/// Availability score: slots both have set over slots either has set
pub fn availability_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    let (overlap, total) = a
        .availability
        .slots()
        .iter()
        .zip(b.availability.slots())
        .fold((0u32, 0u32), |(overlap, total), (&slot_a, slot_b)| {
            (
                overlap + u32::from(slot_a && slot_b),
                total + u32::from(slot_a || slot_b),
            )
        });

    if total == 0 {
        return 0.0;
    }

    overlap as f64 / total as f64
}

/// Gym score: Jaccard overlap of preferred gyms
#[inline]
pub fn gym_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    jaccard_similarity(&a.preferred_gyms, &b.preferred_gyms)
}

/// Goals score: Jaccard overlap of goals
#[inline]
pub fn goals_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    jaccard_similarity(&a.goals, &b.goals)
}

/// Age score: same age = 1, within 5 years = 0.7, within 10 = 0.4, else 0
pub fn age_score(a: &ClimberProfile, b: &ClimberProfile) -> f64 {
    let (Some(age_a), Some(age_b)) = (a.known_age(), b.known_age()) else {
        return 0.0;
    };

    let diff = (age_a - age_b).abs();
    if diff == 0.0 {
        1.0
    } else if diff <= 5.0 {
        0.7
    } else if diff <= 10.0 {
        0.4
    } else {
        0.0
    }
}
