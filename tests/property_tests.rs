//! Property-based tests for the compatibility scorer.
//!
//! # Invariants tested
//!
//! - **Bounds:** every score is in [0, 100] and every sub-score in [0, 1].
//! - **Symmetry:** swapping the two profiles never changes any factor.
//! - **Idempotence:** repeated calls give the same result.
//! - **Age absence:** a missing age zeroes the age factor whatever the other side says.
//! - **Self match:** a fully populated profile scores 100 against itself.

use belay_algo::core::scoring::{age_score, compatibility_score, score_breakdown};
use belay_algo::models::{Availability, ClimberProfile, ClimbingGrades, ExperienceLevel};
use proptest::prelude::*;

const LOCATIONS: &[&str] = &["Austin", "austin ", "Boulder", "Seattle", ""];
const CITIES: &[&str] = &["Austin", "Boulder", "Seattle"];
const STYLES: &[&str] = &["bouldering", "sport", "trad", "gym", "outdoor"];
const GYMS: &[&str] = &["Crux Climbing Center", "Austin Bouldering Project", "Movement", "The Spot"];
const GOALS: &[&str] = &["training", "social", "competition", "outdoor", "other"];
const BOULDER_GRADES: &[&str] = &["V2", "V4", "V6"];
const ROPE_GRADES: &[&str] = &["5.9", "5.10a", "5.11c"];

fn pick_list(options: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(proptest::sample::select(options), 0..=4)
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn maybe_pick(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(options).prop_map(str::to_string))
}

fn experience_strategy() -> impl Strategy<Value = Option<ExperienceLevel>> {
    proptest::option::of(proptest::sample::select(ExperienceLevel::ALL.to_vec()))
}

fn profile_strategy() -> impl Strategy<Value = ClimberProfile> {
    (
        maybe_pick(LOCATIONS),
        pick_list(STYLES),
        experience_strategy(),
        (maybe_pick(BOULDER_GRADES), maybe_pick(ROPE_GRADES), maybe_pick(ROPE_GRADES)),
        any::<(bool, bool, bool)>(),
        pick_list(GYMS),
        pick_list(GOALS),
        proptest::option::of(prop_oneof![(0_u16..=90).prop_map(f64::from), 0.0_f64..=90.0]),
    )
        .prop_map(
            |(location, climbing_type, experience, (bouldering, sport, trad), (weekdays, weekends, evenings), preferred_gyms, goals, age)| {
                ClimberProfile {
                    id: "generated".to_string(),
                    username: String::new(),
                    location,
                    climbing_type,
                    experience,
                    climbing_grade: ClimbingGrades { bouldering, sport, trad },
                    availability: Availability { weekdays, weekends, evenings },
                    preferred_gyms,
                    goals,
                    age,
                    created_at: None,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn score_is_bounded(a in profile_strategy(), b in profile_strategy()) {
        let score = compatibility_score(&a, &b);
        prop_assert!(score <= 100);

        let breakdown = score_breakdown(&a, &b);
        for factor in [
            breakdown.location,
            breakdown.style,
            breakdown.experience,
            breakdown.grade,
            breakdown.availability,
            breakdown.gyms,
            breakdown.goals,
            breakdown.age,
        ] {
            prop_assert!((0.0..=1.0).contains(&factor), "sub-score {} out of range", factor);
        }
    }

    #[test]
    fn every_factor_is_symmetric(a in profile_strategy(), b in profile_strategy()) {
        prop_assert_eq!(score_breakdown(&a, &b), score_breakdown(&b, &a));
        prop_assert_eq!(compatibility_score(&a, &b), compatibility_score(&b, &a));
    }

    #[test]
    fn scoring_is_idempotent(a in profile_strategy(), b in profile_strategy()) {
        prop_assert_eq!(compatibility_score(&a, &b), compatibility_score(&a, &b));
    }

    #[test]
    fn missing_age_zeroes_age_factor(a in profile_strategy(), mut b in profile_strategy(), other_age in 0.0_f64..=90.0) {
        b.age = None;
        prop_assert_eq!(age_score(&a, &b), 0.0);

        let mut a2 = a.clone();
        a2.age = Some(other_age);
        prop_assert_eq!(compatibility_score(&a2, &b), compatibility_score(&a, &b));
    }

    #[test]
    fn complete_profile_matches_itself(
        location in proptest::sample::select(CITIES),
        experience in proptest::sample::select(ExperienceLevel::ALL.to_vec()),
        age in 0.5_f64..=90.0,
        style in proptest::sample::select(STYLES),
        gym in proptest::sample::select(GYMS),
        goal in proptest::sample::select(GOALS),
    ) {
        let profile = ClimberProfile {
            id: "self".to_string(),
            location: Some(location.to_string()),
            climbing_type: vec![style.to_string()],
            experience: Some(experience),
            climbing_grade: ClimbingGrades {
                bouldering: Some("V5".to_string()),
                ..Default::default()
            },
            availability: Availability { weekdays: true, weekends: false, evenings: false },
            preferred_gyms: vec![gym.to_string()],
            goals: vec![goal.to_string()],
            age: Some(age),
            ..Default::default()
        };

        prop_assert_eq!(compatibility_score(&profile, &profile.clone()), 100);
    }
}
