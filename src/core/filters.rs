use crate::models::{ClimberProfile, ExperienceLevel, SearchRequest};
use thiserror::Error;

/// Errors that can occur while turning search parameters into filters
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid experience level: {0}")]
    InvalidExperience(#[from] crate::models::ParseExperienceError),
}

/// Availability slots required by a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub weekdays: bool,
    pub weekends: bool,
}

impl AvailabilityQuery {
    pub fn is_empty(&self) -> bool {
        !self.weekdays && !self.weekends
    }
}

/// Hard filters applied before scoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Lowercased location fragment
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub climbing_types: Vec<String>,
    pub availability: AvailabilityQuery,
}

impl SearchFilters {
    /// Build filters from raw query parameters
    ///
    /// Blank parameters are treated as absent.
    pub fn from_request(request: &SearchRequest) -> Result<Self, SearchError> {
        let location = non_blank(request.location.as_deref()).map(str::to_lowercase);

        let experience = non_blank(request.experience_level.as_deref())
            .map(str::parse::<ExperienceLevel>)
            .transpose()?;

        let climbing_types = non_blank(request.climbing_types.as_deref())
            .map(split_list)
            .unwrap_or_default();

        let availability = non_blank(request.availability.as_deref())
            .map(parse_day_list)
            .unwrap_or_default();

        Ok(Self {
            location,
            experience,
            climbing_types,
            availability,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a comma-separated list of weekday names onto availability slots
///
/// Any of Monday-Friday requires weekdays, Saturday or Sunday requires
/// weekends. Unknown names are ignored.
pub fn parse_day_list(raw: &str) -> AvailabilityQuery {
    let mut query = AvailabilityQuery::default();

    for day in split_list(raw) {
        match day.to_lowercase().as_str() {
            "monday" | "tuesday" | "wednesday" | "thursday" | "friday" => query.weekdays = true,
            "saturday" | "sunday" => query.weekends = true,
            _ => {}
        }
    }

    query
}

/// Check if a candidate passes every hard search filter
#[inline]
pub fn matches_search_filters(profile: &ClimberProfile, filters: &SearchFilters) -> bool {
    // Location: case-insensitive substring
    if let Some(fragment) = &filters.location {
        match &profile.location {
            Some(location) if location.to_lowercase().contains(fragment.as_str()) => {}
            _ => return false,
        }
    }

    if let Some(level) = filters.experience {
        if profile.experience != Some(level) {
            return false;
        }
    }

    // At least one shared climbing type
    if !filters.climbing_types.is_empty()
        && !profile
            .climbing_type
            .iter()
            .any(|t| filters.climbing_types.contains(t))
    {
        return false;
    }

    if filters.availability.weekdays && !profile.availability.weekdays {
        return false;
    }

    if filters.availability.weekends && !profile.availability.weekends {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_test_profile(location: &str, experience: ExperienceLevel, types: &[&str]) -> ClimberProfile {
        ClimberProfile {
            id: "test_user".to_string(),
            location: Some(location.to_string()),
            climbing_type: types.iter().map(|t| t.to_string()).collect(),
            experience: Some(experience),
            availability: Availability {
                weekdays: true,
                weekends: false,
                evenings: true,
            },
            ..Default::default()
        }
    }

    fn request() -> SearchRequest {
        SearchRequest {
            user_id: "seeker".to_string(),
            page: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let filters = SearchFilters::from_request(&request()).unwrap();
        let profile = create_test_profile("Austin", ExperienceLevel::Beginner, &[]);
        assert!(matches_search_filters(&profile, &filters));
        assert!(matches_search_filters(&ClimberProfile::default(), &filters));
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let mut req = request();
        req.location = Some("aus".to_string());
        let filters = SearchFilters::from_request(&req).unwrap();

        let austin = create_test_profile("Austin, TX", ExperienceLevel::Advanced, &["sport"]);
        let denver = create_test_profile("Denver", ExperienceLevel::Advanced, &["sport"]);
        assert!(matches_search_filters(&austin, &filters));
        assert!(!matches_search_filters(&denver, &filters));
        assert!(!matches_search_filters(&ClimberProfile::default(), &filters));
    }

    #[test]
    fn test_experience_filter() {
        let mut req = request();
        req.experience_level = Some("Advanced".to_string());
        let filters = SearchFilters::from_request(&req).unwrap();

        let advanced = create_test_profile("Austin", ExperienceLevel::Advanced, &[]);
        let expert = create_test_profile("Austin", ExperienceLevel::Expert, &[]);
        assert!(matches_search_filters(&advanced, &filters));
        assert!(!matches_search_filters(&expert, &filters));
    }

    #[test]
    fn test_invalid_experience_rejected() {
        let mut req = request();
        req.experience_level = Some("wizard".to_string());
        assert!(matches!(
            SearchFilters::from_request(&req),
            Err(SearchError::InvalidExperience(_))
        ));
    }

    #[test]
    fn test_climbing_types_any_of() {
        let mut req = request();
        req.climbing_types = Some("trad, sport".to_string());
        let filters = SearchFilters::from_request(&req).unwrap();
        assert_eq!(filters.climbing_types, vec!["trad", "sport"]);

        let sport = create_test_profile("Austin", ExperienceLevel::Advanced, &["bouldering", "sport"]);
        let gym = create_test_profile("Austin", ExperienceLevel::Advanced, &["gym"]);
        assert!(matches_search_filters(&sport, &filters));
        assert!(!matches_search_filters(&gym, &filters));
    }

    #[test]
    fn test_parse_day_list() {
        assert_eq!(
            parse_day_list("Monday,Saturday"),
            AvailabilityQuery { weekdays: true, weekends: true }
        );
        assert_eq!(
            parse_day_list("sunday"),
            AvailabilityQuery { weekdays: false, weekends: true }
        );
        assert!(parse_day_list("Someday").is_empty());
    }

    #[test]
    fn test_availability_filter() {
        let mut req = request();
        req.availability = Some("Saturday".to_string());
        let filters = SearchFilters::from_request(&req).unwrap();

        // profile is weekdays-only
        let profile = create_test_profile("Austin", ExperienceLevel::Advanced, &[]);
        assert!(!matches_search_filters(&profile, &filters));

        req.availability = Some("Tuesday".to_string());
        let filters = SearchFilters::from_request(&req).unwrap();
        assert!(matches_search_filters(&profile, &filters));
    }
}
