use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::SearchSettings;
use crate::core::{PartnerMatcher, SearchError, SearchFilters};
use crate::models::{ClimberProfile, CompatibilityRequest, CompatibilityResponse, ErrorResponse, HealthResponse, SearchRequest, SearchResponse};
use crate::services::{DirectoryError, ProfileDirectory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: ProfileDirectory,
    pub matcher: PartnerMatcher,
    pub search: SearchSettings,
}

/// Configure all partner-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/users/search", web::get().to(search_partners))
        .route("/users/{user_id}", web::get().to(get_user))
        .route("/users/{user_id}", web::put().to(update_user))
        .route("/compatibility", web::post().to(compatibility));
}

fn error_response(status: u16, error: &str, message: String) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    };
    match status {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

fn directory_error_response(err: DirectoryError) -> HttpResponse {
    match err {
        DirectoryError::NotFound(_) => error_response(404, "User not found", err.to_string()),
        other => error_response(500, "Directory error", other.to_string()),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        profiles: state.directory.len().await,
    })
}

/// Search for climbing partners
///
/// GET /api/v1/users/search?userId=...&location=...&experienceLevel=...&climbingTypes=a,b&availability=Monday,Saturday&page=1&limit=20
///
/// Candidates are filtered, paged newest-first, then the page is ranked by
/// compatibility with the seeker.
async fn search_partners(
    state: web::Data<AppState>,
    query: web::Query<SearchRequest>,
) -> impl Responder {
    let request = query.into_inner();

    let filters = match request
        .validate()
        .map_err(SearchError::from)
        .and_then(|_| SearchFilters::from_request(&request))
    {
        Ok(filters) => filters,
        Err(e) => {
            tracing::info!("Rejected search for {:?}: {}", request.user_id, e);
            return error_response(400, "Validation failed", e.to_string());
        }
    };

    let seeker = match state.directory.get(&request.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Search by unknown user {}: {}", request.user_id, e);
            return directory_error_response(e);
        }
    };

    let limit = state.search.effective_limit(request.limit);
    let candidates = state.directory.all().await;

    tracing::debug!("Searching {} profiles for {} with {:?}", candidates.len(), seeker.id, filters);

    let result = state
        .matcher
        .search(&seeker, candidates, &filters, request.page, limit);

    tracing::info!(
        "Found {} partners for {} (page {} of {}, {} total)",
        result.partners.len(),
        seeker.id,
        result.pagination.current,
        result.pagination.total_pages,
        result.pagination.total_results
    );

    HttpResponse::Ok().json(SearchResponse {
        users: result.partners,
        pagination: result.pagination,
    })
}

/// Get a single profile
///
/// GET /api/v1/users/{user_id}
async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();
    match state.directory.get(&user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => directory_error_response(e),
    }
}

/// Create or replace a profile
///
/// PUT /api/v1/users/{user_id}
///
/// The path id wins over any `userId` in the body. On replace, `username` and
/// `createdAt` are carried over from the stored profile. Responds 201 with the
/// stored profile when it is new, 200 when it replaced one.
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ClimberProfile>,
) -> impl Responder {
    let user_id = path.into_inner();
    let mut profile = body.into_inner();
    profile.id = user_id.clone();

    if let Ok(existing) = state.directory.get(&user_id).await {
        profile.username = existing.username;
        profile.created_at = existing.created_at;
    }

    let stored = profile.clone();
    match state.directory.upsert(profile).await {
        Some(_) => {
            tracing::info!("Updated profile {}", user_id);
            HttpResponse::Ok().json(stored)
        }
        None => {
            tracing::info!("Created profile {}", user_id);
            HttpResponse::Created().json(stored)
        }
    }
}

/// Score two profiles against each other
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "userA": { "userId": "a", "location": "Austin", ... },
///   "userB": { "userId": "b", "location": "Austin", ... }
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    let comparison = state.matcher.compare(&req.user_a, &req.user_b);

    tracing::debug!(
        "Compatibility {} <-> {}: {}",
        req.user_a.id,
        req.user_b.id,
        comparison.score
    );

    HttpResponse::Ok().json(CompatibilityResponse {
        compatibility_score: comparison.score,
        breakdown: comparison.breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn state_with(profiles: Vec<ClimberProfile>) -> AppState {
        AppState {
            directory: ProfileDirectory::from_profiles(profiles),
            matcher: PartnerMatcher::default(),
            search: SearchSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_health_check_reports_profiles() {
        let seeker = ClimberProfile {
            id: "seeker".to_string(),
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![seeker])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.profiles, 1);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/users/nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_put_unknown_user_creates_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/users/newcomer")
            .set_json(serde_json::json!({"userId": "ignored", "location": "Austin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let stored: ClimberProfile = test::read_body_json(resp).await;
        assert_eq!(stored.id, "newcomer");
        assert_eq!(stored.location.as_deref(), Some("Austin"));
    }
}
