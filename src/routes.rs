// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{admin, quiz},
    state::AppState,
    utils::basic_auth::admin_middleware,
};

/// Assembles the main application router.
///
/// * Candidate routes (`/api/quiz`) are public.
/// * Admin routes (`/api/admin`) sit behind basic auth.
/// * Applies global middleware (Trace, CORS) and the optional static mount.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/start", post(quiz::start_quiz))
        .route("/submit", post(quiz::submit_quiz));

    let admin_routes = Router::new()
        .route("/quizzes", get(admin::list_quizzes).post(admin::save_quiz))
        .route("/quizzes/{name}", get(admin::get_quiz))
        .route("/quizzes/{name}/link", get(admin::quiz_link))
        .route("/drafts", post(admin::create_draft))
        .route("/drafts/questions", post(admin::add_draft_question))
        .route("/results", get(admin::list_results))
        .route("/results/download", get(admin::download_results))
        .route("/shortlist", post(admin::derive_shortlist))
        .route("/shortlist/download", get(admin::download_shortlist))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    let mut router = Router::new()
        .nest("/api/quiz", quiz_routes)
        .nest("/api/admin", admin_routes);

    if let Some(dir) = &state.config.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
