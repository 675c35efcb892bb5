// src/utils/basic_auth.rs

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::credentials::{AdminCredential, parse_basic_auth};
use crate::error::AppError;

/// Axum Middleware: Admin Authentication.
///
/// Checks the `Authorization: Basic ...` header against the shared admin
/// credential. Missing or wrong credentials get a 401 with a
/// `WWW-Authenticate` challenge so browsers prompt for a login.
pub async fn admin_middleware(
    State(admin): State<Arc<AdminCredential>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic_auth);

    match credentials {
        Some((username, password)) if admin.verify(&username, &password) => next.run(req).await,
        Some((username, _)) => {
            tracing::warn!(username = %username, "admin authentication failed");
            unauthorized()
        }
        None => unauthorized(),
    }
}

fn unauthorized() -> Response {
    AppError::AuthError("Incorrect username or password".to_string()).into_response()
}
