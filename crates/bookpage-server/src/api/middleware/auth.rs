use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::domain::Business;
use crate::error::{AppError, Result};
use crate::scheduling::profile;
use crate::store::Store;

/// Header carrying the authenticated user id, set by the session gateway
/// in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    /// The business owned by the caller. Every management route is scoped
    /// to it.
    pub async fn business(&self, store: &dyn Store) -> Result<Business> {
        profile::business_for_owner(store, self.user_id).await
    }
}

pub async fn middleware(
    mut req: Request<Body>,
    next: Next,
) -> std::result::Result<Response, AppError> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or(AppError::Unauthorized)?;

    req.extensions_mut().insert(AuthContext { user_id });

    Ok(next.run(req).await)
}
