//! Authorization middleware for the statistics endpoint.
//!
//! Authentication itself is an external concern: a fronting layer (reverse
//! proxy, gateway) authenticates the caller and asserts the identity in the
//! [`IDENTITY_HEADER`] header. This module only decides whether that
//! identity may read statistics, via an injected predicate.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use dbspace_core::config::IDENTITY_HEADER;

use crate::state::AppState;

/// Identity of the authenticated caller, as asserted by the fronting
/// authentication layer. Inserted into request extensions for handlers
/// that need it for audit logging.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub String);

/// Predicate over caller identity.
///
/// The handlers and the query layer never inspect identity themselves;
/// whatever policy is injected here makes the decision. The stock policy
/// is a case-insensitive allow-list loaded from configuration.
#[derive(Clone)]
pub struct AuthPolicy {
    allow: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl AuthPolicy {
    /// Creates a policy from an arbitrary predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            allow: Arc::new(predicate),
        }
    }

    /// Creates a case-insensitive allow-list policy.
    ///
    /// An empty list denies everyone.
    pub fn allow_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self::new(move |identity| allowed.contains(&identity.to_lowercase()))
    }

    /// Returns true if the identity may read statistics.
    pub fn allows(&self, identity: &str) -> bool {
        (self.allow)(identity)
    }
}

/// Middleware that validates the asserted caller identity against the
/// configured policy.
///
/// - Missing or unreadable identity header: 401 Unauthorized.
/// - Identity not allowed by the policy: 403 Forbidden.
/// - Otherwise the identity is attached to the request as
///   [`CallerIdentity`] and the request proceeds.
pub async fn require_authorized_user(
    State(state): State<AppState>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = request
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let identity = match identity {
        Some(identity) if !identity.is_empty() => identity,
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                format!("Missing {} header", IDENTITY_HEADER),
            )
                .into_response();
        }
    };

    if !state.auth_policy.allows(&identity) {
        return (
            StatusCode::FORBIDDEN,
            format!("User {} is not authorized to read statistics", identity),
        )
            .into_response();
    }

    request.extensions_mut().insert(CallerIdentity(identity));
    next.run(request).await
}
