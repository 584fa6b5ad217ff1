use dbspace_db::StatsRepository;

use crate::auth::AuthPolicy;

/// Shared application state for all handlers.
///
/// This is wrapped in Arc internally by Axum when using `with_state()`,
/// so all fields must implement Clone.
#[derive(Clone)]
pub struct AppState {
    /// Statistics repository for the per-request database query
    pub stats_repo: StatsRepository,

    /// Predicate deciding which authenticated identities may read stats
    pub auth_policy: AuthPolicy,
}

impl AppState {
    pub fn new(stats_repo: StatsRepository, auth_policy: AuthPolicy) -> Self {
        Self {
            stats_repo,
            auth_policy,
        }
    }
}
