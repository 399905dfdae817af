//! Route ranking for optimizer results.

use super::evaluate::ScoredRoute;

/// Rank routes by delay risk, lowest first.
///
/// The sort is stable, so routes with equal risk keep their input order.
pub fn rank_routes(mut routes: Vec<ScoredRoute>) -> Vec<ScoredRoute> {
    routes.sort_by(|a, b| a.total_delay_risk.total_cmp(&b.total_delay_risk));
    routes
}
