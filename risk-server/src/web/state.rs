//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RouteConfig;
use crate::scorer::RiskScorer;
use crate::topology::{StationTopology, TransferTable};

/// Shared application state.
///
/// Everything here is read-only after start-up, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Station network
    pub topology: Arc<StationTopology>,

    /// Interchanges between lines
    pub transfers: Arc<TransferTable>,

    /// Delay risk model
    pub scorer: Arc<dyn RiskScorer>,

    /// Route scoring constants
    pub config: Arc<RouteConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        topology: StationTopology,
        transfers: TransferTable,
        scorer: impl RiskScorer + 'static,
        config: RouteConfig,
    ) -> Self {
        Self {
            topology: Arc::new(topology),
            transfers: Arc::new(transfers),
            scorer: Arc::new(scorer),
            config: Arc::new(config),
        }
    }
}
