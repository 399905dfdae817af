//! Static network topology.
//!
//! The station table (which line each station is on, and where) and the
//! transfer table (which stations connect two lines) are built once at
//! start-up and passed by reference into the planner.

mod stations;
mod transfers;

pub use stations::{StationTopology, StationTopologyBuilder, toronto_topology};
pub use transfers::{TransferTable, TransferTableBuilder, toronto_transfers};
