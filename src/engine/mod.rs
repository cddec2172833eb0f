//! Pure state engines for the Unite screen: the surge simulation and the campaign board.

pub mod campaigns;
pub mod surge;

pub use campaigns::{CampaignBoard, CampaignError};
pub use surge::{SurgeError, SurgeSimulation, SurgeState, TickOutcome};
