pub mod api;
pub mod chance;
pub mod clock;
pub mod config;
pub mod demo;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use chance::{ChanceSource, ScriptedChance, SeededChance};
pub use clock::{IntervalTickSource, ManualTickSource, TickSource, Ticker};
pub use config::Config;
pub use domain::{
    format_countdown, Campaign, CampaignId, Rupees, SurgeAction, SurgeParams, SurgeRound,
    SurgeStateTag,
};
pub use engine::{CampaignBoard, CampaignError, SurgeError, SurgeSimulation, SurgeState, TickOutcome};
pub use error::AppError;
pub use orchestration::{SurgeSession, SurgeView};
