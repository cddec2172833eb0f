//! Domain types for the Unite screen.
//!
//! This module provides:
//! - Lossless rupee amounts via the `Rupees` wrapper
//! - Surge simulation data: state tags, round counters, parameters, offer and outcome
//! - Campaign and participation records
//! - Countdown formatting helpers

pub mod campaign;
pub mod countdown;
pub mod money;
pub mod surge;

pub use campaign::{
    Campaign, CampaignId, CampaignStatus, Participation, ParticipationStatus, Platform,
};
pub use countdown::{format_countdown, format_remaining};
pub use money::Rupees;
pub use surge::{
    LowBallOffer, ShareReceipt, SurgeAction, SurgeOutcome, SurgeParams, SurgeRound, SurgeStateTag,
};
