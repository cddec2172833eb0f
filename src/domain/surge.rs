//! Surge simulation data: state tags, round counters, parameters and the
//! fixed low-ball offer shown on the overlay.

use crate::domain::Rupees;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally visible tag of the simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurgeStateTag {
    /// No active low-ball event.
    Idle,
    /// Low-ball order flagged; countdown shown frozen.
    Detected,
    /// Worker is rejecting; countdown running.
    Holding,
    /// Countdown reached zero; outcome displayed.
    Victory,
}

impl fmt::Display for SurgeStateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurgeStateTag::Idle => write!(f, "idle"),
            SurgeStateTag::Detected => write!(f, "detected"),
            SurgeStateTag::Holding => write!(f, "holding"),
            SurgeStateTag::Victory => write!(f, "victory"),
        }
    }
}

/// Triggers accepted by the simulation, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurgeAction {
    StartSimulation,
    HoldTheLine,
    AcceptAnyway,
    Dismiss,
    Tick,
    GiveUp,
    AcceptOrder,
    ShareVictory,
}

impl fmt::Display for SurgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurgeAction::StartSimulation => "start_simulation",
            SurgeAction::HoldTheLine => "hold_the_line",
            SurgeAction::AcceptAnyway => "accept_anyway",
            SurgeAction::Dismiss => "dismiss",
            SurgeAction::Tick => "tick",
            SurgeAction::GiveUp => "give_up",
            SurgeAction::AcceptOrder => "accept_order",
            SurgeAction::ShareVictory => "share_victory",
        };
        write!(f, "{}", name)
    }
}

/// Counters for one low-ball event, from detection until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeRound {
    /// Seconds left on the hold countdown.
    pub countdown: u32,
    /// Snapshot taken at detection; never updated afterwards.
    pub rejected_count: u32,
    /// Snapshot taken at detection; never updated afterwards.
    pub deciding_count: u32,
    /// Grows while holding, bounded by the params' capacity.
    pub holding_count: u32,
}

/// Seed values and tuning for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurgeParams {
    pub initial_countdown: u32,
    pub initial_rejected: u32,
    pub initial_deciding: u32,
    pub initial_holding: u32,
    pub holding_capacity: u32,
    /// Chance per tick that one more worker joins the hold.
    pub hold_probability: f64,
}

impl SurgeParams {
    pub fn with_hold_probability(mut self, probability: f64) -> Self {
        self.hold_probability = probability;
        self
    }

    /// First round counters after a low-ball order is flagged.
    pub fn initial_round(&self) -> SurgeRound {
        SurgeRound {
            countdown: self.initial_countdown,
            rejected_count: self.initial_rejected,
            deciding_count: self.initial_deciding,
            holding_count: self.initial_holding,
        }
    }
}

impl Default for SurgeParams {
    fn default() -> Self {
        Self {
            initial_countdown: 163,
            initial_rejected: 127,
            initial_deciding: 23,
            initial_holding: 147,
            holding_capacity: 150,
            hold_probability: 0.3,
        }
    }
}

/// The flagged order as shown while the event is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowBallOffer {
    pub offer: Rupees,
    pub distance_km: u32,
    pub hourly_equivalent: Rupees,
    pub estimated_low: Rupees,
    pub estimated_high: Rupees,
}

impl LowBallOffer {
    pub fn demo() -> Self {
        Self {
            offer: Rupees::new(20),
            distance_km: 4,
            hourly_equivalent: Rupees::new(5),
            estimated_low: Rupees::new(55),
            estimated_high: Rupees::new(65),
        }
    }
}

/// What the collective hold achieved, shown in `Victory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeOutcome {
    pub surge_activated: bool,
    pub new_price: Rupees,
    pub distance_km: u32,
    pub extra_earned: Rupees,
}

impl SurgeOutcome {
    pub fn against(offer: &LowBallOffer, new_price: Rupees) -> Self {
        Self {
            surge_activated: true,
            new_price,
            distance_km: offer.distance_km,
            extra_earned: new_price - offer.offer,
        }
    }

    pub fn demo() -> Self {
        Self::against(&LowBallOffer::demo(), Rupees::new(62))
    }
}

/// Returned by `share_victory`; the host forwards it to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareReceipt {
    pub message: String,
}
