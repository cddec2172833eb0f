use crate::domain::{LowBallOffer, SurgeOutcome, SurgeStateTag};
use crate::engine::{SurgeSimulation, SurgeState};
use serde::Serialize;

/// Render-ready snapshot of the surge overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeView {
    pub state: SurgeStateTag,
    pub countdown: Option<u32>,
    pub countdown_display: Option<String>,
    pub rejected_count: Option<u32>,
    pub deciding_count: Option<u32>,
    pub holding_count: Option<u32>,
    pub holding_capacity: u32,
    pub holding_progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<LowBallOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SurgeOutcome>,
}

impl SurgeView {
    pub fn of(sim: &SurgeSimulation) -> Self {
        let round = sim.round();
        let (offer, outcome) = match sim.state() {
            SurgeState::Idle => (None, None),
            SurgeState::Detected(_) | SurgeState::Holding(_) => (Some(sim.offer().clone()), None),
            SurgeState::Victory(_) => (None, Some(sim.outcome().clone())),
        };

        Self {
            state: sim.tag(),
            countdown: sim.countdown(),
            countdown_display: sim.countdown_display(),
            rejected_count: round.map(|r| r.rejected_count),
            deciding_count: round.map(|r| r.deciding_count),
            holding_count: round.map(|r| r.holding_count),
            holding_capacity: sim.params().holding_capacity,
            holding_progress: sim.holding_progress(),
            offer,
            outcome,
        }
    }
}
