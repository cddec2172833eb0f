//! Surge simulation state machine.
//!
//! ```text
//!            start_simulation            hold_the_line
//!   Idle ───────────────────► Detected ───────────────► Holding ──┐ tick
//!    ▲                          │                         │  ▲    │
//!    │  accept_anyway/dismiss   │                         │  └────┘
//!    ├──────────────────────────┘          give_up        │
//!    ├────────────────────────────────────────────────────┤
//!    │                                                    │ tick reaches 0
//!    │            accept_order                            ▼
//!    └───────────────────────────────────────────────── Victory ◄─┐
//!                                                          │      │ share_victory
//!                                                          └──────┘
//! ```
//!
//! `reset()` forces `Idle` from anywhere. Every other trigger fired from a
//! state that does not accept it fails with [`SurgeError::InvalidTransition`].
//!
//! The machine performs no I/O and owns no timer; the host calls [`SurgeSimulation::tick`]
//! once per elapsed second while `Holding`.

use crate::chance::ChanceSource;
use crate::domain::{
    format_countdown, LowBallOffer, ShareReceipt, SurgeAction, SurgeOutcome, SurgeParams,
    SurgeRound, SurgeStateTag,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurgeError {
    #[error("invalid transition: {action} is not allowed while {from}")]
    InvalidTransition {
        action: SurgeAction,
        from: SurgeStateTag,
    },
    #[error("invalid surge parameters: {0}")]
    InvalidParams(String),
}

/// Current state, with the round counters carried only by non-idle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurgeState {
    Idle,
    Detected(SurgeRound),
    Holding(SurgeRound),
    Victory(SurgeRound),
}

impl SurgeState {
    pub fn tag(&self) -> SurgeStateTag {
        match self {
            SurgeState::Idle => SurgeStateTag::Idle,
            SurgeState::Detected(_) => SurgeStateTag::Detected,
            SurgeState::Holding(_) => SurgeStateTag::Holding,
            SurgeState::Victory(_) => SurgeStateTag::Victory,
        }
    }

    pub fn round(&self) -> Option<&SurgeRound> {
        match self {
            SurgeState::Idle => None,
            SurgeState::Detected(round)
            | SurgeState::Holding(round)
            | SurgeState::Victory(round) => Some(round),
        }
    }
}

/// Result of a processed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still holding; more ticks expected.
    Continue,
    /// This tick brought the countdown to zero. No further ticks are accepted.
    Victory,
}

#[derive(Debug)]
pub struct SurgeSimulation {
    state: SurgeState,
    params: SurgeParams,
    offer: LowBallOffer,
    outcome: SurgeOutcome,
    chance: Box<dyn ChanceSource>,
}

impl SurgeSimulation {
    /// New simulation in `Idle` with the default seed values.
    pub fn new(chance: Box<dyn ChanceSource>) -> Self {
        Self {
            state: SurgeState::Idle,
            params: SurgeParams::default(),
            offer: LowBallOffer::demo(),
            outcome: SurgeOutcome::demo(),
            chance,
        }
    }

    /// New simulation with custom parameters.
    ///
    /// # Errors
    /// Returns `InvalidParams` if the countdown is zero, the capacity is zero,
    /// the initial holding count exceeds capacity, or the probability is
    /// outside `[0, 1]`.
    pub fn with_params(
        params: SurgeParams,
        chance: Box<dyn ChanceSource>,
    ) -> Result<Self, SurgeError> {
        validate_params(&params)?;
        Ok(Self {
            params,
            ..Self::new(chance)
        })
    }

    pub fn state(&self) -> &SurgeState {
        &self.state
    }

    pub fn tag(&self) -> SurgeStateTag {
        self.state.tag()
    }

    pub fn params(&self) -> &SurgeParams {
        &self.params
    }

    pub fn offer(&self) -> &LowBallOffer {
        &self.offer
    }

    pub fn outcome(&self) -> &SurgeOutcome {
        &self.outcome
    }

    pub fn round(&self) -> Option<&SurgeRound> {
        self.state.round()
    }

    pub fn countdown(&self) -> Option<u32> {
        self.round().map(|r| r.countdown)
    }

    pub fn countdown_display(&self) -> Option<String> {
        self.countdown().map(format_countdown)
    }

    /// Holding count over capacity, clamped to `[0, 1]`.
    pub fn holding_progress(&self) -> Option<f64> {
        let capacity = self.params.holding_capacity;
        self.round().map(|r| {
            if capacity == 0 {
                return 0.0;
            }
            (r.holding_count as f64 / capacity as f64).clamp(0.0, 1.0)
        })
    }

    /// Flag a low-ball order. Valid only from `Idle`.
    pub fn start_simulation(&mut self) -> Result<(), SurgeError> {
        self.require(SurgeAction::StartSimulation, SurgeStateTag::Idle)?;
        let round = self.params.initial_round();
        self.state = SurgeState::Detected(round);
        tracing::info!(
            countdown = round.countdown,
            rejected = round.rejected_count,
            deciding = round.deciding_count,
            holding = round.holding_count,
            "Low-ball order detected"
        );
        Ok(())
    }

    /// Commit to rejecting the order. Valid only from `Detected`.
    pub fn hold_the_line(&mut self) -> Result<(), SurgeError> {
        match self.state {
            SurgeState::Detected(round) => {
                self.state = SurgeState::Holding(round);
                tracing::info!(countdown = round.countdown, "Holding the line");
                Ok(())
            }
            _ => Err(self.invalid(SurgeAction::HoldTheLine)),
        }
    }

    /// Take the low-ball order. Valid only from `Detected`.
    pub fn accept_anyway(&mut self) -> Result<(), SurgeError> {
        self.require(SurgeAction::AcceptAnyway, SurgeStateTag::Detected)?;
        self.to_idle(SurgeAction::AcceptAnyway);
        Ok(())
    }

    /// Close the overlay without deciding. Valid only from `Detected`.
    pub fn dismiss(&mut self) -> Result<(), SurgeError> {
        self.require(SurgeAction::Dismiss, SurgeStateTag::Detected)?;
        self.to_idle(SurgeAction::Dismiss);
        Ok(())
    }

    /// Abandon the hold. Valid only from `Holding`.
    pub fn give_up(&mut self) -> Result<(), SurgeError> {
        self.require(SurgeAction::GiveUp, SurgeStateTag::Holding)?;
        self.to_idle(SurgeAction::GiveUp);
        Ok(())
    }

    /// Take the surged order. Valid only from `Victory`.
    pub fn accept_order(&mut self) -> Result<(), SurgeError> {
        self.require(SurgeAction::AcceptOrder, SurgeStateTag::Victory)?;
        self.to_idle(SurgeAction::AcceptOrder);
        Ok(())
    }

    /// Share the result. Valid only from `Victory`; the state is unchanged.
    pub fn share_victory(&self) -> Result<ShareReceipt, SurgeError> {
        self.require(SurgeAction::ShareVictory, SurgeStateTag::Victory)?;
        tracing::info!(extra = %self.outcome.extra_earned, "Victory shared");
        Ok(ShareReceipt {
            message: "Victory shared to WhatsApp".to_string(),
        })
    }

    /// Force `Idle` from any state, discarding the round.
    pub fn reset(&mut self) {
        if self.state != SurgeState::Idle {
            tracing::info!(from = %self.tag(), "Surge simulation reset");
        }
        self.state = SurgeState::Idle;
    }

    /// Advance one elapsed second. Valid only from `Holding`.
    ///
    /// Decrements the countdown, then rolls once for a new holder. The tick
    /// that brings the countdown to zero moves to `Victory`.
    pub fn tick(&mut self) -> Result<TickOutcome, SurgeError> {
        let SurgeState::Holding(mut round) = self.state else {
            return Err(self.invalid(SurgeAction::Tick));
        };

        round.countdown = round.countdown.saturating_sub(1);
        if self.chance.roll(self.params.hold_probability) {
            round.holding_count = round
                .holding_count
                .saturating_add(1)
                .min(self.params.holding_capacity);
        }

        tracing::debug!(
            countdown = round.countdown,
            holding = round.holding_count,
            "Surge tick"
        );

        if round.countdown == 0 {
            self.state = SurgeState::Victory(round);
            tracing::info!(holding = round.holding_count, "Surge victory");
            Ok(TickOutcome::Victory)
        } else {
            self.state = SurgeState::Holding(round);
            Ok(TickOutcome::Continue)
        }
    }

    fn require(&self, action: SurgeAction, required: SurgeStateTag) -> Result<(), SurgeError> {
        if self.tag() == required {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: SurgeAction) -> SurgeError {
        let from = self.tag();
        tracing::warn!(%action, %from, "Rejected surge transition");
        SurgeError::InvalidTransition { action, from }
    }

    fn to_idle(&mut self, action: SurgeAction) {
        tracing::info!(%action, from = %self.tag(), "Surge simulation back to idle");
        self.state = SurgeState::Idle;
    }
}

fn validate_params(params: &SurgeParams) -> Result<(), SurgeError> {
    if params.initial_countdown == 0 {
        return Err(SurgeError::InvalidParams(
            "initial countdown must be at least 1 second".to_string(),
        ));
    }
    if params.holding_capacity == 0 {
        return Err(SurgeError::InvalidParams(
            "holding capacity must be positive".to_string(),
        ));
    }
    if params.initial_holding > params.holding_capacity {
        return Err(SurgeError::InvalidParams(format!(
            "initial holding {} exceeds capacity {}",
            params.initial_holding, params.holding_capacity
        )));
    }
    if !(0.0..=1.0).contains(&params.hold_probability) {
        return Err(SurgeError::InvalidParams(format!(
            "hold probability {} is outside [0, 1]",
            params.hold_probability
        )));
    }
    Ok(())
}
