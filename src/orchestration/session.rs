//! One screen's surge session: the simulation plus the timer that drives it.
//!
//! The per-second timer lives exactly as long as the `Holding` state. Every
//! transition out of `Holding` cancels it under the same lock that changes
//! the state, and each timer task carries the epoch it was started for, so a
//! tick that was already in flight finds a newer epoch and does nothing.

use crate::chance::SeededChance;
use crate::clock::{IntervalTickSource, TickSource, Ticker};
use crate::config::Config;
use crate::domain::{ShareReceipt, SurgeParams, SurgeStateTag};
use crate::engine::{SurgeError, SurgeSimulation, TickOutcome};
use crate::orchestration::view::SurgeView;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SurgeSession {
    shared: Arc<Shared>,
    ticks: Arc<dyn TickSource>,
}

struct Shared {
    inner: Mutex<Inner>,
    views: watch::Sender<SurgeView>,
}

struct Inner {
    sim: SurgeSimulation,
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) -> SurgeView {
        let view = SurgeView::of(&inner.sim);
        self.views.send_replace(view.clone());
        view
    }
}

impl Inner {
    fn cancel_timer(&mut self) {
        self.epoch += 1;
        if let Some(handle) = self.timer.take() {
            handle.abort();
            tracing::debug!(epoch = self.epoch, "Surge timer cancelled");
        }
    }
}

impl SurgeSession {
    pub fn new(sim: SurgeSimulation, ticks: Arc<dyn TickSource>) -> Self {
        let (views, _) = watch::channel(SurgeView::of(&sim));
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    sim,
                    epoch: 0,
                    timer: None,
                }),
                views,
            }),
            ticks,
        }
    }

    /// Session wired to wall-clock ticks and a `StdRng` chance source.
    pub fn from_config(config: &Config) -> Result<Self, SurgeError> {
        let params = SurgeParams::default().with_hold_probability(config.surge_hold_probability);
        let chance = SeededChance::from_optional_seed(config.surge_seed);
        let sim = SurgeSimulation::with_params(params, Box::new(chance))?;
        Ok(Self::new(
            sim,
            Arc::new(IntervalTickSource::new(config.surge_tick)),
        ))
    }

    pub fn view(&self) -> SurgeView {
        SurgeView::of(&self.shared.lock().sim)
    }

    /// Receive a fresh view after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SurgeView> {
        self.shared.views.subscribe()
    }

    pub fn is_timer_running(&self) -> bool {
        self.shared
            .lock()
            .timer
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn start_simulation(&self) -> Result<SurgeView, SurgeError> {
        self.apply(SurgeSimulation::start_simulation)
    }

    /// Enter `Holding` and start the countdown timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn hold_the_line(&self) -> Result<SurgeView, SurgeError> {
        let mut inner = self.shared.lock();
        inner.sim.hold_the_line()?;

        inner.cancel_timer();
        let epoch = inner.epoch;
        let ticker = self.ticks.ticker();
        inner.timer = Some(tokio::spawn(run_timer(
            Arc::clone(&self.shared),
            ticker,
            epoch,
        )));
        tracing::debug!(epoch, "Surge timer started");

        Ok(self.shared.publish(&inner))
    }

    pub fn accept_anyway(&self) -> Result<SurgeView, SurgeError> {
        self.apply(SurgeSimulation::accept_anyway)
    }

    pub fn dismiss(&self) -> Result<SurgeView, SurgeError> {
        self.apply(SurgeSimulation::dismiss)
    }

    pub fn give_up(&self) -> Result<SurgeView, SurgeError> {
        self.apply(SurgeSimulation::give_up)
    }

    pub fn accept_order(&self) -> Result<SurgeView, SurgeError> {
        self.apply(SurgeSimulation::accept_order)
    }

    pub fn share_victory(&self) -> Result<ShareReceipt, SurgeError> {
        self.shared.lock().sim.share_victory()
    }

    /// Navigate away: back to `Idle` from anywhere, timer stopped.
    pub fn leave(&self) -> SurgeView {
        let mut inner = self.shared.lock();
        inner.sim.reset();
        inner.cancel_timer();
        self.shared.publish(&inner)
    }

    fn apply<F>(&self, transition: F) -> Result<SurgeView, SurgeError>
    where
        F: FnOnce(&mut SurgeSimulation) -> Result<(), SurgeError>,
    {
        let mut inner = self.shared.lock();
        transition(&mut inner.sim)?;
        if inner.sim.tag() != SurgeStateTag::Holding {
            inner.cancel_timer();
        }
        Ok(self.shared.publish(&inner))
    }
}

impl Drop for SurgeSession {
    fn drop(&mut self) {
        self.shared.lock().cancel_timer();
    }
}

impl std::fmt::Debug for SurgeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurgeSession")
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

async fn run_timer(shared: Arc<Shared>, mut ticker: Box<dyn Ticker>, epoch: u64) {
    loop {
        ticker.tick().await;

        let mut inner = shared.lock();
        if inner.epoch != epoch {
            tracing::debug!(epoch, current = inner.epoch, "Stale surge tick ignored");
            return;
        }

        match inner.sim.tick() {
            Ok(TickOutcome::Continue) => {
                shared.publish(&inner);
            }
            Ok(TickOutcome::Victory) => {
                inner.timer = None;
                shared.publish(&inner);
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Surge timer stopped");
                inner.timer = None;
                return;
            }
        }
    }
}
