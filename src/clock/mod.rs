//! Tick sources driving the surge countdown.
//!
//! A [`TickSource`] hands out a fresh [`Ticker`] each time a hold starts, so
//! a ticker left over from an earlier run can never feed the next one.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

pub mod manual;

pub use manual::ManualTickSource;

/// Stream of elapsed-period notifications.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next period to elapse.
    async fn tick(&mut self);
}

pub trait TickSource: Send + Sync + fmt::Debug {
    /// Start a new ticker whose first tick lands one full period from now.
    fn ticker(&self) -> Box<dyn Ticker>;
}

/// Wall-clock ticks backed by `tokio::time`; follows tokio's paused clock in tests.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTickSource {
    period: Duration,
}

impl IntervalTickSource {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTickSource {
    fn ticker(&self) -> Box<dyn Ticker> {
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        Box::new(IntervalTicker { interval })
    }
}

struct IntervalTicker {
    interval: Interval,
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
