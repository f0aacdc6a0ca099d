//! Discovery of the newest published draw.
//!
//! The draw service only answers point lookups, so the newest draw is found by
//! estimating a starting number from the calendar and probing around it.

use serde::Deserialize;

use super::{DrawNumber, DrawRecordSource};
use crate::domain::logging::{LogComponent, TimeProvider, get_logger};

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Draw 1: 2002-12-07T00:00:00Z
pub const DEFAULT_EPOCH_MS: u64 = 12_028 * MS_PER_DAY;
pub const DEFAULT_PERIOD_MS: u64 = 7 * MS_PER_DAY;
pub const DEFAULT_FORWARD_BUDGET: u32 = 50;
pub const DEFAULT_BACKWARD_BUDGET: u32 = 10;
pub const DEFAULT_FALLBACK_DRAW: u32 = 1190;

/// Calendar that maps wall-clock time to the expected draw number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawSchedule {
    pub epoch_ms: u64,
    pub period_ms: u64,
}

impl Default for DrawSchedule {
    fn default() -> Self {
        Self { epoch_ms: DEFAULT_EPOCH_MS, period_ms: DEFAULT_PERIOD_MS }
    }
}

impl DrawSchedule {
    /// Draw expected to be the newest at `now_ms`. Never below draw 1.
    pub fn estimate(&self, now_ms: u64) -> DrawNumber {
        let elapsed = now_ms.saturating_sub(self.epoch_ms);
        let periods = elapsed / self.period_ms.max(1);
        let estimate = u32::try_from(periods + 1).unwrap_or(u32::MAX);
        DrawNumber::new(estimate).unwrap_or(DrawNumber::FIRST)
    }
}

/// Probe limits and the answer used when probing is inconclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorSettings {
    pub schedule: DrawSchedule,
    pub forward_budget: u32,
    pub backward_budget: u32,
    pub fallback_draw: u32,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            schedule: DrawSchedule::default(),
            forward_budget: DEFAULT_FORWARD_BUDGET,
            backward_budget: DEFAULT_BACKWARD_BUDGET,
            fallback_draw: DEFAULT_FALLBACK_DRAW,
        }
    }
}

impl LocatorSettings {
    pub fn fallback(&self) -> DrawNumber {
        DrawNumber::new(self.fallback_draw).unwrap_or(DrawNumber::FIRST)
    }
}

/// Progress of one `locate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorState {
    pub probe: DrawNumber,
    pub consecutive_failures: u32,
    pub last_present: Option<DrawNumber>,
    pub resolved: bool,
}

impl LocatorState {
    fn starting_at(probe: DrawNumber) -> Self {
        Self { probe, consecutive_failures: 0, last_present: None, resolved: false }
    }
}

pub struct LatestDrawLocator<S, C> {
    source: S,
    clock: C,
    settings: LocatorSettings,
}

impl<S: DrawRecordSource, C: TimeProvider> LatestDrawLocator<S, C> {
    pub fn new(source: S, clock: C, settings: LocatorSettings) -> Self {
        Self { source, clock, settings }
    }

    /// Newest draw the service can resolve, or the configured fallback.
    pub async fn locate(&self) -> DrawNumber {
        let estimate = self.settings.schedule.estimate(self.clock.current_timestamp());
        get_logger().info(
            LogComponent::Domain("DrawLocator"),
            &format!("🔎 Estimated latest draw: {}", estimate),
        );

        let mut state = LocatorState::starting_at(estimate);
        self.search_forward(&mut state).await;
        if !state.resolved {
            self.confirm_backward(&mut state).await;
        }

        match (state.resolved, state.last_present) {
            (true, Some(latest)) => {
                get_logger().info(
                    LogComponent::Domain("DrawLocator"),
                    &format!("✅ Latest draw resolved: {}", latest),
                );
                latest
            }
            _ => {
                let fallback = self.settings.fallback();
                get_logger().warn(
                    LogComponent::Domain("DrawLocator"),
                    &format!("⚠️ Draw search inconclusive, using fallback {}", fallback),
                );
                fallback
            }
        }
    }

    /// Walk up from the estimate until the first missing draw.
    async fn search_forward(&self, state: &mut LocatorState) {
        for _ in 0..self.settings.forward_budget {
            if self.source.fetch_draw(state.probe).await.is_none() {
                // Anything seen before the gap is the newest draw.
                state.resolved = state.last_present.is_some();
                return;
            }
            state.last_present = Some(state.probe);
            state.probe = state.probe.successor();
        }

        if let Some(latest) = state.last_present {
            get_logger().warn(
                LogComponent::Domain("DrawLocator"),
                &format!(
                    "⚠️ Forward budget of {} probes exhausted, keeping {}",
                    self.settings.forward_budget, latest
                ),
            );
            state.resolved = true;
        }
    }

    /// Walk down from the first missing draw until one resolves.
    async fn confirm_backward(&self, state: &mut LocatorState) {
        while state.consecutive_failures < self.settings.backward_budget {
            let Some(previous) = state.probe.predecessor() else {
                return;
            };
            state.probe = previous;

            if self.source.fetch_draw(previous).await.is_some() {
                state.last_present = Some(previous);
                state.resolved = true;
                return;
            }
            state.consecutive_failures += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_counts_whole_periods_from_epoch() {
        let schedule = DrawSchedule::default();
        assert_eq!(schedule.estimate(DEFAULT_EPOCH_MS).value(), 1);
        assert_eq!(schedule.estimate(DEFAULT_EPOCH_MS + DEFAULT_PERIOD_MS - 1).value(), 1);
        assert_eq!(schedule.estimate(DEFAULT_EPOCH_MS + 3 * DEFAULT_PERIOD_MS).value(), 4);
    }

    #[test]
    fn estimate_before_epoch_is_first_draw() {
        assert_eq!(DrawSchedule::default().estimate(0), DrawNumber::FIRST);
    }

    #[test]
    fn default_epoch_is_first_draw_date() {
        // 2002-12-07T00:00:00Z
        assert_eq!(DEFAULT_EPOCH_MS, 1_039_219_200_000);
    }
}
