mod support;

use futures::executor::block_on;
use lotto_helper_wasm::domain::lottery::{
    DEFAULT_FALLBACK_DRAW, LatestDrawLocator, LocatorSettings,
};
use support::{FixedClock, ScriptedDrawSource};

fn locate(source: &ScriptedDrawSource, estimate: u32) -> u32 {
    let clock = FixedClock::estimating(estimate);
    let locator = LatestDrawLocator::new(source, clock, LocatorSettings::default());
    block_on(locator.locate()).value()
}

#[test]
fn estimate_just_past_latest_steps_back_once() {
    let source = ScriptedDrawSource::up_to(100);
    assert_eq!(locate(&source, 101), 100);
    assert_eq!(source.probes(), vec![101, 100]);
}

#[test]
fn estimate_behind_latest_walks_forward() {
    let source = ScriptedDrawSource::up_to(100);
    assert_eq!(locate(&source, 97), 100);
    assert_eq!(source.probes(), vec![97, 98, 99, 100, 101]);
}

#[test]
fn estimate_ahead_of_latest_walks_back_within_budget() {
    let source = ScriptedDrawSource::up_to(100);
    assert_eq!(locate(&source, 105), 100);
    assert_eq!(source.probes(), vec![105, 104, 103, 102, 101, 100]);
}

#[test]
fn every_probe_absent_returns_fallback() {
    let source = ScriptedDrawSource::default();
    assert_eq!(locate(&source, 500), DEFAULT_FALLBACK_DRAW);
    // one forward probe plus the ten-step backward budget
    assert_eq!(source.probes().len(), 11);
}

#[test]
fn latest_too_far_behind_estimate_returns_fallback() {
    let source = ScriptedDrawSource::up_to(100);
    assert_eq!(locate(&source, 120), DEFAULT_FALLBACK_DRAW);
    assert!(!source.probes().contains(&100));
}

#[test]
fn backward_search_stops_at_first_draw() {
    let source = ScriptedDrawSource::default();
    assert_eq!(locate(&source, 3), DEFAULT_FALLBACK_DRAW);
    assert_eq!(source.probes(), vec![3, 2, 1]);
}

#[test]
fn exhausted_forward_budget_keeps_last_present_draw() {
    let source = ScriptedDrawSource::up_to(1000);
    let settings = LocatorSettings { forward_budget: 5, ..LocatorSettings::default() };
    let locator = LatestDrawLocator::new(&source, FixedClock::estimating(10), settings);
    assert_eq!(block_on(locator.locate()).value(), 14);
    assert_eq!(source.probes(), vec![10, 11, 12, 13, 14]);
}

#[test]
fn gap_below_estimate_is_bridged_backward() {
    // 101 missing, 100 missing, 99 published
    let source = ScriptedDrawSource::with_draws((1..=99).chain([103]));
    assert_eq!(locate(&source, 101), 99);
    assert_eq!(source.probes(), vec![101, 100, 99]);
}
