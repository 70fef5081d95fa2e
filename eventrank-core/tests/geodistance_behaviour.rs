//! Behavioural coverage for great-circle distance.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when a step runs out of order"
)]

use std::cell::Cell;

use eventrank_core::{Location, distance};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const LONDON: Location = Location::new(51.5074, -0.1278);
const PARIS: Location = Location::new(48.8566, 2.3522);
const ORIGIN: Location = Location::new(0.0, 0.0);

/// Points and the measured distance shared across steps.
#[derive(Default)]
pub struct DistanceContext {
    from: Cell<Option<Location>>,
    to: Cell<Option<Location>>,
    measured: Cell<Option<f64>>,
}

#[fixture]
/// Build a fresh context for each scenario.
pub fn context() -> DistanceContext {
    DistanceContext::default()
}

#[given("the point London")]
fn from_london(context: &DistanceContext) {
    context.from.set(Some(LONDON));
}

#[given("the point at the origin")]
fn from_origin(context: &DistanceContext) {
    context.from.set(Some(ORIGIN));
}

#[given("the point with a non-finite latitude")]
fn from_invalid(context: &DistanceContext) {
    context.from.set(Some(Location::new(f64::NAN, 0.0)));
}

#[given("the destination London")]
fn to_london(context: &DistanceContext) {
    context.to.set(Some(LONDON));
}

#[given("the destination Paris")]
fn to_paris(context: &DistanceContext) {
    context.to.set(Some(PARIS));
}

#[given("the destination at the origin")]
fn to_origin(context: &DistanceContext) {
    context.to.set(Some(ORIGIN));
}

#[given("the destination on the equator at 90 degrees east")]
fn to_quarter(context: &DistanceContext) {
    context.to.set(Some(Location::new(0.0, 90.0)));
}

#[when("I measure the distance")]
fn measure(context: &DistanceContext) {
    let from = context.from.get().expect("origin point must be set");
    let to = context.to.get().expect("destination must be set");
    context.measured.set(Some(distance(from, to)));
}

#[then("the distance is zero")]
fn distance_is_zero(context: &DistanceContext) {
    let km = context.measured.get().expect("distance should be measured");
    assert!(km.abs() < 1e-9, "expected zero, got {km}");
}

#[then("the distance is between 343 and 344.5 kilometres")]
fn distance_matches_london_paris(context: &DistanceContext) {
    assert_within(context, 343.0, 344.5);
}

#[then("the distance is between 10007 and 10008 kilometres")]
fn distance_matches_quarter(context: &DistanceContext) {
    assert_within(context, 10_007.0, 10_008.0);
}

fn assert_within(context: &DistanceContext, low: f64, high: f64) {
    let km = context.measured.get().expect("distance should be measured");
    assert!((low..=high).contains(&km), "{km} outside {low}..={high}");
}

#[scenario(path = "tests/features/geodistance.feature", index = 0)]
fn self_distance(context: DistanceContext) {
    let _ = context;
}

#[scenario(path = "tests/features/geodistance.feature", index = 1)]
fn london_to_paris(context: DistanceContext) {
    let _ = context;
}

#[scenario(path = "tests/features/geodistance.feature", index = 2)]
fn quarter_of_equator(context: DistanceContext) {
    let _ = context;
}

#[scenario(path = "tests/features/geodistance.feature", index = 3)]
fn invalid_latitude(context: DistanceContext) {
    let _ = context;
}
