//! Testing utilities for the burrito workspace
//!
//! Shared fixtures, float assertions, proptest strategies and a tracing
//! bootstrap.

#![allow(missing_docs)]

use burrito_menu::{PortionSize, PricingCatalog, Protein, Size, Topping};
use burrito_order::{BurritoBuilder, CustomBurritoBuilder};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Once;

/// Tolerance used by the reference price scenarios
pub const FIXTURE_TOLERANCE: f64 = 0.01;

/// Tolerance for comparing two computations of the same sum
pub const SUM_TOLERANCE: f64 = 1e-9;

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`; safe to call from every test
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[track_caller]
pub fn assert_cost_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "cost {actual} differs from expected {expected} by more than {tolerance}"
    );
}

/// Price computed straight from the catalog, applying selections in order
/// with last-write-wins semantics
pub fn reference_cost<C: PricingCatalog>(
    catalog: &C,
    size: Size,
    toppings: &[(Topping, PortionSize)],
    proteins: &[(Protein, PortionSize)],
) -> f64 {
    let toppings: HashMap<Topping, PortionSize> = toppings.iter().copied().collect();
    let proteins: HashMap<Protein, PortionSize> = proteins.iter().copied().collect();

    let toppings: f64 = toppings
        .into_iter()
        .map(|(t, p)| catalog.topping_price(t) * catalog.multiplier(p))
        .sum();
    let proteins: f64 = proteins
        .into_iter()
        .map(|(t, p)| catalog.protein_price(t) * catalog.multiplier(p))
        .sum();

    catalog.base_price(size) + toppings + proteins
}

/// Builder for the custom reference order: cheese, less medium salsa,
/// extra sour cream and tofu on a normal burrito (5.90 on the standard menu)
pub fn reference_custom_builder() -> CustomBurritoBuilder {
    let mut builder = CustomBurritoBuilder::new();
    builder
        .size(Size::Normal)
        .add_topping(Topping::Cheese, PortionSize::Normal)
        .add_topping(Topping::MediumSalsa, PortionSize::Less)
        .add_topping(Topping::SourCream, PortionSize::Extra)
        .add_protein(Protein::Tofu, PortionSize::Normal);
    builder
}

pub fn size() -> impl Strategy<Value = Size> {
    proptest::sample::select(Size::ALL.to_vec())
}

pub fn portion() -> impl Strategy<Value = PortionSize> {
    proptest::sample::select(PortionSize::ALL.to_vec())
}

pub fn topping() -> impl Strategy<Value = Topping> {
    proptest::sample::select(Topping::ALL.to_vec())
}

pub fn protein() -> impl Strategy<Value = Protein> {
    proptest::sample::select(Protein::ALL.to_vec())
}

/// Topping selections, possibly repeating a topping
pub fn topping_selections() -> impl Strategy<Value = Vec<(Topping, PortionSize)>> {
    proptest::collection::vec((topping(), portion()), 0..12)
}

/// Protein selections, possibly repeating a protein
pub fn protein_selections() -> impl Strategy<Value = Vec<(Protein, PortionSize)>> {
    proptest::collection::vec((protein(), portion()), 0..8)
}
