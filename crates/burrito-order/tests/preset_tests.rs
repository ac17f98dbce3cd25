use burrito_menu::{PortionSize, Protein, Size, Topping};
use burrito_order::{BurritoBuilder, ObservableBurrito, VeggieBurritoBuilder, VEGGIE};
use burrito_test_utils::{
    assert_cost_eq, init_tracing, portion, protein, size, topping, FIXTURE_TOLERANCE,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_veggie_burrito_jumbo_size() {
    init_tracing();
    let burrito = VeggieBurritoBuilder::new().size(Size::Jumbo).build().unwrap();
    assert_cost_eq(burrito.cost(), 7.2, FIXTURE_TOLERANCE);
}

#[test]
fn test_veggie_burrito_less_cheese() {
    let burrito = VeggieBurritoBuilder::new()
        .size(Size::Normal)
        .add_topping(Topping::Cheese, PortionSize::Less)
        .build()
        .unwrap();
    assert_cost_eq(burrito.cost(), 6.9, FIXTURE_TOLERANCE);
}

#[test]
fn test_veggie_burrito_builder() {
    let burrito = VeggieBurritoBuilder::new().size(Size::Jumbo).build().unwrap();

    assert_eq!(burrito.protein(Protein::BlackBeans), Some(PortionSize::Normal));
    assert_eq!(burrito.protein(Protein::Chicken), None);
    assert_eq!(burrito.topping(Topping::Cheese), Some(PortionSize::Normal));
    assert_eq!(burrito.topping(Topping::Corn), None);
}

#[test]
fn test_veggie_burrito_normal_no_guac() {
    let burrito = VeggieBurritoBuilder::new()
        .size(Size::Normal)
        .no_guacamole()
        .build()
        .unwrap();

    assert_eq!(burrito.protein(Protein::BlackBeans), Some(PortionSize::Normal));
    assert_eq!(burrito.topping(Topping::Guacamole), None);
    for (topping, portion) in VEGGIE.toppings.iter().copied() {
        if topping != Topping::Guacamole {
            assert_eq!(burrito.topping(topping), Some(portion));
        }
    }
}

#[test]
fn test_every_remover() {
    let burrito = VeggieBurritoBuilder::new()
        .no_black_beans()
        .no_medium_salsa()
        .no_cheese()
        .no_lettuce()
        .no_guacamole()
        .size(Size::Normal)
        .build()
        .unwrap();

    assert!(burrito.recipe().toppings().is_empty());
    assert!(burrito.recipe().proteins().is_empty());
    assert_cost_eq(burrito.cost(), Size::Normal.base_cost(), 1e-9);
}

#[test]
fn test_removed_default_can_be_added_back() {
    let burrito = VeggieBurritoBuilder::new()
        .size(Size::Normal)
        .no_cheese()
        .add_topping(Topping::Cheese, PortionSize::Extra)
        .build()
        .unwrap();
    assert_eq!(burrito.topping(Topping::Cheese), Some(PortionSize::Extra));
}

#[test]
fn test_veggie_without_size() {
    let err = VeggieBurritoBuilder::new().build().unwrap_err();
    assert!(err.is_incomplete());
}

#[test]
fn test_preset_state_snapshot() {
    let mut builder = VeggieBurritoBuilder::new();
    builder.size(Size::Jumbo);
    let before = builder.build().unwrap();

    builder.no_lettuce();
    let after = builder.build().unwrap();

    assert_eq!(before.topping(Topping::Lettuce), Some(PortionSize::Normal));
    assert_eq!(after.topping(Topping::Lettuce), None);
    assert_eq!(VeggieBurritoBuilder::preset().name, "veggie");
}

proptest! {
    #[test]
    fn prop_topping_override_wins(
        kind in proptest::sample::select(VEGGIE.toppings.iter().map(|(t, _)| *t).collect::<Vec<_>>()),
        level in portion(),
        chosen_size in size(),
    ) {
        let burrito = VeggieBurritoBuilder::new()
            .size(chosen_size)
            .add_topping(kind, level)
            .build()
            .unwrap();

        prop_assert_eq!(burrito.topping(kind), Some(level));
        prop_assert_eq!(burrito.recipe().toppings().len(), VEGGIE.toppings.len());
    }

    #[test]
    fn prop_protein_override_wins(kind in protein(), level in portion()) {
        let burrito = VeggieBurritoBuilder::new()
            .size(Size::Normal)
            .add_protein(kind, level)
            .build()
            .unwrap();

        prop_assert_eq!(burrito.protein(kind), Some(level));
        prop_assert!(burrito.protein(Protein::BlackBeans).is_some());
    }

    #[test]
    fn prop_extra_topping_adds_its_price(extra in topping(), level in portion()) {
        let base = VeggieBurritoBuilder::new().size(Size::Normal).build().unwrap();
        let mut builder = VeggieBurritoBuilder::new();
        builder.size(Size::Normal).add_topping(extra, level);
        let burrito = builder.build().unwrap();

        let replaced = base.topping(extra).map_or(0.0, |p| extra.cost() * p.cost_multiplier());
        let expected = base.cost() - replaced + extra.cost() * level.cost_multiplier();
        prop_assert!((burrito.cost() - expected).abs() < 1e-9);
    }
}
