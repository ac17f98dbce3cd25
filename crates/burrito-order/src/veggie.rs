//! Veggie burritos
//!
//! [`VeggieBurritoBuilder`] is a [`CustomBurritoBuilder`] seeded with the
//! [`VEGGIE`] preset plus one remover per default ingredient. Generic
//! operations stay available and overwrite defaults like any other entry.

use crate::builder::{BurritoBuilder, OrderDraft};
use crate::custom::CustomBurritoBuilder;
use crate::order::{ObservableBurrito, Recipe};
use crate::preset::{Preset, VEGGIE};
use burrito_menu::{Protein, Topping};
use serde::Serialize;

/// A burrito started from the veggie preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VeggieBurrito {
    recipe: Recipe,
}

impl ObservableBurrito for VeggieBurrito {
    #[inline]
    fn recipe(&self) -> &Recipe {
        &self.recipe
    }
}

/// Builder for [`VeggieBurrito`]
#[derive(Debug, Clone)]
pub struct VeggieBurritoBuilder {
    inner: CustomBurritoBuilder,
}

impl VeggieBurritoBuilder {
    /// Create a builder holding the veggie defaults and no size
    #[must_use]
    pub fn new() -> Self {
        let mut inner = CustomBurritoBuilder::new();
        VEGGIE.seed(&mut inner);
        Self { inner }
    }

    /// The preset this builder starts from
    #[inline]
    #[must_use]
    pub fn preset() -> &'static Preset {
        &VEGGIE
    }

    /// Remove the black beans
    pub fn no_black_beans(&mut self) -> &mut Self {
        self.remove_protein(Protein::BlackBeans)
    }

    /// Remove the medium salsa
    pub fn no_medium_salsa(&mut self) -> &mut Self {
        self.remove_topping(Topping::MediumSalsa)
    }

    /// Remove the cheese
    pub fn no_cheese(&mut self) -> &mut Self {
        self.remove_topping(Topping::Cheese)
    }

    /// Remove the lettuce
    pub fn no_lettuce(&mut self) -> &mut Self {
        self.remove_topping(Topping::Lettuce)
    }

    /// Remove the guacamole
    pub fn no_guacamole(&mut self) -> &mut Self {
        self.remove_topping(Topping::Guacamole)
    }
}

impl Default for VeggieBurritoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BurritoBuilder for VeggieBurritoBuilder {
    type Output = VeggieBurrito;

    const VARIANT: &'static str = "veggie";

    #[inline]
    fn draft(&self) -> &OrderDraft {
        self.inner.draft()
    }

    #[inline]
    fn draft_mut(&mut self) -> &mut OrderDraft {
        self.inner.draft_mut()
    }

    #[inline]
    fn assemble(recipe: Recipe) -> VeggieBurrito {
        VeggieBurrito { recipe }
    }
}
