//! Custom burritos
//!
//! The unconstrained variant: starts empty and takes any size, toppings and
//! proteins.

use crate::builder::{BurritoBuilder, OrderDraft};
use crate::order::{ObservableBurrito, Recipe};
use serde::Serialize;

/// A burrito with an arbitrary selection of toppings and proteins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomBurrito {
    recipe: Recipe,
}

impl ObservableBurrito for CustomBurrito {
    #[inline]
    fn recipe(&self) -> &Recipe {
        &self.recipe
    }
}

/// Builder for [`CustomBurrito`]
///
/// Starts with no size and empty selections.
#[derive(Debug, Clone, Default)]
pub struct CustomBurritoBuilder {
    draft: OrderDraft,
}

impl CustomBurritoBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BurritoBuilder for CustomBurritoBuilder {
    type Output = CustomBurrito;

    const VARIANT: &'static str = "custom";

    #[inline]
    fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[inline]
    fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    #[inline]
    fn assemble(recipe: Recipe) -> CustomBurrito {
        CustomBurrito { recipe }
    }
}
