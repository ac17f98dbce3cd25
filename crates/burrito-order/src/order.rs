//! Finalized orders
//!
//! A [`Recipe`] is the immutable snapshot a builder hands over on `build`.
//! Concrete burrito types wrap one and expose it through
//! [`ObservableBurrito`], which also carries the pricing rule:
//!
//! ```text
//! cost = base(size) + Σ unit(topping) × mult(portion) + Σ unit(protein) × mult(portion)
//! ```

use crate::selection::SelectionSet;
use burrito_menu::{Ingredient, PortionSize, PricingCatalog, Protein, Size, StandardMenu, Topping};
use serde::{Deserialize, Serialize};

/// Immutable size and selections of a finished burrito
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    size: Size,
    toppings: SelectionSet<Topping>,
    proteins: SelectionSet<Protein>,
}

impl Recipe {
    pub(crate) fn new(
        size: Size,
        toppings: SelectionSet<Topping>,
        proteins: SelectionSet<Protein>,
    ) -> Self {
        Self {
            size,
            toppings,
            proteins,
        }
    }

    /// Burrito size
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Selected toppings
    #[inline]
    #[must_use]
    pub fn toppings(&self) -> &SelectionSet<Topping> {
        &self.toppings
    }

    /// Selected proteins
    #[inline]
    #[must_use]
    pub fn proteins(&self) -> &SelectionSet<Protein> {
        &self.proteins
    }

    /// Total price against `catalog`
    #[must_use]
    pub fn cost_with<C: PricingCatalog + ?Sized>(&self, catalog: &C) -> f64 {
        catalog.base_price(self.size) + self.toppings.subtotal(catalog) + self.proteins.subtotal(catalog)
    }
}

/// Ingredient families a [`Recipe`] can be queried by
pub trait Selectable: Ingredient {
    /// The recipe's selection for this family
    fn selection(recipe: &Recipe) -> &SelectionSet<Self>;
}

impl Selectable for Topping {
    #[inline]
    fn selection(recipe: &Recipe) -> &SelectionSet<Self> {
        recipe.toppings()
    }
}

impl Selectable for Protein {
    #[inline]
    fn selection(recipe: &Recipe) -> &SelectionSet<Self> {
        recipe.proteins()
    }
}

/// Read access to a finalized burrito
///
/// There are no mutators; a burrito can be shared freely once built.
pub trait ObservableBurrito: std::fmt::Debug + Send + Sync {
    /// The snapshot this burrito was built from
    fn recipe(&self) -> &Recipe;

    /// Burrito size
    fn size(&self) -> Size {
        self.recipe().size()
    }

    /// Portion of `topping`, or `None` if it was not selected
    fn topping(&self, topping: Topping) -> Option<PortionSize> {
        self.recipe().toppings().get(topping)
    }

    /// Portion of `protein`, or `None` if it was not selected
    fn protein(&self, protein: Protein) -> Option<PortionSize> {
        self.recipe().proteins().get(protein)
    }

    /// Portion of any ingredient, or `None` if it was not selected
    fn portion_of<I: Selectable>(&self, ingredient: I) -> Option<PortionSize>
    where
        Self: Sized,
    {
        I::selection(self.recipe()).get(ingredient)
    }

    /// Total price on the standard menu
    fn cost(&self) -> f64 {
        self.recipe().cost_with(&StandardMenu)
    }

    /// Total price against a configured catalog
    fn cost_with<C: PricingCatalog + ?Sized>(&self, catalog: &C) -> f64
    where
        Self: Sized,
    {
        self.recipe().cost_with(catalog)
    }
}
