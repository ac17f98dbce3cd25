//! Pricing catalog
//!
//! [`PricingCatalog`] is the read-only lookup every order is priced against.
//! [`Ingredient`] lets generic code ask a catalog for the unit price of either
//! ingredient family without knowing which one it holds.

use crate::item::{PortionSize, Protein, Size, Topping};

/// Sealed trait to keep the ingredient families closed
mod private {
    pub trait Sealed {}
}

/// Price lookups for sizes, ingredients and portion multipliers
///
/// # Contract
/// - Every method is pure and total over its enumeration
/// - Returned values are finite and non-negative
pub trait PricingCatalog {
    /// Base price of a burrito of the given size
    fn base_price(&self, size: Size) -> f64;

    /// Unit price of a topping at normal portion
    fn topping_price(&self, topping: Topping) -> f64;

    /// Unit price of a protein at normal portion
    fn protein_price(&self, protein: Protein) -> f64;

    /// Cost multiplier for a portion level
    fn multiplier(&self, portion: PortionSize) -> f64;
}

impl<C: PricingCatalog + ?Sized> PricingCatalog for &C {
    fn base_price(&self, size: Size) -> f64 {
        (**self).base_price(size)
    }

    fn topping_price(&self, topping: Topping) -> f64 {
        (**self).topping_price(topping)
    }

    fn protein_price(&self, protein: Protein) -> f64 {
        (**self).protein_price(protein)
    }

    fn multiplier(&self, portion: PortionSize) -> f64 {
        (**self).multiplier(portion)
    }
}

/// An ingredient family that can be selected at a portion level
///
/// Implemented for [`Topping`] and [`Protein`] only.
pub trait Ingredient:
    Copy + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static + private::Sealed
{
    /// Family name used in logs and diagnostics
    const FAMILY: &'static str;

    /// Unit price of this ingredient in `catalog`
    fn unit_price<C: PricingCatalog + ?Sized>(self, catalog: &C) -> f64;
}

impl private::Sealed for Topping {}
impl private::Sealed for Protein {}

impl Ingredient for Topping {
    const FAMILY: &'static str = "topping";

    #[inline]
    fn unit_price<C: PricingCatalog + ?Sized>(self, catalog: &C) -> f64 {
        catalog.topping_price(self)
    }
}

impl Ingredient for Protein {
    const FAMILY: &'static str = "protein";

    #[inline]
    fn unit_price<C: PricingCatalog + ?Sized>(self, catalog: &C) -> f64 {
        catalog.protein_price(self)
    }
}

/// The built-in price list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardMenu;

impl PricingCatalog for StandardMenu {
    #[inline]
    fn base_price(&self, size: Size) -> f64 {
        size.base_cost()
    }

    #[inline]
    fn topping_price(&self, topping: Topping) -> f64 {
        topping.cost()
    }

    #[inline]
    fn protein_price(&self, protein: Protein) -> f64 {
        protein.cost()
    }

    #[inline]
    fn multiplier(&self, portion: PortionSize) -> f64 {
        portion.cost_multiplier()
    }
}
