//! Configurable price table
//!
//! A [`PriceTable`] is a [`PricingCatalog`] loaded from a TOML document.
//! Entries that the document leaves out keep their standard price.
//!
//! ```toml
//! [sizes]
//! Jumbo = 5.0
//!
//! [toppings]
//! Guacamole = 1.5
//!
//! [portions]
//! Extra = 1.5
//! ```

use crate::catalog::PricingCatalog;
use crate::error::MenuError;
use crate::item::{PortionSize, Protein, Size, Topping};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Price overrides on top of the standard menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    sizes: BTreeMap<Size, f64>,
    toppings: BTreeMap<Topping, f64>,
    proteins: BTreeMap<Protein, f64>,
    portions: BTreeMap<PortionSize, f64>,
}

/// On-disk shape, keyed by menu name
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTable {
    sizes: BTreeMap<String, f64>,
    toppings: BTreeMap<String, f64>,
    proteins: BTreeMap<String, f64>,
    portions: BTreeMap<String, f64>,
}

impl PriceTable {
    /// Table with no overrides (prices identical to [`StandardMenu`](crate::StandardMenu))
    #[inline]
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parse a TOML price table
    ///
    /// # Errors
    /// - [`MenuError::Parse`] if the document is malformed or has unknown sections
    /// - [`MenuError::UnknownItem`] if a key is not a menu item
    /// - [`MenuError::NegativePrice`] if a value is negative or not finite
    pub fn from_toml_str(document: &str) -> Result<Self, MenuError> {
        let raw: RawTable = toml::from_str(document)?;

        let table = Self {
            sizes: resolve("sizes", &Size::ALL, Size::name, raw.sizes)?,
            toppings: resolve("toppings", &Topping::ALL, Topping::name, raw.toppings)?,
            proteins: resolve("proteins", &Protein::ALL, Protein::name, raw.proteins)?,
            portions: resolve("portions", &PortionSize::ALL, PortionSize::name, raw.portions)?,
        };

        tracing::debug!(overrides = table.override_count(), "loaded price table");
        Ok(table)
    }

    /// Override the base price of a size
    ///
    /// # Errors
    /// Returns [`MenuError::NegativePrice`] if `price` is negative or not finite
    pub fn with_size_price(mut self, size: Size, price: f64) -> Result<Self, MenuError> {
        self.sizes.insert(size, checked(size.name(), price)?);
        Ok(self)
    }

    /// Override the unit price of a topping
    ///
    /// # Errors
    /// Returns [`MenuError::NegativePrice`] if `price` is negative or not finite
    pub fn with_topping_price(mut self, topping: Topping, price: f64) -> Result<Self, MenuError> {
        self.toppings.insert(topping, checked(topping.name(), price)?);
        Ok(self)
    }

    /// Override the unit price of a protein
    ///
    /// # Errors
    /// Returns [`MenuError::NegativePrice`] if `price` is negative or not finite
    pub fn with_protein_price(mut self, protein: Protein, price: f64) -> Result<Self, MenuError> {
        self.proteins.insert(protein, checked(protein.name(), price)?);
        Ok(self)
    }

    /// Override the multiplier of a portion level
    ///
    /// # Errors
    /// Returns [`MenuError::NegativePrice`] if `multiplier` is negative or not finite
    pub fn with_multiplier(mut self, portion: PortionSize, multiplier: f64) -> Result<Self, MenuError> {
        self.portions.insert(portion, checked(portion.name(), multiplier)?);
        Ok(self)
    }

    /// Number of overridden entries
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.sizes.len() + self.toppings.len() + self.proteins.len() + self.portions.len()
    }
}

impl FromStr for PriceTable {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

impl PricingCatalog for PriceTable {
    fn base_price(&self, size: Size) -> f64 {
        self.sizes.get(&size).copied().unwrap_or_else(|| size.base_cost())
    }

    fn topping_price(&self, topping: Topping) -> f64 {
        self.toppings.get(&topping).copied().unwrap_or_else(|| topping.cost())
    }

    fn protein_price(&self, protein: Protein) -> f64 {
        self.proteins.get(&protein).copied().unwrap_or_else(|| protein.cost())
    }

    fn multiplier(&self, portion: PortionSize) -> f64 {
        self.portions
            .get(&portion)
            .copied()
            .unwrap_or_else(|| portion.cost_multiplier())
    }
}

fn checked(item: &str, value: f64) -> Result<f64, MenuError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MenuError::NegativePrice {
            item: item.to_string(),
            value,
        })
    }
}

fn resolve<T: Copy + Ord>(
    section: &'static str,
    items: &[T],
    name_of: fn(T) -> &'static str,
    entries: BTreeMap<String, f64>,
) -> Result<BTreeMap<T, f64>, MenuError> {
    let mut resolved = BTreeMap::new();
    for (name, value) in entries {
        let Some(item) = items.iter().copied().find(|item| name_of(*item) == name) else {
            return Err(MenuError::UnknownItem { section, name });
        };
        resolved.insert(item, checked(&name, value)?);
    }
    Ok(resolved)
}
