//! Selection sets
//!
//! A [`SelectionSet`] maps each chosen ingredient to exactly one portion
//! level. Setting an ingredient twice overwrites the earlier level; nothing
//! stacks.

use burrito_menu::{Ingredient, PortionSize, PricingCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chosen ingredients of one family and their portion levels
///
/// Backed by an ordered map so iteration, and therefore the order in which
/// prices are summed, is the same on every run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet<K: Ord> {
    entries: BTreeMap<K, PortionSize>,
}

impl<K: Ingredient> SelectionSet<K> {
    /// Create an empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Select `kind` at `portion`, returning the level it replaced
    #[inline]
    pub fn set(&mut self, kind: K, portion: PortionSize) -> Option<PortionSize> {
        self.entries.insert(kind, portion)
    }

    /// Drop `kind` from the selection, returning its level if it was selected
    ///
    /// Removing an unselected ingredient does nothing.
    #[inline]
    pub fn remove(&mut self, kind: K) -> Option<PortionSize> {
        self.entries.remove(&kind)
    }

    /// Portion level of `kind`, or `None` if it is not selected
    #[inline]
    #[must_use]
    pub fn get(&self, kind: K) -> Option<PortionSize> {
        self.entries.get(&kind).copied()
    }

    /// Check whether `kind` is selected
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: K) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of selected ingredients
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over selected ingredients in menu order
    pub fn iter(&self) -> impl Iterator<Item = (K, PortionSize)> + '_ {
        self.entries.iter().map(|(kind, portion)| (*kind, *portion))
    }

    /// Sum of unit price times portion multiplier over every entry
    #[must_use]
    pub fn subtotal<C: PricingCatalog + ?Sized>(&self, catalog: &C) -> f64 {
        self.iter()
            .map(|(kind, portion)| kind.unit_price(catalog) * catalog.multiplier(portion))
            .sum()
    }
}

impl<K: Ingredient> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ingredient> FromIterator<(K, PortionSize)> for SelectionSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, PortionSize)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ingredient> Extend<(K, PortionSize)> for SelectionSet<K> {
    fn extend<I: IntoIterator<Item = (K, PortionSize)>>(&mut self, iter: I) {
        for (kind, portion) in iter {
            self.set(kind, portion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrito_menu::{Protein, StandardMenu, Topping};

    #[test]
    fn set_overwrites_existing_entry() {
        let mut set = SelectionSet::new();
        assert_eq!(set.set(Topping::Cheese, PortionSize::Normal), None);
        assert_eq!(set.set(Topping::Cheese, PortionSize::Extra), Some(PortionSize::Normal));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Topping::Cheese), Some(PortionSize::Extra));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set: SelectionSet<Protein> = SelectionSet::new();
        assert_eq!(set.remove(Protein::Tofu), None);
        assert!(set.is_empty());

        set.set(Protein::Tofu, PortionSize::Less);
        assert_eq!(set.remove(Protein::Tofu), Some(PortionSize::Less));
        assert_eq!(set.remove(Protein::Tofu), None);
        assert_eq!(set.get(Protein::Tofu), None);
    }

    #[test]
    fn absent_is_distinct_from_lowest_level() {
        let mut set = SelectionSet::new();
        set.set(Topping::Corn, PortionSize::Less);

        assert_eq!(set.get(Topping::Corn), Some(PortionSize::Less));
        assert_eq!(set.get(Topping::Lettuce), None);
    }

    #[test]
    fn subtotal_applies_multipliers() {
        let set: SelectionSet<Topping> = [
            (Topping::Cheese, PortionSize::Normal),
            (Topping::MediumSalsa, PortionSize::Less),
            (Topping::SourCream, PortionSize::Extra),
        ]
        .into_iter()
        .collect();

        assert!((set.subtotal(&StandardMenu) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn iteration_follows_menu_order() {
        let set: SelectionSet<Topping> = [
            (Topping::Guacamole, PortionSize::Normal),
            (Topping::Cheese, PortionSize::Normal),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<Topping> = set.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![Topping::Cheese, Topping::Guacamole]);
    }
}
