//! Preset compositions
//!
//! A [`Preset`] is a named list of default selections. Seeding a builder
//! writes those selections through the ordinary builder operations, so once
//! stored they are indistinguishable from entries the caller added.

use crate::builder::BurritoBuilder;
use burrito_menu::{PortionSize, Protein, Topping};

/// Named default composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Preset name
    pub name: &'static str,
    /// Default proteins
    pub proteins: &'static [(Protein, PortionSize)],
    /// Default toppings
    pub toppings: &'static [(Topping, PortionSize)],
}

impl Preset {
    /// Write every default selection into `builder`
    pub fn seed<'b, B: BurritoBuilder>(&self, builder: &'b mut B) -> &'b mut B {
        tracing::trace!(
            preset = self.name,
            proteins = self.proteins.len(),
            toppings = self.toppings.len(),
            "seeding preset"
        );
        for &(protein, portion) in self.proteins {
            builder.add_protein(protein, portion);
        }
        for &(topping, portion) in self.toppings {
            builder.add_topping(topping, portion);
        }
        builder
    }

    /// Number of default selections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.proteins.len() + self.toppings.len()
    }

    /// Check if the preset selects nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty() && self.toppings.is_empty()
    }
}

/// Black beans with medium salsa, cheese, lettuce and guacamole, all at normal portion
pub static VEGGIE: Preset = Preset {
    name: "veggie",
    proteins: &[(Protein::BlackBeans, PortionSize::Normal)],
    toppings: &[
        (Topping::MediumSalsa, PortionSize::Normal),
        (Topping::Cheese, PortionSize::Normal),
        (Topping::Lettuce, PortionSize::Normal),
        (Topping::Guacamole, PortionSize::Normal),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::CustomBurritoBuilder;

    #[test]
    fn seed_writes_every_default() {
        let mut builder = CustomBurritoBuilder::new();
        VEGGIE.seed(&mut builder);

        let draft = builder.draft();
        assert_eq!(draft.proteins().len(), 1);
        assert_eq!(draft.toppings().len(), 4);
        assert_eq!(draft.toppings().get(Topping::Guacamole), Some(PortionSize::Normal));
        assert_eq!(draft.size(), None);
    }

    #[test]
    fn veggie_has_five_defaults() {
        assert_eq!(VEGGIE.len(), 5);
        assert!(!VEGGIE.is_empty());
    }
}
