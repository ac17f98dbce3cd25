//! Menu items
//!
//! The closed enumerations a burrito is assembled from. Each item carries its
//! standard price (or multiplier, for portions) so the [`StandardMenu`]
//! catalog is a thin lookup over these tables.
//!
//! [`StandardMenu`]: crate::StandardMenu

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Burrito size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    /// Regular burrito
    Normal,
    /// Large burrito
    Jumbo,
}

impl Size {
    /// Every size on the menu
    pub const ALL: [Size; 2] = [Size::Normal, Size::Jumbo];

    /// Standard base price
    #[inline]
    #[must_use]
    pub const fn base_cost(self) -> f64 {
        match self {
            Self::Normal => 4.0,
            Self::Jumbo => 4.2,
        }
    }

    /// Menu name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Jumbo => "Jumbo",
        }
    }
}

/// Portion level of a topping or protein
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PortionSize {
    /// Half portion
    Less,
    /// Regular portion
    Normal,
    /// Double portion
    Extra,
}

impl PortionSize {
    /// Every portion level, smallest first
    pub const ALL: [PortionSize; 3] = [PortionSize::Less, PortionSize::Normal, PortionSize::Extra];

    /// Standard cost multiplier applied to an ingredient's unit price
    #[inline]
    #[must_use]
    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::Less => 0.5,
            Self::Normal => 1.0,
            Self::Extra => 2.0,
        }
    }

    /// Menu name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Less => "Less",
            Self::Normal => "Normal",
            Self::Extra => "Extra",
        }
    }
}

/// Topping kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topping {
    /// Shredded cheese
    Cheese,
    /// Medium salsa
    MediumSalsa,
    /// Hot salsa
    HotSalsa,
    /// Mild salsa
    MildSalsa,
    /// Sour cream
    SourCream,
    /// Lettuce
    Lettuce,
    /// Guacamole
    Guacamole,
    /// Corn salsa
    Corn,
}

impl Topping {
    /// Every topping on the menu
    pub const ALL: [Topping; 8] = [
        Topping::Cheese,
        Topping::MediumSalsa,
        Topping::HotSalsa,
        Topping::MildSalsa,
        Topping::SourCream,
        Topping::Lettuce,
        Topping::Guacamole,
        Topping::Corn,
    ];

    /// Standard unit price
    #[inline]
    #[must_use]
    pub const fn cost(self) -> f64 {
        match self {
            Self::Cheese | Self::Lettuce => 0.2,
            Self::MediumSalsa | Self::HotSalsa | Self::MildSalsa => 0.4,
            Self::SourCream => 0.25,
            Self::Guacamole => 1.2,
            Self::Corn => 0.3,
        }
    }

    /// Menu name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cheese => "Cheese",
            Self::MediumSalsa => "MediumSalsa",
            Self::HotSalsa => "HotSalsa",
            Self::MildSalsa => "MildSalsa",
            Self::SourCream => "SourCream",
            Self::Lettuce => "Lettuce",
            Self::Guacamole => "Guacamole",
            Self::Corn => "Corn",
        }
    }
}

/// Protein kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Protein {
    /// Grilled chicken
    Chicken,
    /// Steak
    Steak,
    /// Tofu
    Tofu,
    /// Black beans
    BlackBeans,
    /// Pinto beans
    PintoBeans,
}

impl Protein {
    /// Every protein on the menu
    pub const ALL: [Protein; 5] = [
        Protein::Chicken,
        Protein::Steak,
        Protein::Tofu,
        Protein::BlackBeans,
        Protein::PintoBeans,
    ];

    /// Standard unit price
    #[inline]
    #[must_use]
    pub const fn cost(self) -> f64 {
        match self {
            Self::Chicken => 2.0,
            Self::Steak => 2.5,
            Self::Tofu | Self::BlackBeans | Self::PintoBeans => 1.0,
        }
    }

    /// Menu name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicken => "Chicken",
            Self::Steak => "Steak",
            Self::Tofu => "Tofu",
            Self::BlackBeans => "BlackBeans",
            Self::PintoBeans => "PintoBeans",
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for PortionSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Protein {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
