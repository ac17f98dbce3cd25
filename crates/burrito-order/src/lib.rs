//! Burrito Orders
//!
//! Builders that accumulate a size and ingredient selections, and the
//! immutable burritos they produce.
//!
//! # Core Concepts
//!
//! - [`SelectionSet`]: ingredient → portion map, one entry per ingredient
//! - [`BurritoBuilder`]: chainable configuration interface shared by all variants
//! - [`CustomBurritoBuilder`]: starts empty
//! - [`VeggieBurritoBuilder`]: starts from the [`VEGGIE`] preset, with named removers
//! - [`ObservableBurrito`]: read access and pricing of a finished burrito
//!
//! # Example
//!
//! ```rust
//! use burrito_menu::{PortionSize, Protein, Size, Topping};
//! use burrito_order::{BurritoBuilder, CustomBurritoBuilder, ObservableBurrito};
//!
//! let burrito = CustomBurritoBuilder::new()
//!     .size(Size::Normal)
//!     .add_topping(Topping::Cheese, PortionSize::Normal)
//!     .add_topping(Topping::MediumSalsa, PortionSize::Less)
//!     .add_topping(Topping::SourCream, PortionSize::Extra)
//!     .add_protein(Protein::Tofu, PortionSize::Normal)
//!     .build()?;
//!
//! assert!((burrito.cost() - 5.9).abs() < 0.01);
//! # Ok::<(), burrito_order::OrderError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod custom;
mod error;
mod order;
mod preset;
mod selection;
mod veggie;

pub use builder::{BurritoBuilder, OrderDraft};
pub use custom::{CustomBurrito, CustomBurritoBuilder};
pub use error::OrderError;
pub use order::{ObservableBurrito, Recipe, Selectable};
pub use preset::{Preset, VEGGIE};
pub use selection::SelectionSet;
pub use veggie::{VeggieBurrito, VeggieBurritoBuilder};

/// Common imports for building and reading orders
pub mod prelude {
    pub use crate::{BurritoBuilder, ObservableBurrito};
    pub use burrito_menu::{PortionSize, PricingCatalog, Protein, Size, Topping};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
