//! Burrito Menu
//!
//! Static menu items and the pricing catalog orders are costed against.
//!
//! # Core Concepts
//!
//! - [`Size`], [`PortionSize`], [`Topping`], [`Protein`]: closed menu enumerations
//! - [`PricingCatalog`]: read-only price lookup
//! - [`Ingredient`]: common view over toppings and proteins
//! - [`StandardMenu`]: built-in prices
//! - [`PriceTable`]: TOML-configured overrides of the built-in prices
//!
//! # Example
//!
//! ```rust
//! use burrito_menu::{PortionSize, PriceTable, PricingCatalog, Size, StandardMenu, Topping};
//!
//! let menu = StandardMenu;
//! assert_eq!(menu.base_price(Size::Normal), 4.0);
//!
//! let table: PriceTable = "[toppings]\nGuacamole = 1.5\n".parse()?;
//! assert_eq!(table.topping_price(Topping::Guacamole), 1.5);
//! assert_eq!(table.multiplier(PortionSize::Extra), 2.0);
//! # Ok::<(), burrito_menu::MenuError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod item;
mod table;

pub use catalog::{Ingredient, PricingCatalog, StandardMenu};
pub use error::MenuError;
pub use item::{PortionSize, Protein, Size, Topping};
pub use table::PriceTable;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
