//! Order builders
//!
//! [`BurritoBuilder`] is the configuration interface shared by every burrito
//! variant. Its methods take and return `&mut Self`, so a chain started on a
//! concrete builder keeps that builder's type and can mix generic calls with
//! variant-specific ones:
//!
//! ```rust
//! use burrito_menu::{PortionSize, Size, Topping};
//! use burrito_order::{BurritoBuilder, ObservableBurrito, VeggieBurritoBuilder};
//!
//! let burrito = VeggieBurritoBuilder::new()
//!     .size(Size::Normal)
//!     .no_guacamole()
//!     .add_topping(Topping::Corn, PortionSize::Extra)
//!     .build()?;
//! assert_eq!(burrito.topping(Topping::Guacamole), None);
//! # Ok::<(), burrito_order::OrderError>(())
//! ```

use crate::error::OrderError;
use crate::order::{ObservableBurrito, Recipe};
use crate::selection::SelectionSet;
use burrito_menu::{PortionSize, Protein, Size, Topping};

/// In-progress configuration held by a builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    size: Option<Size>,
    toppings: SelectionSet<Topping>,
    proteins: SelectionSet<Protein>,
}

impl OrderDraft {
    /// Create an empty draft with no size and nothing selected
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size chosen so far
    #[inline]
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Toppings chosen so far
    #[inline]
    #[must_use]
    pub fn toppings(&self) -> &SelectionSet<Topping> {
        &self.toppings
    }

    /// Proteins chosen so far
    #[inline]
    #[must_use]
    pub fn proteins(&self) -> &SelectionSet<Protein> {
        &self.proteins
    }

    /// Copy the draft into an immutable recipe
    ///
    /// # Errors
    /// Returns [`OrderError::IncompleteConfiguration`] if no size is set
    pub fn snapshot(&self) -> Result<Recipe, OrderError> {
        let size = self
            .size
            .ok_or(OrderError::IncompleteConfiguration { missing: "size" })?;
        Ok(Recipe::new(size, self.toppings.clone(), self.proteins.clone()))
    }
}

/// Configuration interface for a burrito variant
///
/// Implementors supply access to their [`OrderDraft`] and wrap the finished
/// [`Recipe`] in their output type; every other operation is provided.
///
/// # Contract
/// - Mutating operations return the same builder for chaining
/// - `build` never mutates the builder and may be called any number of times
/// - Each successful `build` returns an independent snapshot
pub trait BurritoBuilder: Sized {
    /// The burrito type this builder produces
    type Output: ObservableBurrito;

    /// Variant name used in logs
    const VARIANT: &'static str;

    /// Current configuration
    fn draft(&self) -> &OrderDraft;

    /// Current configuration, mutably
    fn draft_mut(&mut self) -> &mut OrderDraft;

    /// Wrap a validated recipe in the output type
    fn assemble(recipe: Recipe) -> Self::Output;

    /// Set the size, replacing any earlier choice
    fn size(&mut self, size: Size) -> &mut Self {
        self.draft_mut().size = Some(size);
        self
    }

    /// Set the size from a value that may be unset
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidArgument`] for `None`; the builder is left untouched
    fn try_size(&mut self, size: Option<Size>) -> Result<&mut Self, OrderError> {
        match size {
            Some(size) => Ok(self.size(size)),
            None => {
                tracing::warn!(variant = Self::VARIANT, "size argument missing");
                Err(OrderError::InvalidArgument { field: "size" })
            }
        }
    }

    /// Select a topping at `portion`; a repeated topping takes the new portion
    fn add_topping(&mut self, topping: Topping, portion: PortionSize) -> &mut Self {
        tracing::trace!(variant = Self::VARIANT, %topping, %portion, "topping selected");
        self.draft_mut().toppings.set(topping, portion);
        self
    }

    /// Select a protein at `portion`; a repeated protein takes the new portion
    fn add_protein(&mut self, protein: Protein, portion: PortionSize) -> &mut Self {
        tracing::trace!(variant = Self::VARIANT, %protein, %portion, "protein selected");
        self.draft_mut().proteins.set(protein, portion);
        self
    }

    /// Drop a topping if selected
    fn remove_topping(&mut self, topping: Topping) -> &mut Self {
        tracing::trace!(variant = Self::VARIANT, %topping, "topping removed");
        self.draft_mut().toppings.remove(topping);
        self
    }

    /// Drop a protein if selected
    fn remove_protein(&mut self, protein: Protein) -> &mut Self {
        tracing::trace!(variant = Self::VARIANT, %protein, "protein removed");
        self.draft_mut().proteins.remove(protein);
        self
    }

    /// Validate the configuration and produce a burrito
    ///
    /// # Errors
    /// Returns [`OrderError::IncompleteConfiguration`] if no size was set;
    /// the builder keeps its state so the caller can set one and retry
    fn build(&self) -> Result<Self::Output, OrderError> {
        let recipe = self.draft().snapshot().map_err(|err| {
            tracing::warn!(variant = Self::VARIANT, %err, "build rejected");
            err
        })?;

        tracing::debug!(
            variant = Self::VARIANT,
            size = %recipe.size(),
            toppings = recipe.toppings().len(),
            proteins = recipe.proteins().len(),
            "burrito built"
        );
        Ok(Self::assemble(recipe))
    }
}
