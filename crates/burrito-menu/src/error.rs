//! Error types for menu configuration

/// Errors raised while loading a [`PriceTable`](crate::PriceTable)
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Document is not valid TOML or has the wrong shape
    #[error("invalid price table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Entry names an item that is not on the menu
    #[error("unknown {section} entry: {name}")]
    UnknownItem {
        /// Table section the entry appeared in
        section: &'static str,
        /// Offending key
        name: String,
    },

    /// Price or multiplier is negative or not a finite number
    #[error("{item} must be a finite non-negative number, got {value}")]
    NegativePrice {
        /// Item whose price was rejected
        item: String,
        /// Rejected value
        value: f64,
    },
}
