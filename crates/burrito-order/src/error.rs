//! Error types for order construction

/// Errors raised while configuring or finalizing an order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// A required value was not supplied
    #[error("invalid argument: {field} must be provided")]
    InvalidArgument {
        /// Name of the missing argument
        field: &'static str,
    },

    /// `build` was called before every required field was set
    #[error("incomplete configuration: {missing} has not been set")]
    IncompleteConfiguration {
        /// Name of the unset field
        missing: &'static str,
    },
}

impl OrderError {
    /// Check if the builder was finalized too early
    #[inline]
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteConfiguration { .. })
    }

    /// Check if a call site passed an unset value
    #[inline]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
