pub mod customer;
pub mod contact;
pub mod repository;
pub mod submission;

pub use customer::CustomerInfo;
pub use contact::{ContactCategory, ContactReceipt, ContactRequest};
pub use repository::{CatalogError, CatalogSource};
pub use submission::{
    BookingConfirmation, BookingError, BookingKind, BookingRequest, BookingSubmitter, QuickBookingRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Fails with a validation error naming every blank field, in order.
pub(crate) fn require_fields(fields: &[(&str, bool)]) -> CoreResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, blank)| *blank)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::ValidationError(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
