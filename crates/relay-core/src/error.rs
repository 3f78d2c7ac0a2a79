//! Error conversions for the message service.

use relay_model::MessageApiError;

/// Convert a storage error into the API's service-unavailable error.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn store_error_to_api(e: crate::storage::StoreError) -> MessageApiError {
    MessageApiError::store_unavailable(e.to_string())
}
