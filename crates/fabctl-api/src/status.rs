// Response classification
//
// The single success predicate the rest of the crate relies on. No other
// component decides success independently.

/// Sentinel status recorded when the transport itself failed and no HTTP
/// status was ever received (connection refused, DNS failure, timeout).
pub const NO_CONNECTION: i64 = -1;

/// Returns `true` iff `status` is a success: exactly 200 or 204.
///
/// Every other status — including [`NO_CONNECTION`] — is a failure.
pub fn is_success(status: i64) -> bool {
    matches!(status, 200 | 204)
}
