//! Cent rounding and the storefront pricing policy constants.

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.07;

/// Flat shipping charge for orders at or under the free-shipping threshold.
pub const SHIPPING_FLAT: f64 = 4.99;

/// Orders with a subtotal strictly greater than this ship free.
pub const FREE_SHIPPING_OVER: f64 = 25.0;

/// Round to the nearest cent, ties away from zero.
///
/// A machine epsilon is added before rounding so that values sitting a hair
/// below a cent boundary after binary-float arithmetic (e.g. `19.99 * 0.07`)
/// still round up rather than truncating.
#[must_use]
pub fn round2(n: f64) -> f64 {
    ((n + f64::EPSILON) * 100.0).round() / 100.0
}

/// Shipping charge for a given (already rounded) subtotal: free over the
/// threshold, free for an empty cart, flat rate otherwise.
#[must_use]
pub fn shipping_for(subtotal: f64) -> f64 {
    if subtotal > FREE_SHIPPING_OVER || subtotal == 0.0 {
        0.0
    } else {
        SHIPPING_FLAT
    }
}
