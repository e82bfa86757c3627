//! Premium arithmetic
//!
//! Pure computation; input validation happens at the fetch boundary.

/// Mid price and its premium over the reference rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PremiumResult {
    /// Average of the buy-side and sell-side prices
    pub mid: f64,
    /// Signed percentage premium of `mid` over the reference rate
    pub premium: f64,
}

/// Compute the mid price and its percentage premium over `reference`
///
/// Callers guarantee all three inputs are positive; the fetch layer rejects
/// non-positive prices before they reach this point.
pub fn compute(buy: f64, sell: f64, reference: f64) -> PremiumResult {
    debug_assert!(buy > 0.0 && sell > 0.0 && reference > 0.0);

    let mid = (buy + sell) / 2.0;
    let premium = (mid - reference) / reference * 100.0;

    PremiumResult { mid, premium }
}
