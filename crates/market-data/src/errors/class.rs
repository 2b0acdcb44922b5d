/// Classification of market data errors for the HTTP boundary.
///
/// The resolution and search layers never deal in HTTP statuses; they
/// return [`MarketDataError`](super::MarketDataError) values and the server
/// maps each class to its documented status.
///
/// # Mapping Summary
///
/// | Class | HTTP status |
/// |-------|-------------|
/// | `BadRequest` | 400 |
/// | `Denied` | 403 |
/// | `NotFound` | 404 |
/// | `Throttled` | 429 |
/// | `Upstream` | 500 |
/// | `Configuration` | 500 |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The caller's input was rejected before any provider call.
    BadRequest,

    /// The symbol is premium-gated or the provider refused access.
    Denied,

    /// Every applicable strategy was tried and none knew the symbol.
    NotFound,

    /// The provider asked us to slow down.
    Throttled,

    /// The provider failed, timed out, or answered with garbage.
    /// Indistinguishable from the caller's point of view.
    Upstream,

    /// A required credential is missing from the deployment.
    /// Surfaces as a server error but needs an operator, not a retry.
    Configuration,
}
