/// Input validation failures, surfaced before any mining work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EclatError {
    /// `min_support` is a fraction of the transaction count and must lie in
    /// `(0, 1]`. Zero, negatives, values above one and NaN are all rejected.
    #[error("min_support must lie in (0, 1], got {0}")]
    InvalidMinSupport(f32),
}
