/// Error types surfaced by the console layer.
/// The rules core itself never fails: illegal moves are reported as a
/// plain `false` from validation, and out-of-range bit positions are
/// defined no-ops in the primitive layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// A move prompt line did not contain exactly four integers.
    MalformedInput(String),
    /// A well-formed move request was rejected by the validator.
    IllegalMove,
}
