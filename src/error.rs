//! Construction-time error types.

use derive_more::{Display, Error};

/// Hard failures raised when building engine values from invalid input.
///
/// These cover states that must not exist, so construction fails outright
/// instead of producing a partially valid value. Operational outcomes of
/// play are [`MoveOutcome`](crate::MoveOutcome) values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A mark symbol other than `X` or `O`.
    #[display("'{}' is not a valid mark", _0)]
    InvalidMark(#[error(not(source))] char),

    /// Both players were given the same mark.
    #[display("Players must carry different marks")]
    MarkConflict,

    /// Both players were given the same id.
    #[display("Players must carry distinct ids")]
    PlayerIdConflict,
}
