//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// A notice marks outcomes that worked but deserve attention, such as
/// falling back to demo mode or finding nothing to clear.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Notice,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Success,
        }
    }

    /// Create a new notice status.
    pub fn notice(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Notice,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Notice:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
