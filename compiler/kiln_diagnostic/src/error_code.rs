//! Error codes for analysis diagnostics.
//!
//! Format: `K####` for errors, `W####` for warnings. Codes are stable so
//! they can be searched for and documented.

use std::fmt;

/// Error codes for all analysis diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A builder-managed field has no declared type
    K0001,
    /// Declaration kind cannot get a builder
    K0002,
    /// Sum type declares no cases
    K0003,
    /// Two or more cases share a name
    K0004,
    /// Payload label collides with the positional naming scheme
    K0005,

    /// Sum type has no payload in any case
    W0001,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::K0001,
        ErrorCode::K0002,
        ErrorCode::K0003,
        ErrorCode::K0004,
        ErrorCode::K0005,
        ErrorCode::W0001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::K0001 => "K0001",
            ErrorCode::K0002 => "K0002",
            ErrorCode::K0003 => "K0003",
            ErrorCode::K0004 => "K0004",
            ErrorCode::K0005 => "K0005",
            ErrorCode::W0001 => "W0001",
        }
    }

    /// One-line description, used by `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::K0001 => "field type must be declared explicitly",
            ErrorCode::K0002 => "only records and sum types can derive a builder",
            ErrorCode::K0003 => "sum type has no cases",
            ErrorCode::K0004 => "case names must be unique",
            ErrorCode::K0005 => "payload label is reserved for positional names",
            ErrorCode::W0001 => "sum type carries no payload in any case",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"K0004"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
