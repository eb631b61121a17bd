use std::fmt;

/// Error codes for all checker diagnostics.
///
/// Format: E#### where the first digit indicates the failure class:
/// - E0xxx: Format string syntax (unrecognized or malformed specifiers)
/// - E1xxx: Argument arity (missing or extra arguments)
/// - E2xxx: Argument types
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E0xxx)
    /// Unknown conversion character
    E0001,
    /// Unknown date/time conversion suffix
    E0002,
    /// Invalid explicit argument index
    E0003,
    /// Duplicate flag
    E0004,
    /// Flag not applicable to the conversion
    E0005,
    /// Mutually exclusive flags
    E0006,
    /// Precision not allowed for the conversion
    E0007,
    /// Flag requires a width
    E0008,
    /// Width not allowed for the conversion
    E0009,

    // Argument Errors (E1xxx)
    /// Specifier refers to an argument that was not supplied
    E1001,
    /// Relative index with no previous specifier
    E1002,
    /// Arguments supplied but never referenced
    E1003,

    // Type Errors (E2xxx)
    /// Argument type incompatible with the conversion
    E2001,
    /// Array passed to a conversion
    E2002,
    /// Malformed type descriptor
    E2003,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            // Arguments
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            // Types
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

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
