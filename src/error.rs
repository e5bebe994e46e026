use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the rafmat crate.
///
/// Every error aborts the statement being evaluated. Variables assigned by
/// earlier, completed statements are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid character, malformed number or unknown function name
    LexError(String),
    /// Unexpected token while parsing a statement
    ParseError(String),
    /// Read of a variable that was never assigned
    #[doc(alias = "UndefinedVariableError")]
    NameError(String),
    /// Function argument outside of the function domain
    DomainError(String),
    /// Division by zero
    ZeroDivisionError(String),
    /// Integer overflow, or a function result too large to represent
    OverflowError(String),
    /// A boolean used where a number is required
    TypeError(String),
}

impl Error {
    /// Name of the error kind, as used in the `Display` output
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match *self {
            Self::LexError(_) => "LexError",
            Self::ParseError(_) => "ParseError",
            Self::NameError(_) => "NameError",
            Self::DomainError(_) => "DomainError",
            Self::ZeroDivisionError(_) => "ZeroDivisionError",
            Self::OverflowError(_) => "OverflowError",
            Self::TypeError(_) => "TypeError",
        }
    }

    /// The message attached to this error, without the kind prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match *self {
            Self::LexError(ref message)
            | Self::ParseError(ref message)
            | Self::NameError(ref message)
            | Self::DomainError(ref message)
            | Self::ZeroDivisionError(ref message)
            | Self::OverflowError(ref message)
            | Self::TypeError(ref message) => message,
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}: {}", self.kind(), self.message())
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let error = Error::NameError("name 'z' is not defined".into());
        assert_eq!(error.to_string(), "NameError: name 'z' is not defined");

        let error = Error::LexError("unknown function: foo".into());
        assert_eq!(error.kind(), "LexError");
        assert_eq!(error.message(), "unknown function: foo");
    }
}
