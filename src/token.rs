use crate::function::Function;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in a statement
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer literal, e.g. `42`
    Int(i64),
    /// Float literal, e.g. `4.2`, `.5` or `3.`
    Float(f64),
    /// Variable name
    Ident(String),
    /// Function name, only produced when directly followed by `(`
    Function(Function),
    /// An arithmetic operator
    Op(Op),
    /// A comparison operator
    Cmp(Cmp),
    /// `=`
    Assign,
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// End of the statement. Repeated forever once reached.
    Eof,
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
}

impl Op {
    /// Source text of the operator
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Comparison operators. A statement holds at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
}

impl Cmp {
    /// Source text of the operator
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Int(value) => write!(fmt, "{}", value),
            Self::Float(value) => write!(fmt, "{:?}", value),
            Self::Ident(ref name) => write!(fmt, "{}", name),
            Self::Function(function) => write!(fmt, "{}", function.name()),
            Self::Op(op) => write!(fmt, "{}", op.symbol()),
            Self::Cmp(cmp) => write!(fmt, "{}", cmp.symbol()),
            Self::Assign => write!(fmt, "="),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
            Self::Eof => write!(fmt, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cmp, Op, Token};
    use crate::function::Function;

    #[test]
    fn display() {
        assert_eq!(Token::Cmp(Cmp::Greater).to_string(), ">");
        assert_eq!(Token::Cmp(Cmp::GreaterEqual).to_string(), ">=");
        assert_eq!(Token::Op(Op::Div).to_string(), "/");
        assert_eq!(Token::Float(2.0).to_string(), "2.0");
        assert_eq!(Token::Function(Function::Ctg).to_string(), "ctg");
        assert_eq!(Token::Ident("abc".into()).to_string(), "abc");
        assert_eq!(Token::Eof.to_string(), "end of input");
    }
}
