#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::non_ascii_literal
)]

//! Rafmat, a line-oriented calculator with variables.
//!
//! This crate evaluates one statement at a time. A statement is either an
//! expression, which gives a value, or an assignment to a variable. Variables
//! are kept in a [`Variables`](struct.Variables.html) table that lives as
//! long as the caller wants, and is passed to every statement:
//!
//! ```
//! use rafmat::{evaluate_statement, Value, Variables};
//!
//! let mut variables = Variables::new();
//! assert_eq!(evaluate_statement("x = 10", &mut variables), Ok(None));
//! assert_eq!(evaluate_statement("y = x * 2", &mut variables), Ok(None));
//! assert_eq!(evaluate_statement("y > 15", &mut variables), Ok(Some(Value::Bool(true))));
//! assert_eq!(evaluate_statement("y / 3", &mut variables), Ok(Some(Value::Int(6))));
//! ```
//!
//! # Language definition
//!
//! A statement can contain the following elements:
//!
//! - integer literals (`42`) and float literals (`4.2`, `.5`, `3.`). There
//!   are no negative literals, write `0 - 5` instead;
//! - variables, made of letters only: `x`, `total`, ...;
//! - left and right parenthesis, nested at most
//!   [`MAX_NESTING`](constant.MAX_NESTING.html) deep;
//! - arithmetic operators `+`, `-`, `*` and `/`, with the usual precedence
//!   and left associativity;
//! - a single comparison, with `<`, `<=`, `>`, `>=` or `==`, giving a
//!   boolean;
//! - function calls with `sin`, `cos`, `tan`, `ctg` (cotangent), `sqrt`,
//!   `pow` (power of two: `pow(3)` is `8.0`) and `log` (natural logarithm).
//!   A function only applies to the factor right after it, so `sin(0) + 1`
//!   is `1.0`. Upper case names (`SIN`, `SQRT`, ...) are also accepted;
//! - an assignment prefix `name =`.
//!
//! Any other symbol is forbidden in the input.
//!
//! Operations on two integers give an integer, and the division truncates
//! toward zero: `7 / 2` is `3`. A float on either side makes the result a
//! float, and `7 / 2.0` is `3.5`. Functions always give floats. Booleans can
//! be stored in variables, but not used in arithmetic or comparisons.
//!
//! ```
//! use rafmat::{evaluate_statement, Error, Value, Variables};
//!
//! let mut variables = Variables::new();
//! assert_eq!(evaluate_statement("sqrt(4)", &mut variables), Ok(Some(Value::Float(2.0))));
//! assert!(matches!(
//!     evaluate_statement("sqrt(0 - 1)", &mut variables),
//!     Err(Error::DomainError(_))
//! ));
//! assert!(matches!(
//!     evaluate_statement("unknown + 1", &mut variables),
//!     Err(Error::NameError(_))
//! ));
//! ```
//!
//! # Technical details
//!
//! rafmat uses a recursive-descent parser that evaluates the statement while
//! parsing it, pulling tokens from the lexer one at a time. No syntax tree is
//! built.

#[macro_use]
extern crate lazy_static;

mod error;
mod function;
mod interpreter;
mod lexer;
mod token;
mod value;
mod variables;

pub use error::Error;
pub use function::{Function, FUNCTIONS};
pub use interpreter::{Interpreter, MAX_NESTING};
pub use lexer::Lexer;
pub use token::{Cmp, Op, Token};
pub use value::Value;
pub use variables::{SharedVariables, Variables};

/// Evaluate a single statement from `input`, using and updating `variables`.
///
/// Returns `Ok(None)` for an assignment, `Ok(Some(value))` for any other
/// statement, and `Err(cause)` if lexing, parsing or evaluating the statement
/// failed. A failed statement never modifies `variables`.
///
/// # Example
///
/// ```
/// use rafmat::{evaluate_statement, Value, Variables};
///
/// let mut variables = Variables::new();
/// assert_eq!(evaluate_statement("45 - 2 * 3", &mut variables), Ok(Some(Value::Int(39))));
/// assert_eq!(evaluate_statement("a = 0.5", &mut variables), Ok(None));
/// assert_eq!(evaluate_statement("3 * a", &mut variables), Ok(Some(Value::Float(1.5))));
/// ```
pub fn evaluate_statement(input: &str, variables: &mut Variables) -> Result<Option<Value>, Error> {
    Interpreter::new(input, variables)?.statement()
}

#[cfg(test)]
mod tests {
    use super::{evaluate_statement, Error, Value, Variables};

    #[test]
    fn session() {
        let mut variables = Variables::new();
        let results: Vec<_> = ["x = 10", "y = x * 2", "y > 15"]
            .iter()
            .map(|statement| evaluate_statement(statement, &mut variables))
            .collect();

        assert_eq!(results, vec![Ok(None), Ok(None), Ok(Some(Value::Bool(true)))]);
        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get("x"), Ok(Value::Int(10)));
        assert_eq!(variables.get("y"), Ok(Value::Int(20)));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_statement("a = 2", &mut variables), Ok(None));
        assert!(matches!(
            evaluate_statement("a = 1.2.3", &mut variables),
            Err(Error::LexError(_))
        ));
        assert!(matches!(
            evaluate_statement("a = pow(a", &mut variables),
            Err(Error::ParseError(_))
        ));
        assert_eq!(evaluate_statement("a = pow(a)", &mut variables), Ok(None));
        assert_eq!(
            evaluate_statement("a", &mut variables),
            Ok(Some(Value::Float(4.0)))
        );
    }

    #[test]
    fn reassignment() {
        let mut variables = Variables::new();
        evaluate_statement("v = 1", &mut variables).unwrap();
        evaluate_statement("v = v + 1", &mut variables).unwrap();
        evaluate_statement("v = v * 10", &mut variables).unwrap();
        assert_eq!(evaluate_statement("v", &mut variables), Ok(Some(Value::Int(20))));
    }

    #[test]
    fn pow_is_power_of_two() {
        let mut variables = Variables::new();
        for x in 0..10 {
            let result = evaluate_statement(&format!("pow({})", x), &mut variables);
            assert_eq!(result, Ok(Some(Value::Float(f64::from(1_u32 << x)))));
        }
        match evaluate_statement("pow(0.5)", &mut variables) {
            Ok(Some(Value::Float(value))) => {
                assert!((value - std::f64::consts::SQRT_2).abs() < 1e-12);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
