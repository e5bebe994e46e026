use crate::error::Error;
use crate::token::{Cmp, Op};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Result of evaluating a statement, or content of a variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value, only produced by comparisons
    Bool(bool),
}

impl Value {
    /// Get this value as a floating point number, promoting integers.
    ///
    /// Booleans are not numbers and give a `TypeError`.
    pub fn as_f64(self) -> Result<f64, Error> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Ok(value as f64),
            Self::Float(value) => Ok(value),
            Self::Bool(_) => Err(Error::TypeError(
                "a boolean can not be used as a number".into(),
            )),
        }
    }

    /// Apply the arithmetic operator `op` to `self` and `rhs`.
    ///
    /// Two integers give an integer, using truncating division for `/`. A
    /// float on either side promotes the other side to a float.
    pub fn apply(self, op: Op, rhs: Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Self::Int(left), Self::Int(right)) => int_op(left, op, right).map(Self::Int),
            (left, right) => float_op(left.as_f64()?, op, right.as_f64()?).map(Self::Float),
        }
    }

    /// Compare `self` and `rhs` with `cmp`, giving a boolean value.
    pub fn compare(self, cmp: Cmp, rhs: Value) -> Result<Value, Error> {
        let ordering = match (self, rhs) {
            (Self::Bool(_), _) | (_, Self::Bool(_)) => {
                return Err(Error::TypeError(format!(
                    "a boolean can not be compared with '{}'",
                    cmp.symbol()
                )))
            }
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(&right)),
            (left, right) => left.as_f64()?.partial_cmp(&right.as_f64()?),
        };

        // NaN is unordered: every comparison with it is false
        let result = ordering.map_or(false, |ordering| match cmp {
            Cmp::Less => ordering == Ordering::Less,
            Cmp::LessEqual => ordering != Ordering::Greater,
            Cmp::Greater => ordering == Ordering::Greater,
            Cmp::GreaterEqual => ordering != Ordering::Less,
            Cmp::Equal => ordering == Ordering::Equal,
        });
        Ok(Self::Bool(result))
    }
}

fn int_op(left: i64, op: Op, right: i64) -> Result<i64, Error> {
    let result = match op {
        Op::Plus => left.checked_add(right),
        Op::Minus => left.checked_sub(right),
        Op::Mul => left.checked_mul(right),
        Op::Div => {
            if right == 0 {
                return Err(Error::ZeroDivisionError("integer division by zero".into()));
            }
            // rounds toward zero
            left.checked_div(right)
        }
    };
    result.ok_or_else(|| {
        Error::OverflowError(format!(
            "integer overflow in {} {} {}",
            left,
            op.symbol(),
            right
        ))
    })
}

fn float_op(left: f64, op: Op, right: f64) -> Result<f64, Error> {
    match op {
        Op::Plus => Ok(left + right),
        Op::Minus => Ok(left - right),
        Op::Mul => Ok(left * right),
        Op::Div => {
            if right == 0.0 {
                return Err(Error::ZeroDivisionError("float division by zero".into()));
            }
            Ok(left / right)
        }
    }
}

impl Display for Value {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Int(value) => write!(fmt, "{}", value),
            // Debug formatting keeps the fractional part: `2.0`, not `2`
            Self::Float(value) => write!(fmt, "{:?}", value),
            Self::Bool(value) => write!(fmt, "{}", value),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::error::Error;
    use crate::token::{Cmp, Op};
    use test_case::test_case;

    #[test_case(Value::Int(2), Op::Plus, Value::Int(3) => Ok(Value::Int(5)) ; "integer addition")]
    #[test_case(Value::Int(2), Op::Minus, Value::Float(0.5) => Ok(Value::Float(1.5)) ; "mixed subtraction")]
    #[test_case(Value::Float(1.5), Op::Mul, Value::Int(2) => Ok(Value::Float(3.0)) ; "mixed multiplication")]
    #[test_case(Value::Int(7), Op::Div, Value::Int(2) => Ok(Value::Int(3)) ; "integer division truncates")]
    #[test_case(Value::Int(-7), Op::Div, Value::Int(2) => Ok(Value::Int(-3)) ; "integer division truncates toward zero")]
    #[test_case(Value::Int(7), Op::Div, Value::Float(2.0) => Ok(Value::Float(3.5)) ; "float division does not truncate")]
    #[test_case(Value::Int(1), Op::Div, Value::Int(0) => Err(Error::ZeroDivisionError("integer division by zero".into())) ; "integer division by zero")]
    #[test_case(Value::Float(1.0), Op::Div, Value::Float(0.0) => Err(Error::ZeroDivisionError("float division by zero".into())) ; "float division by zero")]
    #[test_case(Value::Int(i64::MAX), Op::Plus, Value::Int(1) => Err(Error::OverflowError(format!("integer overflow in {} + 1", i64::MAX))) ; "integer overflow")]
    #[test_case(Value::Bool(true), Op::Plus, Value::Int(1) => Err(Error::TypeError("a boolean can not be used as a number".into())) ; "boolean in arithmetic")]
    fn apply(left: Value, op: Op, right: Value) -> Result<Value, Error> {
        left.apply(op, right)
    }

    #[test_case(Value::Int(3), Cmp::Less, Value::Int(5) => Ok(Value::Bool(true)) ; "less")]
    #[test_case(Value::Int(3), Cmp::Equal, Value::Float(3.0) => Ok(Value::Bool(true)) ; "cross type equality")]
    #[test_case(Value::Float(2.5), Cmp::GreaterEqual, Value::Int(3) => Ok(Value::Bool(false)) ; "greater or equal")]
    #[test_case(Value::Int(4), Cmp::LessEqual, Value::Int(4) => Ok(Value::Bool(true)) ; "less or equal")]
    #[test_case(Value::Float(f64::NAN), Cmp::Equal, Value::Float(f64::NAN) => Ok(Value::Bool(false)) ; "nan is unordered")]
    fn compare(left: Value, cmp: Cmp, right: Value) -> Result<Value, Error> {
        left.compare(cmp, right)
    }

    #[test]
    fn compare_boolean() {
        let result = Value::Bool(true).compare(Cmp::Greater, Value::Int(0));
        assert!(matches!(result, Err(Error::TypeError(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(14).to_string(), "14");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn from() {
        assert_eq!(Value::from(3_i64), Value::Int(3));
        assert_eq!(Value::from(0.5), Value::Float(0.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn large_integers_stay_exact() {
        let big = Value::Int(9_007_199_254_740_993);
        assert_eq!(big.apply(Op::Div, Value::Int(1)), Ok(big));
        assert_eq!(
            big.compare(Cmp::Equal, Value::Float(9_007_199_254_740_992.0)),
            Ok(Value::Bool(true))
        );
    }
}
