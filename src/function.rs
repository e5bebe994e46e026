use crate::error::Error;
use hashbrown::HashMap;

/// The unary functions that can prefix a factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine, in radians
    Sin,
    /// Cosine, in radians
    Cos,
    /// Tangent, in radians
    Tan,
    /// Cotangent, `1 / tan(x)`
    Ctg,
    /// Square root
    Sqrt,
    /// Power of two, `2^x`. The base is fixed.
    Pow,
    /// Natural logarithm
    Log,
}

lazy_static! {
    /// All function names recognized by the lexer. Both the lower case and the
    /// upper case spelling of a name are accepted.
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        for &function in &Function::ALL {
            map.insert(function.name(), function);
            map.insert(function.upper_name(), function);
        }
        map.shrink_to_fit();
        map
    };
}

impl Function {
    /// Every function, in declaration order
    pub const ALL: [Function; 7] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ctg,
        Self::Sqrt,
        Self::Pow,
        Self::Log,
    ];

    /// Look up a function by the name written in the input
    #[must_use]
    pub fn from_name(name: &str) -> Option<Function> {
        FUNCTIONS.get(name).copied()
    }

    /// Canonical (lower case) name of the function
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ctg => "ctg",
            Self::Sqrt => "sqrt",
            Self::Pow => "pow",
            Self::Log => "log",
        }
    }

    fn upper_name(self) -> &'static str {
        match self {
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Tan => "TAN",
            Self::Ctg => "CTG",
            Self::Sqrt => "SQRT",
            Self::Pow => "POW",
            Self::Log => "LOG",
        }
    }

    /// Apply the function to `x`.
    ///
    /// Fails with a `DomainError` when `x` is outside of the function domain,
    /// with a `ZeroDivisionError` for the cotangent of a multiple of pi, and
    /// with an `OverflowError` when a finite argument gives an infinite
    /// result.
    pub fn apply(self, x: f64) -> Result<f64, Error> {
        let result = match self {
            Self::Sin => libm::sin(x),
            Self::Cos => libm::cos(x),
            Self::Tan => libm::tan(x),
            Self::Ctg => {
                let tan = libm::tan(x);
                if tan == 0.0 {
                    return Err(Error::ZeroDivisionError(format!(
                        "ctg({:?}) divides by zero",
                        x
                    )));
                }
                1.0 / tan
            }
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(self.domain_error(x));
                }
                libm::sqrt(x)
            }
            Self::Pow => libm::exp2(x),
            Self::Log => {
                if x <= 0.0 {
                    return Err(self.domain_error(x));
                }
                libm::log(x)
            }
        };

        if result.is_nan() && !x.is_nan() {
            return Err(self.domain_error(x));
        }
        if result.is_infinite() && x.is_finite() {
            return Err(Error::OverflowError(format!(
                "{}({:?}) is too large",
                self.name(),
                x
            )));
        }
        Ok(result)
    }

    fn domain_error(self, x: f64) -> Error {
        Error::DomainError(format!("{:?} is outside of the domain of {}", x, self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Function, FUNCTIONS};
    use crate::error::Error;
    use test_case::test_case;

    #[test]
    fn names() {
        assert_eq!(FUNCTIONS.len(), 14);
        for &function in &Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
        }
        assert_eq!(Function::from_name("SQRT"), Some(Function::Sqrt));
        assert_eq!(Function::from_name("Sqrt"), None);
        assert_eq!(Function::from_name("ln"), None);
        assert_eq!(Function::from_name("foo"), None);
    }

    #[test_case(Function::Sqrt, 4.0 => Ok(2.0) ; "square root")]
    #[test_case(Function::Pow, 3.0 => Ok(8.0) ; "power of two")]
    #[test_case(Function::Pow, -1.0 => Ok(0.5) ; "negative power of two")]
    #[test_case(Function::Pow, 0.0 => Ok(1.0) ; "zeroth power of two")]
    #[test_case(Function::Sin, 0.0 => Ok(0.0) ; "sine of zero")]
    #[test_case(Function::Cos, 0.0 => Ok(1.0) ; "cosine of zero")]
    #[test_case(Function::Log, 1.0 => Ok(0.0) ; "log of one")]
    fn apply(function: Function, x: f64) -> Result<f64, Error> {
        function.apply(x)
    }

    #[test]
    fn trigonometry() {
        let x = 0.7;
        assert!((Function::Tan.apply(x).unwrap() - x.tan()).abs() < 1e-12);
        assert!((Function::Ctg.apply(x).unwrap() - 1.0 / x.tan()).abs() < 1e-12);
        assert!((Function::Log.apply(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn errors() {
        assert!(matches!(Function::Sqrt.apply(-1.0), Err(Error::DomainError(_))));
        assert!(matches!(Function::Log.apply(0.0), Err(Error::DomainError(_))));
        assert!(matches!(Function::Log.apply(-5.0), Err(Error::DomainError(_))));
        assert!(matches!(Function::Sin.apply(f64::INFINITY), Err(Error::DomainError(_))));
        assert!(matches!(Function::Ctg.apply(0.0), Err(Error::ZeroDivisionError(_))));
        assert!(matches!(Function::Pow.apply(2000.0), Err(Error::OverflowError(_))));

        assert_eq!(
            Function::Sqrt.apply(-1.0).unwrap_err().to_string(),
            "DomainError: -1.0 is outside of the domain of sqrt"
        );
    }
}
