use crate::error::Error;
use crate::lexer::Lexer;
use crate::token::{Op, Token};
use crate::value::Value;
use crate::variables::Variables;

/// Maximal number of nested parenthesis in a statement
pub const MAX_NESTING: usize = 256;

/// Evaluating recursive-descent parser for a single statement.
///
/// Each grammar rule computes its value while it consumes tokens, no syntax
/// tree is built:
///
/// ```text
/// statement    := (IDENT '=')? logical_expr
/// logical_expr := expr (('<' | '<=' | '>' | '>=' | '==') expr)? EOF
/// expr         := term (('+' | '-') term)*
/// term         := func_factor (('*' | '/') func_factor)*
/// func_factor  := FUNCTION? factor
/// factor       := INT | FLOAT | IDENT | '(' expr ')'
/// ```
///
/// ```
/// use rafmat::{Interpreter, Value, Variables};
///
/// let mut variables = Variables::new();
/// let interpreter = Interpreter::new("(2 + 3) * 4", &mut variables).unwrap();
/// assert_eq!(interpreter.statement(), Ok(Some(Value::Int(20))));
/// ```
pub struct Interpreter<'a, 'v> {
    lexer: Lexer<'a>,
    current: Token,
    variables: &'v mut Variables,
    depth: usize,
}

impl<'a, 'v> Interpreter<'a, 'v> {
    /// Create an interpreter for `input`, reading and assigning variables in
    /// `variables`. This reads the first token, and fails if it is invalid.
    pub fn new(input: &'a str, variables: &'v mut Variables) -> Result<Self, Error> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Interpreter {
            lexer,
            current,
            variables,
            depth: 0,
        })
    }

    /// Evaluate the whole statement.
    ///
    /// Returns `Ok(None)` for an assignment, and `Ok(Some(value))` for any
    /// other statement. The variable table is only modified once the right
    /// hand side of an assignment was fully evaluated.
    pub fn statement(mut self) -> Result<Option<Value>, Error> {
        if let Token::Ident(ref name) = self.current {
            let name = name.clone();
            self.advance()?;
            if self.current == Token::Assign {
                self.advance()?;
                let value = self.logical_expr()?;
                self.variables.set(name, value);
                return Ok(None);
            }
            // not an assignment: scan the statement again from the start
            self.lexer.reset();
            self.current = self.lexer.next_token()?;
        }
        self.logical_expr().map(Some)
    }

    /// Move to the next token
    fn advance(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consume the current token if it is `expected`, or fail
    fn eat(&mut self, expected: &Token) -> Result<(), Error> {
        if self.current == *expected {
            self.advance()
        } else {
            Err(Error::ParseError(format!(
                "expected '{}' but found '{}'",
                expected, self.current
            )))
        }
    }

    fn logical_expr(&mut self) -> Result<Value, Error> {
        let left = self.expr()?;

        let result = if let Token::Cmp(cmp) = self.current {
            self.advance()?;
            let right = self.expr()?;
            left.compare(cmp, right)?
        } else {
            left
        };

        if self.current != Token::Eof {
            return Err(Error::ParseError(format!(
                "unexpected '{}' after the end of the statement",
                self.current
            )));
        }
        Ok(result)
    }

    fn expr(&mut self) -> Result<Value, Error> {
        let mut result = self.term()?;
        while let Token::Op(op @ (Op::Plus | Op::Minus)) = self.current {
            self.advance()?;
            result = result.apply(op, self.term()?)?;
        }
        Ok(result)
    }

    fn term(&mut self) -> Result<Value, Error> {
        let mut result = self.func_factor()?;
        while let Token::Op(op @ (Op::Mul | Op::Div)) = self.current {
            self.advance()?;
            result = result.apply(op, self.func_factor()?)?;
        }
        Ok(result)
    }

    /// A function applies to the factor right after it only: `sin(x) + 1`
    /// is `(sin(x)) + 1`.
    fn func_factor(&mut self) -> Result<Value, Error> {
        if let Token::Function(function) = self.current {
            self.advance()?;
            let argument = self.factor()?.as_f64()?;
            return function.apply(argument).map(Value::Float);
        }
        self.factor()
    }

    fn factor(&mut self) -> Result<Value, Error> {
        let value = match self.current {
            Token::Int(value) => Value::Int(value),
            Token::Float(value) => Value::Float(value),
            Token::Ident(ref name) => self.variables.get(name)?,
            Token::LParen => {
                if self.depth == MAX_NESTING {
                    return Err(Error::ParseError(
                        "expression is nested too deeply".into(),
                    ));
                }
                self.depth += 1;
                self.advance()?;
                let value = self.expr()?;
                self.eat(&Token::RParen)?;
                self.depth -= 1;
                return Ok(value);
            }
            ref other => {
                return Err(Error::ParseError(format!(
                    "expected a number, a variable or '(' but found '{}'",
                    other
                )));
            }
        };
        self.advance()?;
        Ok(value)
    }
}
