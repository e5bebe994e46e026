use crate::error::Error;
use crate::function::Function;
use crate::token::{Cmp, Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Turns a statement into tokens, one token per call to
/// [`next_token`](#method.next_token).
///
/// ```
/// use rafmat::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 3");
/// assert_eq!(lexer.next_token(), Ok(Token::Ident("x".into())));
/// assert_eq!(lexer.next_token(), Ok(Token::Assign));
/// assert_eq!(lexer.next_token(), Ok(Token::Int(3)));
/// assert_eq!(lexer.next_token(), Ok(Token::Eof));
/// ```
pub struct Lexer<'a> {
    source: &'a str,
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `source`
    #[must_use]
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            input: source.chars().peekable(),
        }
    }

    /// Move back to the start of the input. The next token will be the first
    /// token of the statement again.
    pub fn reset(&mut self) {
        self.input = self.source.chars().peekable();
    }

    /// Produce the next token. Once the input is exhausted, this returns
    /// `Token::Eof` on every call.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while self.input.peek().map_or(false, |c| c.is_whitespace()) {
            self.input.next();
        }

        let c = match self.input.peek() {
            Some(&c) => c,
            None => return Ok(Token::Eof),
        };

        if is_number_part(c) {
            return self.number();
        }
        if c.is_alphabetic() {
            return self.word();
        }

        self.input.next();
        let token = match c {
            '=' => self.with_equal(Token::Cmp(Cmp::Equal), Token::Assign),
            '<' => self.with_equal(Token::Cmp(Cmp::LessEqual), Token::Cmp(Cmp::Less)),
            '>' => self.with_equal(Token::Cmp(Cmp::GreaterEqual), Token::Cmp(Cmp::Greater)),
            '+' => Token::Op(Op::Plus),
            '-' => Token::Op(Op::Minus),
            '*' => Token::Op(Op::Mul),
            '/' => Token::Op(Op::Div),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(Error::LexError(format!(
                    "unexpected character in input: {}",
                    other
                )));
            }
        };
        Ok(token)
    }

    /// Pick `double` if the next character is `=` (consuming it), and `single`
    /// otherwise.
    fn with_equal(&mut self, double: Token, single: Token) -> Token {
        if self.input.next_if_eq(&'=').is_some() {
            double
        } else {
            single
        }
    }

    /// Scan an integer or a float
    fn number(&mut self) -> Result<Token, Error> {
        let mut literal = String::new();
        while let Some(c) = self.input.next_if(|&c| is_number_part(c)) {
            literal.push(c);
        }

        match literal.matches('.').count() {
            0 => literal.parse::<i64>().map(Token::Int).map_err(|_| {
                Error::LexError(format!("integer literal is too large: {}", literal))
            }),
            1 => literal
                .parse::<f64>()
                .map(Token::Float)
                .map_err(|_| Error::LexError(format!("invalid number: {}", literal))),
            _ => Err(Error::LexError(format!(
                "multiple decimal points in number: {}",
                literal
            ))),
        }
    }

    /// Scan a variable name, or a function name when followed by `(`
    fn word(&mut self) -> Result<Token, Error> {
        let mut word = String::new();
        while let Some(c) = self.input.next_if(|c| c.is_alphabetic()) {
            word.push(c);
        }

        if self.input.peek() == Some(&'(') {
            Function::from_name(&word)
                .map(Token::Function)
                .ok_or_else(|| Error::LexError(format!("unknown function: {}", word)))
        } else {
            Ok(Token::Ident(word))
        }
    }
}

/// Check if `c` can appear in a number
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}
