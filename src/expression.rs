//! Safe checking and evaluation of submitted expressions.
//!
//! A submission passes through four gates, and the first failing gate
//! decides the outcome:
//!
//! 1. the digit runs in the text are read as numbers, and at least four are
//!    required;
//! 2. those numbers must equal the round's card numbers as a multiset;
//! 3. the whole text may contain only digits, `+ - * / ( )` and whitespace;
//! 4. the text is parsed with the usual precedence and evaluated in `f64`.
//!
//! Division by zero is not an error: it yields an infinite or NaN value,
//! which never equals 24.

use core::iter::Peekable;
use core::str::CharIndices;

use crate::error::ExpressionError;
use crate::round::{ROUND_SIZE, Round};

/// Deepest nesting of parentheses and unary signs the parser follows.
const MAX_NESTING: usize = 128;

/// Longest digit run accepted as a card number.
const MAX_DIGITS: usize = 2;

/// Checks `submission` against `round` and evaluates it.
///
/// Returns the computed value when the submission uses each card number
/// exactly once and is well-formed arithmetic. The caller compares the value
/// with 24.
///
/// # Errors
///
/// Returns an [`ExpressionError`] naming the first gate the submission failed.
///
/// # Example
///
/// ```
/// use twentyfour::{Card, Round, Suit, evaluate};
///
/// let round = Round::new([
///     Card::new(Suit::Hearts, 3),
///     Card::new(Suit::Hearts, 5),
///     Card::new(Suit::Hearts, 7),
///     Card::new(Suit::Hearts, 4),
/// ]);
/// assert_eq!(evaluate("(3 + 5) * (7 - 4)", &round), Ok(24.0));
/// ```
pub fn evaluate(submission: &str, round: &Round) -> Result<f64, ExpressionError> {
    let numbers = extract_numbers(submission)?;

    let mut expected = round.numbers();
    let mut found = numbers;
    expected.sort_unstable();
    found.sort_unstable();
    if expected != found {
        return Err(ExpressionError::NumberMismatch);
    }

    if let Some(c) = submission.chars().find(|&c| !is_allowed(c)) {
        return Err(ExpressionError::ForbiddenCharacter(c));
    }

    Parser::new(submission).parse()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Reads the digit runs of `text` in order of appearance.
///
/// Anything between runs is skipped here; the character gate checks it later.
fn extract_numbers(text: &str) -> Result<[u8; ROUND_SIZE], ExpressionError> {
    let mut numbers = [0u8; ROUND_SIZE];
    let mut count = 0;
    let mut run_len = 0;
    let mut value = 0u8;

    // A trailing space terminates a run that ends the text.
    for c in text.chars().chain(core::iter::once(' ')) {
        if let Some(digit) = c.to_digit(10) {
            run_len += 1;
            if run_len > MAX_DIGITS {
                return Err(ExpressionError::NumberTooLong);
            }
            value = value * 10 + digit as u8;
            continue;
        }
        if run_len > 0 {
            if count == ROUND_SIZE {
                return Err(ExpressionError::NumberMismatch);
            }
            numbers[count] = value;
            count += 1;
            run_len = 0;
            value = 0;
        }
    }

    if count < ROUND_SIZE {
        return Err(ExpressionError::TooFewNumbers { found: count });
    }
    Ok(numbers)
}

/// Recursive-descent evaluator for
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := ('+' | '-') factor | number | '(' expr ')'
/// ```
struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    len: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            len: text.len(),
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<f64, ExpressionError> {
        let value = self.expr()?;
        match self.peek() {
            None => Ok(value),
            Some((position, _)) => Err(ExpressionError::Malformed { position }),
        }
    }

    /// Skips whitespace and returns the next token without consuming it.
    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
        self.chars.peek().copied()
    }

    fn expr(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some((_, '+')) => {
                    self.chars.next();
                    value += self.term()?;
                }
                Some((_, '-')) => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some((_, '*')) => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                Some((_, '/')) => {
                    self.chars.next();
                    value /= self.factor()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, ExpressionError> {
        let Some((position, c)) = self.peek() else {
            return Err(ExpressionError::Malformed { position: self.len });
        };

        match c {
            '-' | '+' | '(' => {
                self.chars.next();
                self.depth += 1;
                if self.depth > MAX_NESTING {
                    return Err(ExpressionError::NestingTooDeep);
                }
                let value = match c {
                    '-' => -self.factor()?,
                    '+' => self.factor()?,
                    _ => {
                        let inner = self.expr()?;
                        match self.peek() {
                            Some((_, ')')) => {
                                self.chars.next();
                            }
                            Some((position, _)) => {
                                return Err(ExpressionError::Malformed { position });
                            }
                            None => {
                                return Err(ExpressionError::Malformed { position: self.len });
                            }
                        }
                        inner
                    }
                };
                self.depth -= 1;
                Ok(value)
            }
            _ if c.is_ascii_digit() => Ok(self.number()),
            _ => Err(ExpressionError::Malformed { position }),
        }
    }

    fn number(&mut self) -> f64 {
        let mut value = 0.0;
        while let Some(digit) = self.chars.peek().and_then(|&(_, c)| c.to_digit(10)) {
            self.chars.next();
            value = value * 10.0 + f64::from(digit);
        }
        value
    }
}
