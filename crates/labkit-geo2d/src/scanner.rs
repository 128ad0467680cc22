//! Whitespace-separated number input for [`Figure::read_from`](crate::Figure::read_from).

use std::str::SplitWhitespace;

use crate::error::GeoError;

/// Reads numbers one token at a time from a text buffer.
///
/// Several figures can be read in sequence from the same scanner; each
/// consumes only the tokens it needs.
pub struct Scanner<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    /// Scan `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    /// Parse the next token as `f64`. `expected` names the value in errors.
    pub fn next_f64(&mut self, expected: &'static str) -> Result<f64, GeoError> {
        let token = self
            .tokens
            .next()
            .ok_or(GeoError::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| GeoError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }

    /// Parse the next two tokens as an `(x, y)` pair.
    pub fn next_coordinates(&mut self) -> Result<(f64, f64), GeoError> {
        let x = self.next_f64("x coordinate")?;
        let y = self.next_f64("y coordinate")?;
        Ok((x, y))
    }

    /// Whether every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.tokens.clone().next().is_none()
    }
}
