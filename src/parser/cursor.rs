//! Token cursor
//!
//! Forward-only stream over the token list, owned by the top-level parse and
//! lent by `&mut` to the block parsers.

use crate::error::{ConfigError, SyntaxError};
use crate::parser::primitives::strip_terminator;
use crate::parser::tokenizer::Token;

pub struct TokenCursor<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
}

impl<'t, 'src> TokenCursor<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Current token without consuming it
    pub fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Token `n` positions ahead of the current one
    pub fn peek_nth(&self, n: usize) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos + n)
    }

    /// Text of the current token
    pub fn peek_text(&self) -> Option<&'src str> {
        self.peek().map(|t| t.text)
    }

    pub fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if its text is exactly `text`
    pub fn expect(
        &mut self,
        text: &str,
        error: SyntaxError,
    ) -> Result<&'t Token<'src>, ConfigError> {
        match self.peek() {
            Some(token) if token.text == text => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(ConfigError::syntax(error, self.line())),
        }
    }

    /// Consume the value of a single-value directive.
    ///
    /// The next token must carry the `;` terminator, which is stripped.
    /// Returns the value and its line.
    pub fn take_value(
        &mut self,
        directive: &'static str,
    ) -> Result<(&'src str, usize), ConfigError> {
        let line = self.line();
        let value = self
            .peek()
            .and_then(|token| strip_terminator(token.text))
            .ok_or_else(|| ConfigError::syntax(SyntaxError::ExpectedValue(directive), line))?;
        self.pos += 1;
        Ok((value, line))
    }

    /// Line of the current token, or of the last token once exhausted
    pub fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }
}
