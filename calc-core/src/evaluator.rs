//! Recursive-descent evaluator
//!
//! Walks a validated token slice once and computes the value directly; no
//! syntax tree is built. Each precedence layer calls the next tighter one
//! for its operands:
//!
//! ```text
//! expr     := sum
//! sum      := product (('+' | '-') product)*
//! product  := power (('*' | '/' | '//' | '%' | '**') power)*
//! power    := unary ('**' power)?
//! unary    := ('+' | '-') power | primary
//! primary  := NUMBER | '(' expr ')'
//! ```
//!
//! `power` recurses into itself on the right, so `**` is right-associative,
//! and `unary` applies its sign to a whole `power`, so `-2**2` is `-(2**2)`.

use crate::error::{EvalError, SyntaxError};
use crate::number::Number;
use crate::ops;
use crate::settings::Settings;
use crate::tokenizer::{Brace, Operator, Token, TokenKind};

/// Deepest chain of nested `power` calls accepted before giving up.
pub const MAX_DEPTH: usize = 200;

// RUST CONCEPT: Call-local parser state
// The cursor and the token slice belong to one Evaluator, and an Evaluator
// lives for exactly one evaluation. Nothing is left behind on failure.
pub struct Evaluator<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    settings: &'a Settings,
}

impl<'a> Evaluator<'a> {
    pub fn new(tokens: &'a [Token], settings: &'a Settings) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            settings,
        }
    }

    /// Evaluate the whole slice. Tokens left over after the top-level
    /// expression (as in `2)+(3`) are a format error.
    pub fn evaluate(mut self) -> Result<Number, EvalError> {
        let value = self.expr()?;
        if self.position < self.tokens.len() {
            return Err(SyntaxError::BadFormat.into());
        }
        Ok(value)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn peek_operator(&self) -> Option<Operator> {
        self.peek().and_then(Token::operator)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn apply(&self, op: Operator, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
        let result = ops::binary(op, lhs, rhs, self.settings)?;
        log::trace!("{} {} {} = {}", lhs, op.symbol(), rhs, result);
        Ok(result)
    }

    fn expr(&mut self) -> Result<Number, EvalError> {
        self.sum()
    }

    fn sum(&mut self) -> Result<Number, EvalError> {
        let mut result = self.product()?;
        while let Some(op) = self.peek_operator().filter(|op| op.is_additive()) {
            self.advance();
            let rhs = self.product()?;
            result = self.apply(op, result, rhs)?;
        }
        Ok(result)
    }

    fn product(&mut self) -> Result<Number, EvalError> {
        let mut result = self.power()?;
        while let Some(op) = self.peek_operator().filter(|op| !op.is_additive()) {
            self.advance();
            let rhs = self.power()?;
            result = self.apply(op, result, rhs)?;
        }
        Ok(result)
    }

    // Every recursive path (parentheses, signs, `**`) passes through here,
    // so this is the one place the nesting depth is bounded.
    fn power(&mut self) -> Result<Number, EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SyntaxError::TooDeep.into());
        }
        let result = self.power_chain();
        self.depth -= 1;
        result
    }

    fn power_chain(&mut self) -> Result<Number, EvalError> {
        let base = self.unary()?;
        if self.peek_operator() == Some(Operator::Power) {
            self.advance();
            let exponent = self.power()?;
            return self.apply(Operator::Power, base, exponent);
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<Number, EvalError> {
        if let Some(sign) = self.peek_operator().filter(|op| op.is_additive()) {
            self.advance();
            let operand = self.power()?;
            return Ok(ops::unary(sign, operand));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Number, EvalError> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Number(n)) => {
                self.advance();
                Ok(n)
            }
            Some(TokenKind::Brace(Brace::Open)) => {
                self.advance();
                let inner = self.expr()?;
                match self.peek() {
                    Some(token) if token.is_brace(Brace::Close) => {
                        self.advance();
                        Ok(inner)
                    }
                    _ => Err(SyntaxError::BracesMismatch.into()),
                }
            }
            _ => Err(SyntaxError::BadFormat.into()),
        }
    }
}
