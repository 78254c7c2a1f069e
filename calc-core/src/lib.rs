//! # Calc Core
//!
//! Arithmetic expression evaluator: a tokenizer, a structural validator and
//! a recursive-descent evaluator that computes the value in a single pass.
//!
//! ## Features
//!
//! - **Operators**: `+ - * / // % **`, unary `+`/`-`, parentheses
//! - **Numeric tower**: `i64` integers, `f64` floats, and `Complex64` when a
//!   real operation has no real result (`(-1)**0.5`)
//! - **Advisories**: tolerated sign chains such as `3--4` evaluate normally
//!   and are reported next to the result
//! - **no_std**: builds against `alloc` on `target_os = "none"`
//!
//! ## Example
//!
//! ```
//! use calc_core::{evaluate, Calculator, Number};
//!
//! assert_eq!(evaluate("2**3**2").unwrap(), Number::Integer(512));
//!
//! let calc = Calculator::new();
//! let evaluation = calc.evaluate_with_advisories("2*-+-(3--4)").unwrap();
//! assert_eq!(evaluation.value, 14);
//! assert_eq!(evaluation.advisories.len(), 1);
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod calculator;
pub mod error;
pub mod evaluator;
pub mod number;
pub mod ops;
pub mod settings;
pub mod tokenizer;
pub mod validator;

// Internal module
mod compat;

// Re-exports for convenience
pub use calculator::{evaluate, Calculator, Evaluation};
pub use error::{ArithmeticError, EvalError, IntegerOp, SyntaxError};
pub use number::Number;
pub use settings::Settings;
pub use validator::Advisory;
