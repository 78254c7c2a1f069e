//! Structural checks on a token sequence before it is evaluated
//!
//! The grammar alone would accept some inputs that are almost certainly
//! typos (`6 7`, `(1)(2)`, `2+*3`). These are rejected here. Sign chains
//! such as `2*-+-3` stay legal but are reported as an [`Advisory`].

use crate::compat::{fmt, Vec};
use crate::error::SyntaxError;
use crate::tokenizer::{Brace, Operator, Token};

/// A non-fatal diagnostic handed back alongside a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Operators follow each other directly, e.g. `3--4`. `offset` is the
    /// position of the first such pair.
    MultipleOperatorsInRow { offset: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MultipleOperatorsInRow { .. } => write!(f, "A few operators in a row"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairRule {
    Reject,
    Advise,
}

use PairRule::{Advise, Reject};

// Left operator selects the row, right operator the column, both in
// Operator::ALL order: + - * / // % **
const OPERATOR_PAIRS: [[PairRule; 7]; 7] = [
    /* +  */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* -  */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* *  */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* /  */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* // */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* %  */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
    /* ** */ [Advise, Advise, Reject, Reject, Reject, Reject, Reject],
];

fn pair_rule(left: Operator, right: Operator) -> PairRule {
    OPERATOR_PAIRS[left.index()][right.index()]
}

// Two value-like tokens that would need an operator between them
fn missing_operator(left: &Token, right: &Token) -> bool {
    (left.is_number() && right.is_number())
        || (left.is_brace(Brace::Close) && right.is_brace(Brace::Open))
        || (left.is_number() && right.is_brace(Brace::Open))
        || (left.is_brace(Brace::Close) && right.is_number())
}

/// Check adjacent token pairs.
///
/// Returns the advisories to surface once evaluation succeeds. At most one
/// advisory of each kind is produced per sequence.
pub fn validate(tokens: &[Token]) -> Result<Vec<Advisory>, SyntaxError> {
    let mut advisories = Vec::new();

    for pair in tokens.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);

        if missing_operator(left, right) {
            return Err(SyntaxError::NoOperatorBetween);
        }

        if let (Some(l), Some(r)) = (left.operator(), right.operator()) {
            match pair_rule(l, r) {
                Reject => return Err(SyntaxError::MultipleOperatorsInRow),
                Advise if advisories.is_empty() => {
                    advisories.push(Advisory::MultipleOperatorsInRow {
                        offset: left.offset,
                    });
                }
                Advise => {}
            }
        }
    }

    Ok(advisories)
}

/// Require as many closing braces as opening ones.
pub fn check_braces(tokens: &[Token]) -> Result<(), SyntaxError> {
    let opened = tokens.iter().filter(|t| t.is_brace(Brace::Open)).count();
    let closed = tokens.iter().filter(|t| t.is_brace(Brace::Close)).count();
    if opened == closed {
        Ok(())
    } else {
        Err(SyntaxError::BracesMismatch)
    }
}
