// Tokenizer: raw expression text to a flat token sequence
use crate::compat::{fmt, String, Vec};
use crate::error::SyntaxError;
use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::FloorDivide,
        Operator::Modulo,
        Operator::Power,
    ];

    /// Position of the operator in [`Operator::ALL`], used to index
    /// operator-pair tables.
    pub fn index(self) -> usize {
        match self {
            Operator::Plus => 0,
            Operator::Minus => 1,
            Operator::Multiply => 2,
            Operator::Divide => 3,
            Operator::FloorDivide => 4,
            Operator::Modulo => 5,
            Operator::Power => 6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::FloorDivide => "//",
            Operator::Modulo => "%",
            Operator::Power => "**",
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(Number),
    Operator(Operator),
    Brace(Brace),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Operator(op) => write!(f, "{}", op.symbol()),
            TokenKind::Brace(Brace::Open) => write!(f, "("),
            TokenKind::Brace(Brace::Close) => write!(f, ")"),
        }
    }
}

// RUST CONCEPT: Token with its byte offset in the source expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_brace(&self, brace: Brace) -> bool {
        self.kind == TokenKind::Brace(brace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

// Turn a collected run of digits and at most one dot into a number.
// A bare "." has already been rejected by the caller.
fn parse_literal(digits: &str) -> Number {
    if digits.contains('.') {
        let mut text = String::with_capacity(digits.len() + 2);
        if digits.starts_with('.') {
            text.push('0');
        }
        text.push_str(digits);
        if digits.ends_with('.') {
            text.push('0');
        }
        // A run of ASCII digits around one dot is always a valid f64
        Number::Float(text.parse::<f64>().unwrap_or(f64::NAN))
    } else {
        match digits.parse::<i64>() {
            Ok(i) => Number::Integer(i),
            // Beyond i64: keep the magnitude as a float
            Err(_) => Number::Float(digits.parse::<f64>().unwrap_or(f64::INFINITY)),
        }
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        let kind = match ch {
            ' ' | '\t' => continue,

            '*' => {
                if chars.next_if(|&(_, c)| c == '*').is_some() {
                    TokenKind::Operator(Operator::Power)
                } else {
                    TokenKind::Operator(Operator::Multiply)
                }
            }
            '/' => {
                if chars.next_if(|&(_, c)| c == '/').is_some() {
                    TokenKind::Operator(Operator::FloorDivide)
                } else {
                    TokenKind::Operator(Operator::Divide)
                }
            }
            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '%' => TokenKind::Operator(Operator::Modulo),

            '(' => TokenKind::Brace(Brace::Open),
            ')' => TokenKind::Brace(Brace::Close),

            c if c.is_ascii_digit() || c == '.' => {
                let mut digits = String::new();
                digits.push(c);
                let mut dots = usize::from(c == '.');

                while let Some((_, next)) = chars.next_if(|&(_, n)| n.is_ascii_digit() || n == '.') {
                    if next == '.' {
                        dots += 1;
                        if dots > 1 {
                            return Err(SyntaxError::TooManyDots { offset });
                        }
                    }
                    digits.push(next);
                }

                if digits == "." {
                    return Err(SyntaxError::BadFormat);
                }
                TokenKind::Number(parse_literal(&digits))
            }

            found => return Err(SyntaxError::UnknownChar { found, offset }),
        };

        tokens.push(Token::new(kind, offset));
    }

    if tokens.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}
