use std::fmt;
use std::sync::OnceLock;

use bitflags::bitflags;

use crate::error::Error;
use crate::operand::{Operand, Value};

bitflags! {
    /// Type tag of a token. Operators also use it as a qualifier mask: the
    /// set of previous-token types after which an overload applies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TokenType: u8 {
        /// Nothing was scanned yet at this nesting level.
        const EMPTY = 1;
        const OPERAND = 1 << 1;
        const OPERATOR = 1 << 2;
        const OPEN_PAREN = 1 << 3;
        const CLOSE_PAREN = 1 << 4;
    }
}

pub type Solver = fn(&[Operand]) -> Result<Operand, Error>;

/// An operator overload. Several may share a symbol, see [`Operator::lookup`].
pub struct Operator {
    symbol: char,
    precedence: u8,
    arity: usize,
    solver: Option<Solver>,
    qualifiers: TokenType,
}

const AFTER_VALUE: TokenType = TokenType::OPERAND.union(TokenType::CLOSE_PAREN);
const AFTER_NOTHING: TokenType = TokenType::EMPTY
    .union(TokenType::OPERATOR)
    .union(TokenType::OPEN_PAREN);

const fn overload(
    symbol: char,
    precedence: u8,
    arity: usize,
    solver: Option<Solver>,
    qualifiers: TokenType,
) -> Operator {
    Operator { symbol, precedence, arity, solver, qualifiers }
}

// Precedence tiers: binary +- in the 10s, multiplicative in the 20s, unary in
// the 30s. Within a tier the order is fixed so pops are deterministic.
static OPERATORS: [Operator; 7] = [
    overload('-', 11, 2, Some(subtract as Solver), AFTER_VALUE),
    overload('+', 12, 2, Some(add as Solver), AFTER_VALUE),
    overload('*', 21, 2, Some(multiply as Solver), TokenType::empty()),
    overload('%', 22, 2, Some(modulus as Solver), TokenType::empty()),
    overload('/', 23, 2, Some(divide as Solver), TokenType::empty()),
    // unary plus is recognized but never computes anything
    overload('+', 31, 1, None, AFTER_NOTHING),
    overload('-', 32, 1, Some(negate as Solver), AFTER_NOTHING),
];

impl Operator {
    /// Find the overload of `symbol` that applies after a token of type `prev`.
    ///
    /// An unqualified operator is the only overload for its symbol and always
    /// matches. Otherwise the overload whose qualifiers intersect `prev` wins.
    pub fn lookup(symbol: char, prev: TokenType) -> Option<&'static Operator> {
        let mut overloads = OPERATORS.iter().filter(|op| op.symbol == symbol).peekable();
        if overloads.peek()?.qualifiers.is_empty() {
            return overloads.next();
        }
        overloads.find(|op| op.qualifiers.intersects(prev))
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Inert operators are dropped by the converter and never evaluated.
    pub fn is_inert(&self) -> bool {
        self.solver.is_none()
    }

    pub fn solve(&self, operands: &[Operand]) -> Result<Operand, Error> {
        match self.solver {
            Some(solver) => solver(operands),
            None => Err(Error::UnexpectedToken(self.to_string())),
        }
    }
}

// fn pointers don't compare reliably, an overload is its symbol and arity
impl PartialEq for Operator {
    fn eq(&self, other: &Operator) -> bool {
        self.symbol == other.symbol && self.arity == other.arity
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("arity", &self.arity)
            .field("qualifiers", &self.qualifiers)
            .finish()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    pub fn from_symbol(symbol: char) -> Option<Paren> {
        match symbol {
            '(' => Some(Paren::Open),
            ')' => Some(Paren::Close),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Paren::Open => '(',
            Paren::Close => ')',
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every char that starts an operator or parenthesis token, generated from
/// the symbol table the first time it's needed.
pub fn symbol_chars() -> &'static str {
    static SYMBOLS: OnceLock<String> = OnceLock::new();
    SYMBOLS.get_or_init(|| {
        let mut symbols = String::new();
        let parens = [Paren::Open.symbol(), Paren::Close.symbol()];
        for c in OPERATORS.iter().map(|op| op.symbol).chain(parens) {
            if !symbols.contains(c) {
                symbols.push(c);
            }
        }
        symbols
    })
}

///////////////////////////////////////////////////////////////////////////////

fn unary(operands: &[Operand]) -> Result<Operand, Error> {
    match *operands {
        [operand] => Ok(operand),
        _ => Err(Error::OperandCount { expected: 1, received: operands.len() }),
    }
}

fn binary(operands: &[Operand]) -> Result<(Operand, Operand), Error> {
    match *operands {
        [lhs, rhs] => Ok((lhs, rhs)),
        _ => Err(Error::OperandCount { expected: 2, received: operands.len() }),
    }
}

// promote mixed pairs to float, then compute in the shared representation
fn arithmetic(
    operands: &[Operand],
    symbol: char,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Operand, Error> {
    let (lhs, rhs) = binary(operands)?;
    let (lhs, rhs) = Operand::reconcile(lhs, rhs);
    match (lhs.value(), rhs.value()) {
        (Value::Int(l), Value::Int(r)) => int_op(l, r)
            .map(Operand::int)
            .ok_or_else(|| Error::overflow(symbol)),
        (Value::Float(l), Value::Float(r)) => Ok(Operand::float(float_op(l, r))),
        _ => Err(Error::OperandTypeMismatch),
    }
}

fn add(operands: &[Operand]) -> Result<Operand, Error> {
    arithmetic(operands, '+', i64::checked_add, |l, r| l + r)
}

fn subtract(operands: &[Operand]) -> Result<Operand, Error> {
    arithmetic(operands, '-', i64::checked_sub, |l, r| l - r)
}

fn multiply(operands: &[Operand]) -> Result<Operand, Error> {
    arithmetic(operands, '*', i64::checked_mul, |l, r| l * r)
}

// true division: integers never truncate
fn divide(operands: &[Operand]) -> Result<Operand, Error> {
    let (lhs, rhs) = binary(operands)?;
    Ok(Operand::float(lhs.as_f64() / rhs.as_f64()))
}

fn modulus(operands: &[Operand]) -> Result<Operand, Error> {
    let (lhs, rhs) = binary(operands)?;
    match (lhs.value(), rhs.value()) {
        (Value::Int(_), Value::Int(0)) => Err(Error::InvalidOperand(format!("modulus by zero"))),
        (Value::Int(l), Value::Int(r)) => {
            l.checked_rem(r).map(Operand::int).ok_or_else(|| Error::overflow('%'))
        }
        _ => Err(Error::InvalidOperand(format!("cannot perform modulus operation with floats"))),
    }
}

fn negate(operands: &[Operand]) -> Result<Operand, Error> {
    match unary(operands)?.value() {
        Value::Int(i) => i.checked_neg().map(Operand::int).ok_or_else(|| Error::overflow('-')),
        Value::Float(x) => Ok(Operand::float(-x)),
    }
}
