use std::fmt;

use crate::error::Error;

/// The numeric payload of an [`Operand`]: exactly one representation is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    // floats keep a fractional part so "2.0" and "2" stay distinguishable,
    // and never switch to exponent form so the text scans back as a literal
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{}.0", x),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

/// An immutable number flowing through the notation and the evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operand(Value);

impl Operand {
    pub fn int(i: i64) -> Operand {
        Operand(Value::Int(i))
    }

    pub fn float(x: f64) -> Operand {
        Operand(Value::Float(x))
    }

    pub fn value(&self) -> Value {
        self.0
    }

    pub fn is_float(&self) -> bool {
        matches!(self.0, Value::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match self.0 {
            Value::Int(i) => i as f64,
            Value::Float(x) => x,
        }
    }

    /// Parse a numeric literal as scanned by the tokenizer.
    ///
    /// A literal with a `.` that isn't its last char is a float, everything
    /// else must fit an `i64`. A trailing dot (`"3."`) is therefore rejected.
    pub fn from_literal(literal: &str) -> Result<Operand, Error> {
        if literal.contains('.') && !literal.ends_with('.') {
            literal
                .parse::<f64>()
                .map(Operand::float)
                .map_err(|_| Error::cannot_parse(literal))
        } else {
            literal
                .parse::<i64>()
                .map(Operand::int)
                .map_err(|_| Error::cannot_parse(literal))
        }
    }

    pub fn to_float(self) -> Operand {
        Operand::float(self.as_f64())
    }

    /// Bring a pair of operands to a common representation: if only one of
    /// them is a float the other one is promoted.
    pub fn reconcile(lhs: Operand, rhs: Operand) -> (Operand, Operand) {
        match (lhs.is_float(), rhs.is_float()) {
            (true, false) => (lhs, rhs.to_float()),
            (false, true) => (lhs.to_float(), rhs),
            _ => (lhs, rhs),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}
