//! Compile infix arithmetic into Reverse Polish Notation and evaluate it.
//!
//! ```
//! let rpn = rpn::compile("(1+2)*4-3").unwrap();
//! assert_eq!(rpn.to_string(), "12+4*3-");
//! assert_eq!(rpn.evaluate().unwrap().value(), rpn::Value::Int(9));
//! ```

pub use error::{Error, ErrorKind};
pub use operand::{Operand, Value};
pub use parser::{RPNExpr, ShuntingParser};
pub use symbols::{symbol_chars, Operator, Paren, TokenType};
pub use token::Token;
pub use tokenizer::{next_token, Tokenizer};

mod error;
mod operand;
mod symbols;
mod token;
mod tokenizer;

pub mod parser;

mod rpneval;
mod rpnprint;

/// The postfix sequence produced by [`compile`].
pub type Notation = RPNExpr;

pub fn compile(expr: &str) -> Result<RPNExpr, Error> {
    ShuntingParser::parse_str(expr)
}

pub fn eval_str(expr: &str) -> Result<Operand, Error> {
    compile(expr)?.evaluate()
}
