use std::fmt;

use crate::operand::Operand;
use crate::symbols::{Operator, Paren, TokenType};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Operand(Operand),
    Operator(&'static Operator),
    Paren(Paren),
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        match *self {
            Token::Operand(_) => TokenType::OPERAND,
            Token::Operator(_) => TokenType::OPERATOR,
            Token::Paren(Paren::Open) => TokenType::OPEN_PAREN,
            Token::Paren(Paren::Close) => TokenType::CLOSE_PAREN,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Operand(ref operand) => write!(f, "{}", operand),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Paren(ref paren) => write!(f, "{}", paren),
        }
    }
}
