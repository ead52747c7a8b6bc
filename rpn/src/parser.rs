use std::ops::Deref;

use log::{debug, trace};

use crate::error::Error;
use crate::symbols::{Operator, Paren, TokenType};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// Deepest parenthesis nesting the converter accepts, and the deepest
/// operator tree `to_infix` will print.
pub const MAX_DEPTH: usize = 256;

/// A compiled expression: tokens in postfix order, without parentheses.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(Vec<Token>);

impl RPNExpr {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

// hand-built notations, the evaluator doesn't trust them
impl From<Vec<Token>> for RPNExpr {
    fn from(tokens: Vec<Token>) -> RPNExpr {
        RPNExpr(tokens)
    }
}

impl<'a> IntoIterator for &'a RPNExpr {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, Error> {
        let rpn = Self::parse(&mut Tokenizer::new(expr))?;
        debug!("compiled {:?} into {}", expr, rpn);
        Ok(rpn)
    }

    pub fn parse(lex: &mut Tokenizer) -> Result<RPNExpr, Error> {
        let mut out = Vec::new();
        if Self::parse_group(lex, &mut out, 0)? {
            return Err(Error::UnmatchedParen);
        }
        Ok(RPNExpr(out))
    }

    // Convert tokens into 'out' until the input runs out or a close paren
    // ends the current nesting level. Returns whether a close paren was hit.
    fn parse_group(
        lex: &mut Tokenizer,
        out: &mut Vec<Token>,
        depth: usize,
    ) -> Result<bool, Error> {
        if depth > MAX_DEPTH {
            return Err(Error::TooDeep(MAX_DEPTH));
        }
        let mut stack: Vec<&'static Operator> = Vec::new();
        lex.set_prev(TokenType::EMPTY);

        let closed = loop {
            let token = match lex.next_token()? {
                Some(token) => token,
                None => break false,
            };
            match token {
                Token::Operand(_) => out.push(token),
                Token::Operator(op) if op.is_inert() => trace!("dropping inert {}", op),
                Token::Operator(op) => {
                    // equal precedence stays on the stack
                    while let Some(&top) = stack.last() {
                        if top.precedence() <= op.precedence() {
                            break;
                        }
                        out.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push(op);
                }
                Token::Paren(Paren::Open) => {
                    if !Self::parse_group(lex, out, depth + 1)? {
                        return Err(Error::UnclosedParen);
                    }
                    // the whole group acts as an operand from here on
                    lex.set_prev(TokenType::OPERAND);
                }
                Token::Paren(Paren::Close) => break true,
            }
        };
        while let Some(top) = stack.pop() {
            out.push(Token::Operator(top));
        }
        Ok(closed)
    }
}
