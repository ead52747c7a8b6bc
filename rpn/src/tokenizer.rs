use lexers::{scan_number, scan_symbol, Scanner};
use log::trace;

use crate::error::Error;
use crate::operand::Operand;
use crate::symbols::{symbol_chars, Operator, Paren, TokenType};
use crate::token::Token;

/// Pull-based tokenizer. Which overload of `+`/`-` a symbol resolves to
/// depends on the type of the previously emitted token.
pub struct Tokenizer<'a> {
    input: &'a str,
    src: Scanner<'a>,
    prev: TokenType,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_context(input, TokenType::EMPTY)
    }

    pub fn with_context(input: &'a str, prev: TokenType) -> Self {
        Tokenizer { input, src: Scanner::new(input), prev, failed: false }
    }

    pub fn prev(&self) -> TokenType {
        self.prev
    }

    // the converter resets the context when entering and leaving a group
    pub fn set_prev(&mut self, prev: TokenType) {
        self.prev = prev;
    }

    pub fn rest(&self) -> &'a str {
        self.src.rest()
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.src.ignore_ws(); // discard whatever came before + and spaces
        if self.src.at_end() {
            return Ok(None);
        }
        let token = self.get_token()?;
        trace!("token {} after {:?}", token, self.prev);
        self.prev = token.token_type();
        Ok(Some(token))
    }

    fn get_token(&mut self) -> Result<Token, Error> {
        let offset = self.src.offset();
        if let Some(symbol) = scan_symbol(&mut self.src, symbol_chars()) {
            if let Some(op) = Operator::lookup(symbol, self.prev) {
                return Ok(Token::Operator(op));
            }
            if let Some(paren) = Paren::from_symbol(symbol) {
                return Ok(Token::Paren(paren));
            }
        } else if let Some(literal) = scan_number(&mut self.src) {
            return Operand::from_literal(literal).map(Token::Operand);
        }
        Err(Error::InvalidSyntax { offset, rest: self.input[offset..].to_string() })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, Error>;
    // a failed scan consumes nothing, so iteration stops at the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.next_token().transpose();
        self.failed = matches!(token, Some(Err(_)));
        token
    }
}

/// Scan a single token off `input` given the type of the token before it.
/// Returns the token and the input left after it, or `None` at the end.
pub fn next_token(input: &str, prev: TokenType) -> Result<Option<(Token, &str)>, Error> {
    let mut lex = Tokenizer::with_context(input, prev);
    Ok(lex.next_token()?.map(|token| (token, lex.rest())))
}
