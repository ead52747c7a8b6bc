use log::{debug, trace};

use crate::error::Error;
use crate::operand::Operand;
use crate::parser::RPNExpr;
use crate::token::Token;

impl RPNExpr {
    pub fn evaluate(&self) -> Result<Operand, Error> {
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                Token::Operand(operand) => operands.push(operand),
                Token::Operator(op) => {
                    if op.arity() > operands.len() {
                        return Err(Error::InsufficientOperands {
                            needed: op.arity(),
                            found: operands.len(),
                        });
                    }
                    let cut = operands.len() - op.arity();
                    let args = operands.split_off(cut);
                    let result = op.solve(&args)?;
                    trace!("{} {:?} = {}", op, args, result);
                    operands.push(result);
                }
                Token::Paren(paren) => return Err(Error::UnexpectedToken(paren.to_string())),
            }
        }
        match operands[..] {
            [result] => {
                debug!("{} = {}", self, result.value());
                Ok(result)
            }
            _ => Err(Error::UnconsumedOperands(operands.len())),
        }
    }
}
