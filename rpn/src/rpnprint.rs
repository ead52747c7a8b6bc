use std::fmt;

use crate::error::Error;
use crate::parser::{RPNExpr, MAX_DEPTH};
use crate::symbols::Operator;
use crate::token::Token;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a Token),
    Node(&'static Operator, Vec<AST<'a>>),
}

// leaves never need parentheses
const LEAF_PRECEDENCE: u8 = u8::MAX;

impl RPNExpr {
    /// Flat rendering: each token's text concatenated, no spaces.
    pub fn render(&self) -> String {
        self.to_string()
    }

    // Each entry carries the height of its subtree so the recursive printer
    // never sees a tree deeper than MAX_DEPTH.
    fn build_ast(&self) -> Result<AST<'_>, Error> {
        let mut ops: Vec<(AST<'_>, usize)> = Vec::new();
        for token in self.iter() {
            match *token {
                Token::Operand(_) => ops.push((AST::Leaf(token), 0)),
                Token::Operator(op) if op.is_inert() => {
                    return Err(Error::UnexpectedToken(op.to_string()))
                }
                Token::Operator(op) => {
                    if op.arity() > ops.len() {
                        return Err(Error::InsufficientOperands {
                            needed: op.arity(),
                            found: ops.len(),
                        });
                    }
                    let n = ops.len() - op.arity();
                    let (operands, heights): (Vec<_>, Vec<_>) =
                        ops.split_off(n).into_iter().unzip();
                    let height = heights.into_iter().max().unwrap_or(0) + 1;
                    if height > MAX_DEPTH {
                        return Err(Error::TooDeep(MAX_DEPTH));
                    }
                    ops.push((AST::Node(op, operands), height));
                }
                Token::Paren(paren) => return Err(Error::UnexpectedToken(paren.to_string())),
            }
        }
        match ops.len() {
            1 => ops.pop().map(|(ast, _)| ast).ok_or(Error::UnconsumedOperands(0)),
            n => Err(Error::UnconsumedOperands(n)),
        }
    }

    /// Print the expression back in infix form with only the parentheses
    /// the precedence table needs. Compiling the result yields this same RPN.
    pub fn to_infix(&self) -> Result<String, Error> {
        fn printer(root: &AST) -> Result<(String, u8), Error> {
            let node = match root {
                AST::Leaf(Token::Operand(x)) => (format!("{}", x.value()), LEAF_PRECEDENCE),
                AST::Leaf(token) => (format!("{}", token), LEAF_PRECEDENCE),
                AST::Node(op, args) => match &args[..] {
                    [arg] => {
                        let subtree = printer(arg)?;
                        // only other unary operators are tight enough to skip parens
                        if op.precedence() > subtree.1 {
                            (format!("{}({})", op, subtree.0), op.precedence())
                        } else {
                            (format!("{}{}", op, subtree.0), op.precedence())
                        }
                    }
                    [lhs, rhs] => {
                        let (lhs, rhs) = (printer(lhs)?, printer(rhs)?);
                        let prec = op.precedence();
                        // an operator pops everything tighter than itself and
                        // keeps anything equal or looser stacked to its right
                        let lh = if prec >= lhs.1 {
                            format!("({})", lhs.0)
                        } else {
                            lhs.0
                        };
                        let rh = if prec > rhs.1 {
                            format!("({})", rhs.0)
                        } else {
                            rhs.0
                        };
                        (format!("{} {} {}", lh, op, rh), prec)
                    }
                    _ => {
                        return Err(Error::OperandCount {
                            expected: op.arity(),
                            received: args.len(),
                        })
                    }
                },
            };
            Ok(node)
        }

        Ok(printer(&self.build_ast()?)?.0)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.iter() {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
