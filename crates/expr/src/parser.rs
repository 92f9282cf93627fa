//! Recursive-descent parser for the guard expression grammar:
//!
//! ```text
//! Or      := And ( '||' And )*
//! And     := Not ( '&&' Not )*
//! Not     := '!' Not | Cmp
//! Cmp     := Primary ( ('=='|'!='|'<'|'<='|'>'|'>=') Primary )?
//! Primary := '(' Or ')' | BOOL | NUMBER | STRING | IDENT
//! ```
//!
//! `&&`/`||` are left-associative, `!` is right-associative, and `Cmp` is
//! non-associative: a chain contains at most one comparison operator.

use crate::ast::{CmpOp, Expr, Leaf};
use crate::error::{ExprError, ExprResult};
use crate::lexer::{lex, Op, Token, TokenKind};

/// Parse a full expression from source, failing on trailing input.
pub fn parse(src: &str) -> ExprResult<Expr> {
    let tokens = lex(src)?;
    let mut parser = Parser { tokens, idx: 0 };
    let expr = parser.parse_or()?;
    parser.expect_end()?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    idx: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.idx]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.idx].clone();
        if self.idx + 1 < self.tokens.len() {
            self.idx += 1;
        }
        tok
    }

    fn expect_end(&self) -> ExprResult<()> {
        match &self.peek().kind {
            TokenKind::End => Ok(()),
            other => Err(ExprError::Parse {
                pos: self.peek().pos,
                message: format!("trailing input after expression: {other:?}"),
            }),
        }
    }

    fn parse_or(&mut self) -> ExprResult<Expr> {
        let mut left = self.parse_and()?;
        while matches!(self.peek().kind, TokenKind::Op(Op::OrOr)) {
            self.advance();
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ExprResult<Expr> {
        let mut left = self.parse_not()?;
        while matches!(self.peek().kind, TokenKind::Op(Op::AndAnd)) {
            self.advance();
            let right = self.parse_not()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> ExprResult<Expr> {
        if matches!(self.peek().kind, TokenKind::Op(Op::Not)) {
            self.advance();
            let inner = self.parse_not()?;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.parse_cmp()
    }

    fn parse_cmp(&mut self) -> ExprResult<Expr> {
        let left = self.parse_primary()?;
        let op = match self.peek().kind {
            TokenKind::Op(Op::EqEq) => Some(CmpOp::Eq),
            TokenKind::Op(Op::NotEq) => Some(CmpOp::Ne),
            TokenKind::Op(Op::Lt) => Some(CmpOp::Lt),
            TokenKind::Op(Op::Le) => Some(CmpOp::Le),
            TokenKind::Op(Op::Gt) => Some(CmpOp::Gt),
            TokenKind::Op(Op::Ge) => Some(CmpOp::Ge),
            _ => None,
        };
        let Some(op) = op else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_primary()?;
        Ok(Expr::Cmp { op, left: Box::new(left), right: Box::new(right) })
    }

    fn parse_primary(&mut self) -> ExprResult<Expr> {
        let tok = self.advance();
        match tok.kind {
            TokenKind::LParen => {
                let inner = self.parse_or()?;
                match self.advance().kind {
                    TokenKind::RParen => Ok(inner),
                    other => Err(ExprError::Parse {
                        pos: tok.pos,
                        message: format!("unmatched parenthesis, found {other:?}"),
                    }),
                }
            }
            TokenKind::Bool(b) => Ok(Expr::Leaf(Leaf::Bool(b))),
            TokenKind::Number(v) => Ok(Expr::Leaf(Leaf::Number(v))),
            TokenKind::Str(s) => Ok(Expr::Leaf(Leaf::Str(s))),
            TokenKind::Ident(name) => Ok(Expr::Leaf(Leaf::Ident(name))),
            other => Err(ExprError::Parse {
                pos: tok.pos,
                message: format!("unexpected token {other:?}"),
            }),
        }
    }
}
