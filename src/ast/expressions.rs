use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl NumberExpr {
    /// Converts a `Number` token's literal text into its value.
    pub fn from_token(token: &Token) -> Result<Self, Error> {
        let parse_error = || {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value().to_string(),
                },
                token.span().start.clone(),
            )
        };

        if token.kind() != TokenKind::Number {
            return Err(parse_error());
        }

        let value = token.value().parse::<f64>().map_err(|_| parse_error())?;

        Ok(NumberExpr {
            value,
            span: token.span().clone(),
        })
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl StringExpr {
    pub fn from_token(token: &Token) -> Self {
        StringExpr {
            value: token.value().to_string(),
            span: token.span().clone(),
        }
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The full operator token is kept so diagnostics can point at its exact
/// spelling and position. Builders are expected to pass an operator whose
/// kind satisfies [`TokenKind::is_binary_operator`]; this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    /// Builds the node, spanning from the start of `left` to the end of
    /// `right`.
    pub fn new(left: Expr, operator: Token, right: Expr) -> Expr {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        })
    }
}
