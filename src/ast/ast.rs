use crate::Span;

use super::expressions::{BinaryExpr, NumberExpr, StringExpr};

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprType {
    Number,
    String,
    Binary,
}

/// Expression
///
/// Every expression shape a parser can build from the token stream. Each
/// node owns its children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Binary(_) => ExprType::Binary,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::String(_) => "string",
            Expr::Binary(_) => "binary",
        }
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<StringExpr> for Expr {
    fn from(expr: StringExpr) -> Self {
        Expr::String(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}
