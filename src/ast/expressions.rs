use crate::ast::Block;
use rust_decimal::Decimal;

/// Expression nodes are evaluable in isolation: they need no left-hand
/// value to produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Number literal
    ///
    /// Carries the lexed digit string as a lossless decimal; no
    /// floating-point rounding happens anywhere in the front end.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 123456789123456789
    /// ```
    Number(Decimal),

    /// Nested block, for parenthesized groups
    ///
    /// No grammar rule produces this yet; it exists so a grouping rule can
    /// be added without touching every consumer.
    Block(Box<Block>),
}
