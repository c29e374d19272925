use crate::ast::Expr;

/// Operation nodes require a left-hand value: they combine the block's
/// accumulated current value with their operand expression.
///
/// Only `equals` has a parse rule today. The `not`, `contains`, `greater`,
/// and `lesser` keywords are lexed but reserved until their semantics are
/// settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Compare the current value with the operand for equality
    ///
    /// # Examples
    /// ```text
    /// 2 equals 4
    /// ```
    Equals(Expr),
}
