use crate::ast::{Expr, Op};

/// The top-level parsed unit: a base expression plus an ordered chain of
/// operations applied to the accumulating value, left to right.
///
/// A bare expression is a valid block (`operations` empty). Evaluation is
/// the consumer's job; the front end only guarantees the ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub expression: Expr,
    pub operations: Vec<Op>,
}
