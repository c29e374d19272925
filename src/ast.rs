//! # fexpr - Abstract Syntax Tree
//!
//! This module defines the token and node types for the fexpr filter
//! expression language, a small query language for matching records
//! against chained conditions.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (self-contained values)
//! - **[operations]** - Operation nodes (combine with a current value)
//! - **[block]** - The top-level block: base expression plus operations
//!
//! ## Core Concepts
//!
//! ### Block Structure
//!
//! Every query is a block: a base expression followed by zero or more
//! operations applied left to right to an accumulating value:
//!
//! ```text
//! 2 equals 4
//! ```
//!
//! parses into `Block { expression: Number(2), operations: [Equals(Number(4))] }`.
//!
//! ### The Two Capability Axes
//!
//! - **[Expr]** - evaluable in isolation (`Number`, nested `Block`)
//! - **[Op]** - needs a left-hand current value (`Equals`)
//!
//! Both are closed sum types, so adding a variant is a compile-time-checked
//! exercise at every consumer.
//!
//! ### Reserved Keywords
//!
//! `not`, `contains`, `greater`, and `lesser` are lexed as keywords but
//! have no parse rule yet; the grammar rejects them with a clear error
//! instead of guessing at semantics.
pub mod block;
pub mod expressions;
pub mod operations;
pub mod tokens;

pub use block::Block;
pub use expressions::Expr;
pub use operations::Op;
pub use tokens::{Token, TokenKind};
