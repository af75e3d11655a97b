//! Message template parser.
//!
//! This module parses template strings into an AST of literal text and
//! placeholders. The AST drives substitution in the resolver and is also
//! used by tooling to inspect which formatters a template references.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
