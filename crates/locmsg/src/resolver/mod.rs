//! Message resolution.
//!
//! This module provides the resolver that turns message keys into display
//! strings: it looks up messages, selects plural templates, substitutes
//! placeholders, and invokes formatters. How errors reach the caller is
//! governed by a single [`ErrorReporting`] switch.

mod context;
mod error;
mod message_resolver;
mod substitute;

pub use context::ResolvingContext;
pub use error::{ErrorReporting, ResolveError};
pub use message_resolver::MessageResolver;
