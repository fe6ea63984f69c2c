//! Inline directives that pull content from other conversations.
//!
//! A message such as `Compare with ;summarize @Trip-to-Rome` carries a
//! directive naming a kind and a conversation reference. This module parses
//! directives out of message text, resolves each reference to exactly one
//! conversation, derives the requested content and splices it back into the
//! message. Batches tolerate per-directive failures and record
//! cross-references between conversations.
//!
//! - Domain types and pure text handling in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
