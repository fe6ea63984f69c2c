//! Interlink: inline cross-conversation directives.
//!
//! Chat messages can pull content from other conversations with directives
//! such as `;select:last @Rome-Trip` or `;inject @Budget "What did we cut?"`.
//! This crate parses those directives, resolves their references against a
//! conversation directory, derives the requested content and splices it back
//! into the message text.
//!
//! # Architecture
//!
//! Interlink follows hexagonal architecture principles:
//!
//! - **Domain**: Pure parsing, reassembly and lookup with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the conversation directory, the
//!   completion service and the cross-reference store
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`,
//!   HTTP)
//!
//! # Modules
//!
//! - [`directive`]: Directive grammar, resolution and expansion
//! - [`config`]: Environment and file configuration
//! - [`telemetry`]: Logging setup for binaries

pub mod config;
pub mod directive;
pub mod telemetry;
