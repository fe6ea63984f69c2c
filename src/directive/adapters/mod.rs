//! Adapter implementations for the directive ports.
//!
//! - [`memory`]: in-process directory, cross-reference store and scripted
//!   completion service
//! - [`postgres`]: Diesel-backed directory and cross-reference store
//! - [`openrouter`]: HTTP completion client

pub mod memory;
pub mod openrouter;
pub mod postgres;
