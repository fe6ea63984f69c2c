//! Unit tests for the directive module.
//!
//! Domain tests cover the grammar, reassembly and lookup rules; service tests
//! run against the in-memory adapters, with `mockall` doubles where a port
//! has to fail.

mod support;
