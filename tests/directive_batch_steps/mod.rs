//! Step definitions for directive batch scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
