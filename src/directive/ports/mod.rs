//! Port trait definitions for the directive engine.
//!
//! Ports define what the engine needs from the outside: a conversation
//! directory, a completion service and a cross-reference store. Adapters
//! implement them.

pub mod completion;
pub mod cross_reference;
pub mod directory;

pub use completion::{CompletionError, CompletionResult, CompletionService};
pub use cross_reference::{CrossReferenceError, CrossReferenceResult, CrossReferenceStore};
pub use directory::{ConversationDirectory, DirectoryError, DirectoryResult};
