//! In-memory adapters for tests and local runs.

mod completion;
mod cross_reference;
mod directory;

pub use completion::{CompletionRequest, ScriptedCompletionService};
pub use cross_reference::InMemoryCrossReferenceStore;
pub use directory::InMemoryConversationDirectory;
