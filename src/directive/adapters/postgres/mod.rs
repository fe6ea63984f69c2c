//! `PostgreSQL` adapters backed by Diesel.
//!
//! Queries run on the blocking thread pool with connections from an r2d2
//! pool shared by both adapters.

mod blocking;
mod cross_reference;
mod directory;
mod models;
mod schema;

pub use blocking::DirectivePgPool;
pub use cross_reference::PostgresCrossReferenceStore;
pub use directory::PostgresConversationDirectory;
