//! Application services orchestrating directive resolution.

mod batch;
mod content;
mod expansion;
mod references;

pub use batch::BatchResolver;
pub use content::ContentResolver;
pub use expansion::{Expansion, ExpansionService};
pub use references::{ReferenceService, ReferenceServiceError, ReferenceServiceResult};
