//! Domain types for the directive engine.
//!
//! Everything here is pure: parsing, reassembly, title lookup and transcript
//! rendering never touch storage or the network, so they can run on any
//! thread without coordination.

mod conversation;
mod cross_reference;
mod error;
mod kind;
mod lookup;
mod outcome;
mod parser;
mod rebuild;
mod request;
mod title;
mod transcript;

pub use conversation::{ConversationId, ConversationSummary, Role, TranscriptMessage};
pub use cross_reference::{
    CrossReference, CrossReferenceId, NewCrossReference, ReferenceView, UNKNOWN_TITLE,
};
pub use error::DirectiveError;
pub use kind::{DirectiveKind, ParseDirectiveKindError};
pub use lookup::{normalize_reference, reference_token, resolve_by_title};
pub use outcome::{BatchOutcome, DirectiveOutcome, ResolutionFailure, ResolvedDirective};
pub use parser::{
    DIRECTIVE_PREFIX, ParsedDirective, format_directive, has_directive, parse_directives,
};
pub use rebuild::{rebuild, replace_directives, strip_directives};
pub use request::{
    DirectiveRequest, MAX_BATCH_SIZE, MAX_QUESTION_CHARS, MAX_REFERENCE_CHARS, validate_batch,
};
pub use title::{MAX_TITLE_CHARS, title_from_message};
pub use transcript::{TRUNCATION_SUFFIX, by_role, format_transcript, last_exchange, truncate_chars};
