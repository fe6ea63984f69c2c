//! Command-line front end for directive parsing and expansion.
//!
//! Usage:
//!
//! ```text
//! interlink [--config <FILE>] parse <TEXT>
//! interlink [--config <FILE>] expand <TEXT> [--source <UUID>]
//! interlink [--config <FILE>] references <UUID>
//! interlink kinds
//! ```
//!
//! A `TEXT` of `-` is read from standard input. `parse` and `kinds` work offline;
//! `expand` and `references` need `INTERLINK__DATABASE_URL`, and `expand`
//! also needs a completion API key. Every command prints JSON.

use clap::{Parser, Subcommand};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use interlink::config::AppConfig;
use interlink::directive::{
    adapters::{
        openrouter::OpenRouterCompletionService,
        postgres::{DirectivePgPool, PostgresConversationDirectory, PostgresCrossReferenceStore},
    },
    domain::{ConversationId, DirectiveKind, parse_directives},
    services::{BatchResolver, ContentResolver, ExpansionService, ReferenceService},
};
use mockable::DefaultClock;
use serde::Serialize;
use std::io::{self, Read, Write};
use std::sync::Arc;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Marker argument meaning "read standard input".
const STDIN_MARKER: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "interlink", version, about = "Parse and expand cross-conversation directives")]
struct Cli {
    /// TOML configuration file layered under the environment.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the directives found in TEXT.
    Parse {
        /// Message text, or `-` for standard input.
        text: String,
    },
    /// Replace the directives in TEXT with their content.
    Expand {
        /// Message text, or `-` for standard input.
        text: String,
        /// Conversation the message belongs to; enables cross-references.
        #[arg(long)]
        source: Option<ConversationId>,
    },
    /// List the cross-references of a conversation.
    References {
        /// Conversation identifier.
        conversation: ConversationId,
    },
    /// List the directive kinds with their descriptions.
    Kinds,
}

/// One entry of the `kinds` listing.
#[derive(Debug, Serialize)]
struct KindEntry {
    kind: DirectiveKind,
    description: &'static str,
}

fn main() -> Result<(), BoxError> {
    interlink::telemetry::init();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    run(cli, &mut io::stdin().lock(), &mut stdout)
}

fn run(cli: Cli, input: &mut impl Read, output: &mut impl Write) -> Result<(), BoxError> {
    match cli.command {
        Command::Parse { text } => {
            let message = read_text(&text, input)?;
            write_json(output, &parse_directives(&message))
        }
        Command::Expand { text, source } => {
            let message = read_text(&text, input)?;
            let config = load_config(cli.config.as_deref())?;
            let pool = connect(&config)?;
            let directory = Arc::new(PostgresConversationDirectory::new(pool.clone()));
            let store = Arc::new(PostgresCrossReferenceStore::new(pool, Arc::new(DefaultClock)));
            let completion = Arc::new(OpenRouterCompletionService::new(&config.completion)?);
            let resolver =
                ContentResolver::with_config(directory, completion, config.resolution.clone());
            let service = ExpansionService::new(BatchResolver::new(resolver, store));
            let expansion = runtime()?.block_on(service.expand(&message, source));
            write_json(output, &expansion)
        }
        Command::References { conversation } => {
            let config = load_config(cli.config.as_deref())?;
            let pool = connect(&config)?;
            let service = ReferenceService::new(
                Arc::new(PostgresConversationDirectory::new(pool.clone())),
                Arc::new(PostgresCrossReferenceStore::new(pool, Arc::new(DefaultClock))),
            );
            let references = runtime()?.block_on(service.list_for(conversation))?;
            write_json(output, &references)
        }
        Command::Kinds => write_json(output, &kind_catalogue()),
    }
}

fn kind_catalogue() -> Vec<KindEntry> {
    DirectiveKind::ALL
        .into_iter()
        .map(|kind| KindEntry {
            kind,
            description: kind.description(),
        })
        .collect()
}

fn read_text(argument: &str, input: &mut impl Read) -> io::Result<String> {
    if argument != STDIN_MARKER {
        return Ok(argument.to_owned());
    }
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}

fn load_config(path: Option<&str>) -> Result<AppConfig, BoxError> {
    let config = match path {
        Some(file) => AppConfig::load_with_file(file)?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn connect(config: &AppConfig) -> Result<DirectivePgPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(config.require_database_url()?);
    Ok(Pool::builder().build(manager)?)
}

fn runtime() -> io::Result<tokio::runtime::Runtime> {
    Builder::new_multi_thread().enable_all().build()
}

fn write_json(output: &mut impl Write, value: &impl Serialize) -> Result<(), BoxError> {
    serde_json::to_writer_pretty(&mut *output, value)?;
    writeln!(output)?;
    Ok(())
}
