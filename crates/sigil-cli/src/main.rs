// Sigil CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Tokens go to stdout, everything else to stderr, so
// the output composes with shell pipelines.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use sigil_core::Role;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sigil")]
#[command(about = "Mint and verify tenant-scoped bearer tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a signed bearer token
    IssueToken {
        /// Tenant the token is scoped to
        #[arg(long, default_value_t = sigil_core::DEFAULT_TENANT_ID.to_string())]
        tenant: String,

        /// Principal the token asserts
        #[arg(long, default_value_t = sigil_core::DEFAULT_USER_ID.to_string())]
        user: String,

        /// Role granted to the token: founder, brand_admin, or viewer
        #[arg(long)]
        role: Role,

        /// Token lifetime in seconds
        #[arg(long, default_value_t = sigil_core::DEFAULT_TTL_SECS)]
        ttl: i64,

        /// Signing secret (falls back to SIGIL_SECRET)
        #[arg(long)]
        secret: Option<String>,

        /// Print an issuance summary to stderr
        #[arg(long, short)]
        verbose: bool,
    },

    /// Verify a token and print its claims
    VerifyToken {
        /// The token to verify
        token: String,

        /// Signing secret (falls back to SIGIL_SECRET)
        #[arg(long)]
        secret: Option<String>,

        /// Print claims as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the well-known default identifiers
    Defaults,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigil=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken {
            tenant,
            user,
            role,
            ttl,
            secret,
            verbose,
        } => commands::issue::run(&tenant, &user, role, ttl, secret, verbose),
        Commands::VerifyToken {
            token,
            secret,
            json,
        } => commands::verify::run(&token, secret, json),
        Commands::Defaults => commands::defaults::run(),
    }
}
