use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "kcgroups", version, about = "Inspect OAuth token group claims")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Token decoding and encoding
    Token {
        #[command(subcommand)]
        cmd: TokenCommand,
    },

    /// Group resolution against a configuration
    Groups {
        #[command(subcommand)]
        cmd: GroupsCommand,
    },

    /// Validate a configuration file
    Check {
        /// Path to kcgroups.yaml
        #[arg(long, short, env = "KCGROUPS_CONFIG", default_value = "kcgroups.yaml")]
        config: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Print the claims carried by a token (no signature verification)
    Decode {
        /// Token string, or path to a file containing it
        token: String,
    },

    /// Print an unsigned token carrying the given groups
    Encode {
        /// Group name to put in the membership claim (repeatable)
        #[arg(long = "group", short)]
        groups: Vec<String>,

        /// Claim holding the group names
        #[arg(long, default_value = "group_membership")]
        claim: String,

        /// Subject claim
        #[arg(long)]
        subject: Option<String>,

        /// Lifetime for the `exp` claim, e.g. "1h", "30m"
        #[arg(long)]
        expires_in: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum GroupsCommand {
    /// Resolve the memberships a token grants
    Resolve {
        #[arg(long, short, env = "KCGROUPS_CONFIG", default_value = "kcgroups.yaml")]
        config: PathBuf,

        /// Token string, or path to a file containing it
        #[arg(long)]
        token: String,

        /// Treat the cached token as expiring after this duration, e.g. "1h" or "-5m" for one already expired
        #[arg(long)]
        expires_in: Option<String>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how the backend sees a group identifier
    Describe {
        #[arg(long, short, env = "KCGROUPS_CONFIG", default_value = "kcgroups.yaml")]
        config: PathBuf,

        /// Group identifier, e.g. keycloak:developers
        uuid: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Token { cmd } => match cmd {
            TokenCommand::Decode { token } => commands::token::decode(token)?,
            TokenCommand::Encode {
                groups,
                claim,
                subject,
                expires_in,
            } => commands::token::encode(groups, claim, subject, expires_in)?,
        },

        Command::Groups { cmd } => match cmd {
            GroupsCommand::Resolve {
                config,
                token,
                expires_in,
                json,
            } => commands::groups::resolve(&config, token, expires_in, json)?,
            GroupsCommand::Describe { config, uuid } => commands::groups::describe(&config, uuid)?,
        },

        Command::Check { config } => commands::check::run(&config)?,
    }

    Ok(())
}
