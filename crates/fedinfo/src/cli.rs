//! Clap derive structures for the `fedinfo` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fedinfo -- inspect Mastodon-compatible servers
#[derive(Debug, Parser)]
#[command(
    name = "fedinfo",
    version,
    about = "Inspect Mastodon-compatible servers from the command line",
    long_about = "Query the public instance endpoints of a Mastodon-compatible server:\n\
        metadata (v1 and v2 schema), weekly activity and federated peers.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "FEDINFO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "FEDINFO_SERVER", global = true)]
    pub server: Option<String>,

    /// OAuth access token
    #[arg(long, env = "FEDINFO_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FEDINFO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "FEDINFO_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FEDINFO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show server metadata
    #[command(alias = "info", alias = "i")]
    Instance(InstanceArgs),

    /// Show weekly activity (statuses, logins, registrations)
    #[command(alias = "act")]
    Activity,

    /// List domains this server federates with
    Peers(PeersArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct InstanceArgs {
    /// Use the v2 instance endpoint
    #[arg(long)]
    pub v2: bool,
}

#[derive(Debug, Args)]
pub struct PeersArgs {
    /// Show at most this many peers
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or replace a profile in the config file
    Init {
        /// Server URL, e.g. https://mastodon.social
        server: String,

        /// Environment variable to read the access token from
        #[arg(long)]
        access_token_env: Option<String>,

        /// Overwrite an existing profile of the same name
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
