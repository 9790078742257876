//! Command dispatch: routes parsed CLI commands to their handlers.

pub mod config_cmd;
pub mod instance;

use fedinfo_api::MastodonClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to its handler.
pub async fn dispatch(
    cmd: Command,
    client: &MastodonClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Instance(args) => instance::handle_instance(client, &args, global).await,
        Command::Activity => instance::handle_activity(client, global).await,
        Command::Peers(args) => instance::handle_peers(client, &args, global).await,
        // Handled in main before a client is built
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
