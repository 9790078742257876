//! Config subcommand handlers.

use fedinfo_config::Profile;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init {
            server,
            access_token_env,
            force,
        } => {
            let mut cfg = fedinfo_config::load_config()?;
            let name = global.profile.clone().unwrap_or_else(|| "default".into());

            if cfg.profiles.contains_key(&name) && !force {
                return Err(CliError::ProfileExists { name });
            }

            // Reject unusable URLs before anything is written
            let url = fedinfo_config::parse_server_url(&server)?;

            cfg.profiles.insert(
                name.clone(),
                Profile {
                    server: url.to_string(),
                    access_token_env,
                    ..Profile::default()
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(name.clone());
            }

            fedinfo_config::save_config(&cfg)?;
            tracing::info!(profile = %name, server = %url, "profile saved");
            if !global.quiet {
                eprintln!(
                    "Saved profile '{name}' to {}",
                    fedinfo_config::config_path().display()
                );
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", fedinfo_config::config_path().display());
            Ok(())
        }
    }
}
