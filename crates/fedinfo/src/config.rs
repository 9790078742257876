//! CLI configuration: thin wrapper around `fedinfo_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --access-token, --insecure, --timeout).

use std::time::Duration;

use secrecy::SecretString;

use fedinfo_api::{ClientConfig, TlsMode};
use fedinfo_config::{Config, Profile};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ClientConfig` from the config file, profile, and CLI overrides.
pub fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = fedinfo_config::load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    // An explicitly requested profile must exist.
    if global.profile.is_some() {
        let profile = cfg.profile(&profile_name)?;
        return resolve_profile(profile, &profile_name, &cfg, global);
    }

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &cfg, global);
    }

    // No profile -- build from CLI flags / env vars alone
    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: fedinfo_config::config_path().display().to_string(),
    })?;

    let mut client = ClientConfig::new(fedinfo_config::parse_server_url(server)?);
    client.access_token = global.access_token.clone().map(SecretString::from);
    client.transport.timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout));
    if global.insecure || cfg.defaults.insecure {
        client.transport.tls = TlsMode::DangerAcceptInvalid;
    }
    Ok(client)
}

/// Translate a `Profile` + global flags into a `ClientConfig`.
///
/// CLI flag overrides take priority over profile values.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<ClientConfig, CliError> {
    let mut client = match global.server.as_deref() {
        Some(server) => ClientConfig {
            server: fedinfo_config::parse_server_url(server)?,
            access_token: fedinfo_config::resolve_access_token(profile, profile_name),
            transport: fedinfo_config::profile_transport(profile, &cfg.defaults),
        },
        None => fedinfo_config::profile_to_client_config(profile, profile_name, &cfg.defaults)?,
    };

    if let Some(ref token) = global.access_token {
        client.access_token = Some(SecretString::from(token.clone()));
    }
    if global.insecure {
        client.transport.tls = TlsMode::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        client.transport.timeout = Duration::from_secs(secs);
    }

    tracing::debug!(profile = profile_name, server = %client.server, "resolved profile");
    Ok(client)
}
