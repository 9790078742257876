//! Server metadata from `GET /api/v2/instance`.
//!
//! Unlike v1, the configuration block here is fully typed.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::account::Account;

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2 {
    #[serde_as(as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub version: String,
    #[serde_as(as = "DefaultOnNull")]
    pub source_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub usage: InstanceV2Usage,
    #[serde_as(as = "DefaultOnNull")]
    pub thumbnail: InstanceV2Thumbnail,
    #[serde_as(as = "DefaultOnNull")]
    pub languages: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub configuration: InstanceV2Configuration,
    #[serde_as(as = "DefaultOnNull")]
    pub registrations: InstanceV2Registrations,
    #[serde_as(as = "DefaultOnNull")]
    pub contact: InstanceV2Contact,
    #[serde_as(as = "DefaultOnNull")]
    pub rules: Vec<Rule>,
}

// ── Usage ────────────────────────────────────────────────────────────

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2Usage {
    #[serde_as(as = "DefaultOnNull")]
    pub users: UsageUsers,
}

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageUsers {
    /// Users active in the past four weeks.
    #[serde_as(as = "DefaultOnNull")]
    pub active_month: i64,
}

// ── Thumbnail ────────────────────────────────────────────────────────

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2Thumbnail {
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    /// Perceptual hash for a placeholder while the image loads.
    pub blurhash: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub versions: ThumbnailVersions,
}

/// Resolution variants of the thumbnail. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailVersions {
    #[serde(rename = "@1x")]
    pub one_x: Option<String>,
    #[serde(rename = "@2x")]
    pub two_x: Option<String>,
}

// ── Configuration ────────────────────────────────────────────────────

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2Configuration {
    #[serde_as(as = "DefaultOnNull")]
    pub urls: ConfigurationUrls,
    #[serde_as(as = "DefaultOnNull")]
    pub accounts: AccountLimits,
    #[serde_as(as = "DefaultOnNull")]
    pub statuses: StatusLimits,
    #[serde_as(as = "DefaultOnNull")]
    pub media_attachments: MediaLimits,
    #[serde_as(as = "DefaultOnNull")]
    pub polls: PollLimits,
    #[serde_as(as = "DefaultOnNull")]
    pub translation: Translation,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationUrls {
    /// Websocket base for the streaming API.
    #[serde_as(as = "DefaultOnNull")]
    pub streaming: String,
}

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountLimits {
    #[serde_as(as = "DefaultOnNull")]
    pub max_featured_tags: i64,
}

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLimits {
    #[serde_as(as = "DefaultOnNull")]
    pub max_characters: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_media_attachments: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub characters_reserved_per_url: i64,
}

/// Upload limits. Sizes are bytes, matrix limits are pixels (w × h).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLimits {
    #[serde_as(as = "DefaultOnNull")]
    pub supported_mime_types: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub image_size_limit: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub image_matrix_limit: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub video_size_limit: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub video_frame_rate_limit: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub video_matrix_limit: i64,
}

/// Poll limits. Expirations are seconds.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollLimits {
    #[serde_as(as = "DefaultOnNull")]
    pub max_options: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_characters_per_option: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub min_expiration: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_expiration: i64,
}

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    #[serde_as(as = "DefaultOnNull")]
    pub enabled: bool,
}

// ── Registrations & contact ──────────────────────────────────────────

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2Registrations {
    #[serde_as(as = "DefaultOnNull")]
    pub enabled: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub approval_required: bool,
    /// Custom HTML shown when registrations are closed.
    pub message: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceV2Contact {
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
    /// Keyed by the bare field name; `account` is accepted too since that
    /// is what servers actually send.
    #[serde(rename = "Account", alias = "account")]
    pub account: Option<Account>,
}

/// A server rule shown to users at sign-up.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn null_thumbnail_variants() {
        let ins: InstanceV2 = serde_json::from_value(json!({
            "domain": "gts.example",
            "thumbnail": { "url": "https://gts.example/logo.png", "blurhash": null, "versions": {} },
            "registrations": { "enabled": true, "approval_required": true, "message": null }
        }))
        .unwrap();

        assert_eq!(ins.thumbnail.url, "https://gts.example/logo.png");
        assert!(ins.thumbnail.blurhash.is_none());
        assert_eq!(ins.thumbnail.versions, ThumbnailVersions::default());
        assert!(ins.registrations.enabled);
        assert!(ins.registrations.message.is_none());
        assert!(ins.rules.is_empty());
    }

    #[test]
    fn null_blocks_decode_as_defaults() {
        let ins: InstanceV2 = serde_json::from_value(json!({
            "domain": "gts.example",
            "source_url": null,
            "thumbnail": null,
            "usage": null,
            "contact": null,
            "configuration": {
                "urls": null,
                "statuses": { "max_characters": 5000, "max_media_attachments": null }
            }
        }))
        .unwrap();

        assert_eq!(ins.domain, "gts.example");
        assert_eq!(ins.source_url, "");
        assert_eq!(ins.thumbnail, InstanceV2Thumbnail::default());
        assert_eq!(ins.usage.users.active_month, 0);
        assert_eq!(ins.contact, InstanceV2Contact::default());
        assert_eq!(ins.configuration.urls.streaming, "");
        assert_eq!(ins.configuration.statuses.max_characters, 5000);
        assert_eq!(ins.configuration.statuses.max_media_attachments, 0);
    }

    #[test]
    fn contact_account_under_either_key() {
        let lower: InstanceV2Contact = serde_json::from_value(json!({
            "email": "staff@example.com",
            "account": { "username": "admin" }
        }))
        .unwrap();
        let upper: InstanceV2Contact = serde_json::from_value(json!({
            "email": "staff@example.com",
            "Account": { "username": "admin" }
        }))
        .unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.account.unwrap().username, "admin");
    }

    #[test]
    fn contact_account_encodes_under_field_name() {
        let contact = InstanceV2Contact {
            email: "staff@example.com".into(),
            account: Some(Account {
                username: "admin".into(),
                ..Account::default()
            }),
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["Account"]["username"], json!("admin"));
        assert!(value.get("account").is_none());
    }

    #[test]
    fn mistyped_limit_is_an_error() {
        let result = serde_json::from_value::<InstanceV2>(json!({
            "configuration": { "statuses": { "max_characters": "500" } }
        }));
        assert!(result.is_err());
    }
}
