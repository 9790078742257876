use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::account::Account;

/// Open option-name → value map used by the v1 configuration blocks.
///
/// The keys differ between server versions, so nothing here is assumed
/// to be present.
pub type InstanceConfigMap = serde_json::Map<String, serde_json::Value>;

/// Server metadata from `GET /api/v1/instance`.
///
/// An explicit `null` decodes the same as an absent field.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde_as(as = "DefaultOnNull")]
    pub uri: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumbnail: String,
    /// Named URLs, usually just `streaming_api`.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub urls: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<InstanceStats>,
    #[serde_as(as = "DefaultOnNull")]
    pub languages: Vec<String>,
    pub contact_account: Option<Account>,
    pub configuration: Option<InstanceConfig>,
}

impl Instance {
    /// The configuration block as decoded, `None` if the server sent none.
    pub fn configuration(&self) -> Option<&InstanceConfig> {
        self.configuration.as_ref()
    }
}

/// Client-visible limits, v1 schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub accounts: Option<InstanceConfigMap>,
    pub statuses: Option<InstanceConfigMap>,
    pub media_attachments: Option<InstanceConfigMap>,
    pub polls: Option<InstanceConfigMap>,
}

/// Aggregate counters from the v1 `stats` block.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceStats {
    #[serde_as(as = "DefaultOnNull")]
    pub user_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub status_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub domain_count: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> serde_json::Value {
        json!({
            "title": "mastodon",
            "uri": "http://mstdn.example.com",
            "description": "test mastodon",
            "email": "mstdn@mstdn.example.com",
            "version": "0.0.1",
            "urls": { "foo": "http://stream1.example.com", "bar": "http://stream2.example.com" },
            "thumbnail": "http://mstdn.example.com/logo.png",
            "languages": ["en", "ja"],
            "configuration": {
                "accounts": { "max_featured_tags": 10 },
                "statuses": { "max_characters": 500 }
            },
            "stats": { "user_count": 1, "status_count": 2, "domain_count": 3 },
            "contact_account": { "username": "mattn" }
        })
    }

    #[test]
    fn decodes_all_fields() {
        let ins: Instance = serde_json::from_value(sample()).unwrap();

        assert_eq!(ins.title, "mastodon");
        assert_eq!(ins.uri, "http://mstdn.example.com");
        assert_eq!(ins.version, "0.0.1");
        assert_eq!(ins.urls["foo"], "http://stream1.example.com");
        assert_eq!(ins.urls["bar"], "http://stream2.example.com");
        assert_eq!(ins.thumbnail, "http://mstdn.example.com/logo.png");
        assert_eq!(ins.languages, vec!["en", "ja"]);
        assert_eq!(
            ins.stats,
            Some(InstanceStats {
                user_count: 1,
                status_count: 2,
                domain_count: 3,
            })
        );
        assert_eq!(ins.contact_account.unwrap().username, "mattn");
    }

    #[test]
    fn configuration_keeps_partial_maps() {
        let ins: Instance = serde_json::from_value(sample()).unwrap();
        let cfg = ins.configuration().unwrap();

        let accounts = cfg.accounts.as_ref().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts["max_featured_tags"], json!(10));

        let statuses = cfg.statuses.as_ref().unwrap();
        assert_eq!(statuses["max_characters"], json!(500));
        assert!(!statuses.contains_key("max_media_attachments"));

        assert!(cfg.media_attachments.is_none());
        assert!(cfg.polls.is_none());
    }

    #[test]
    fn configuration_absent() {
        let ins: Instance = serde_json::from_value(json!({ "title": "bare" })).unwrap();
        assert!(ins.configuration().is_none());
        assert!(ins.stats.is_none());
        assert!(ins.urls.is_empty());
    }

    #[test]
    fn null_collections_decode_empty() {
        let ins: Instance =
            serde_json::from_value(json!({ "urls": null, "languages": null })).unwrap();
        assert!(ins.urls.is_empty());
        assert!(ins.languages.is_empty());
    }

    #[test]
    fn null_scalars_decode_as_defaults() {
        let ins: Instance = serde_json::from_value(json!({
            "uri": "x",
            "title": "t",
            "email": null,
            "thumbnail": null,
            "version": null,
            "stats": { "user_count": null, "status_count": 2, "domain_count": 3 }
        }))
        .unwrap();

        assert_eq!(ins.uri, "x");
        assert_eq!(ins.email, "");
        assert_eq!(ins.thumbnail, "");
        assert_eq!(ins.version, "");
        assert_eq!(ins.stats.unwrap().user_count, 0);
        assert_eq!(ins.stats.unwrap().status_count, 2);
    }

    #[test]
    fn round_trip_is_lossless() {
        let ins: Instance = serde_json::from_value(sample()).unwrap();
        let encoded = serde_json::to_string(&ins).unwrap();
        let again: Instance = serde_json::from_str(&encoded).unwrap();
        assert_eq!(ins, again);
    }

    #[test]
    fn unknown_config_keys_survive_round_trip() {
        let ins: Instance = serde_json::from_value(json!({
            "configuration": {
                "polls": { "max_options": 4, "x_vendor_extension": { "nested": [1, 2] } }
            }
        }))
        .unwrap();
        let value = serde_json::to_value(&ins).unwrap();
        assert_eq!(
            value["configuration"]["polls"]["x_vendor_extension"],
            json!({ "nested": [1, 2] })
        );
    }

    #[test]
    fn stats_with_wrong_type_is_an_error() {
        let result =
            serde_json::from_value::<Instance>(json!({ "stats": { "user_count": "one" } }));
        assert!(result.is_err());
    }
}
