use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A user profile, as embedded in instance contact information.
///
/// Every field defaults: instance endpoints frequently embed a trimmed
/// account (sometimes just `username`).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub username: String,
    /// `username` for local accounts, `username@domain` for remote ones.
    #[serde_as(as = "DefaultOnNull")]
    pub acct: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub locked: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub bot: bool,
    pub discoverable: Option<bool>,
    #[serde_as(as = "DefaultOnNull")]
    pub group: bool,
    pub created_at: Option<DateTime<Utc>>,
    /// Profile bio, HTML.
    #[serde_as(as = "DefaultOnNull")]
    pub note: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub avatar: String,
    #[serde_as(as = "DefaultOnNull")]
    pub avatar_static: String,
    #[serde_as(as = "DefaultOnNull")]
    pub header: String,
    #[serde_as(as = "DefaultOnNull")]
    pub header_static: String,
    #[serde_as(as = "DefaultOnNull")]
    pub followers_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub following_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub statuses_count: i64,
    /// A bare date (`2022-10-31`) on Mastodon, a full timestamp elsewhere.
    pub last_status_at: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub emojis: Vec<CustomEmoji>,
    #[serde_as(as = "DefaultOnNull")]
    pub fields: Vec<AccountField>,
}

/// A custom emoji usable in display names and notes.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmoji {
    #[serde_as(as = "DefaultOnNull")]
    pub shortcode: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub static_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub visible_in_picker: bool,
}

/// A profile metadata name/value pair.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountField {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub value: String,
    pub verified_at: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn username_only() {
        let acct: Account = serde_json::from_value(json!({ "username": "mattn" })).unwrap();
        assert_eq!(acct.username, "mattn");
        assert!(acct.id.is_empty());
        assert!(acct.created_at.is_none());
        assert!(acct.emojis.is_empty());
    }

    #[test]
    fn full_account() {
        let acct: Account = serde_json::from_value(json!({
            "id": "1",
            "username": "Gargron",
            "acct": "Gargron",
            "display_name": "Eugen",
            "locked": false,
            "bot": false,
            "discoverable": true,
            "group": false,
            "created_at": "2016-03-16T00:00:00.000Z",
            "note": "<p>Founder</p>",
            "url": "https://mastodon.social/@Gargron",
            "followers_count": 133_026,
            "following_count": 311,
            "statuses_count": 72_605,
            "last_status_at": "2022-10-31",
            "emojis": null,
            "fields": [{ "name": "Patreon", "value": "patreon.com/mastodon", "verified_at": null }]
        }))
        .unwrap();

        assert_eq!(acct.id, "1");
        assert_eq!(acct.discoverable, Some(true));
        assert_eq!(
            acct.created_at,
            Some(Utc.with_ymd_and_hms(2016, 3, 16, 0, 0, 0).unwrap())
        );
        assert_eq!(acct.followers_count, 133_026);
        assert_eq!(acct.last_status_at.as_deref(), Some("2022-10-31"));
        assert!(acct.emojis.is_empty());
        assert_eq!(acct.fields.len(), 1);
        assert_eq!(acct.fields[0].name, "Patreon");
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let acct: Account = serde_json::from_value(json!({
            "username": "mattn",
            "display_name": null,
            "bot": null,
            "statuses_count": null,
            "fields": [{ "name": "Site", "value": null }]
        }))
        .unwrap();
        assert_eq!(acct.username, "mattn");
        assert!(acct.display_name.is_empty());
        assert!(!acct.bot);
        assert_eq!(acct.statuses_count, 0);
        assert!(acct.fields[0].value.is_empty());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let result = serde_json::from_value::<Account>(json!({ "followers_count": "lots" }));
        assert!(result.is_err());
    }
}
