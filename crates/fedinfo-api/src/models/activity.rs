use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::formats::Flexible;
use serde_with::{DisplayFromStr, TimestampSeconds, serde_as};

/// One week of instance activity, from `GET /api/v1/instance/activity`.
///
/// Mastodon sends every value as a string:
/// ```json
/// { "week": "1516579200", "statuses": "1", "logins": "1", "registrations": "0" }
/// ```
/// The counters must be numeric strings; anything else fails to decode.
/// `week` (Unix seconds, start of the week) also tolerates a bare number.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    #[serde_as(as = "TimestampSeconds<String, Flexible>")]
    pub week: DateTime<Utc>,
    #[serde_as(as = "DisplayFromStr")]
    pub statuses: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub logins: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub registrations: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_string_counters() {
        let a: WeeklyActivity = serde_json::from_value(json!({
            "week": "1516579200",
            "statuses": "1",
            "logins": "1",
            "registrations": "0"
        }))
        .unwrap();

        assert_eq!(a.week, Utc.with_ymd_and_hms(2018, 1, 22, 0, 0, 0).unwrap());
        assert_eq!(a.statuses, 1);
        assert_eq!(a.logins, 1);
        assert_eq!(a.registrations, 0);
    }

    #[test]
    fn week_accepts_bare_number() {
        let a: WeeklyActivity = serde_json::from_value(json!({
            "week": 1_516_579_200,
            "statuses": "10",
            "logins": "2",
            "registrations": "3"
        }))
        .unwrap();
        assert_eq!(a.week.timestamp(), 1_516_579_200);
    }

    #[test]
    fn non_numeric_counter_is_an_error() {
        let result = serde_json::from_value::<WeeklyActivity>(json!({
            "week": "1516579200",
            "statuses": "many",
            "logins": "1",
            "registrations": "0"
        }));
        assert!(result.is_err(), "expected decode error, got: {result:?}");
    }

    #[test]
    fn bare_number_counter_is_an_error() {
        let result = serde_json::from_value::<WeeklyActivity>(json!({
            "week": "1516579200",
            "statuses": 1,
            "logins": "1",
            "registrations": "0"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn encodes_back_to_strings() {
        let a = WeeklyActivity {
            week: Utc.timestamp_opt(1_516_579_200, 0).unwrap(),
            statuses: 7,
            logins: 4,
            registrations: 1,
        };
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({
                "week": "1516579200",
                "statuses": "7",
                "logins": "4",
                "registrations": "1"
            })
        );
    }
}
