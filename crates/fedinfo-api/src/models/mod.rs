// Response types for the Mastodon REST API
//
// Plain value records decoded from JSON. Fields default liberally because
// servers (Mastodon, Pleroma, GoToSocial, ...) disagree about which keys
// they send; a key present with the wrong JSON type is still an error.

pub mod account;
pub mod activity;
pub mod instance;
pub mod instance_v2;

pub use account::{Account, AccountField, CustomEmoji};
pub use activity::WeeklyActivity;
pub use instance::{Instance, InstanceConfig, InstanceConfigMap, InstanceStats};
pub use instance_v2::{
    InstanceV2, InstanceV2Configuration, InstanceV2Contact, InstanceV2Registrations,
    InstanceV2Thumbnail, InstanceV2Usage, Rule,
};
