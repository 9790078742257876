// Instance metadata endpoints
//
// Public, read-only server information. None of these need an access
// token, but one is sent when the client was built with it.

use tracing::debug;

use crate::client::MastodonClient;
use crate::error::Error;
use crate::models::{Instance, InstanceV2, WeeklyActivity};

impl MastodonClient {
    /// Get server metadata, v1 schema.
    ///
    /// `GET /api/v1/instance`
    pub async fn get_instance(&self) -> Result<Instance, Error> {
        debug!("fetching instance (v1)");
        self.get("/api/v1/instance").await
    }

    /// Get server metadata, v2 schema.
    ///
    /// `GET /api/v2/instance`
    pub async fn get_instance_v2(&self) -> Result<InstanceV2, Error> {
        debug!("fetching instance (v2)");
        self.get("/api/v2/instance").await
    }

    /// Weekly activity buckets, in the order the server returns them
    /// (Mastodon sends the current week first).
    ///
    /// `GET /api/v1/instance/activity`
    pub async fn get_instance_activity(&self) -> Result<Vec<WeeklyActivity>, Error> {
        debug!("fetching instance activity");
        self.get("/api/v1/instance/activity").await
    }

    /// Domains this server has federated with, in server order.
    ///
    /// `GET /api/v1/instance/peers`
    pub async fn get_instance_peers(&self) -> Result<Vec<String>, Error> {
        debug!("fetching instance peers");
        self.get("/api/v1/instance/peers").await
    }
}
