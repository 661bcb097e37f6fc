//! Remote user-directory source.
//!
//! The list and detail views consume [`DirectorySource`] as a black box; the
//! default implementation talks to a JSONPlaceholder-style REST endpoint over
//! blocking HTTP. Records keep the wire shape of that API, including the
//! string-typed lat/lng pair under `address.geo`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

/// One record of the directory collection.
///
/// Opaque to the core logic except for the searchable text fields (name,
/// username, email, phone, company name) and the geo pair used by the
/// location widget.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// The two operations the views need from a record collection.
pub trait DirectorySource {
    fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError>;
    fn fetch_by_id(&self, id: u64) -> Result<UserRecord, DirectoryError>;
}

/// Directory backed by a REST API (`GET {base}/users`, `GET {base}/users/{id}`).
pub struct HttpDirectory {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { agent, base_url }
    }
}

impl DirectorySource for HttpDirectory {
    fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!(%url, "fetching user collection");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| DirectoryError::Unavailable(Box::new(e)))?;
        response
            .into_json()
            .map_err(|e| DirectoryError::Unavailable(Box::new(e)))
    }

    fn fetch_by_id(&self, id: u64) -> Result<UserRecord, DirectoryError> {
        let url = format!("{}/users/{}", self.base_url, id);
        tracing::debug!(%url, "fetching user record");
        match self.agent.get(&url).call() {
            Ok(response) => response
                .into_json()
                .map_err(|e| DirectoryError::Unavailable(Box::new(e))),
            Err(ureq::Error::Status(404, _)) => Err(DirectoryError::NotFound(id)),
            Err(e) => Err(DirectoryError::Unavailable(Box::new(e))),
        }
    }
}

/// In-memory source for tests and `--offline` runs.
#[derive(Clone, Debug, Default)]
pub struct StaticDirectory {
    records: Vec<UserRecord>,
}

impl StaticDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl DirectorySource for StaticDirectory {
    fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        Ok(self.records.clone())
    }

    fn fetch_by_id(&self, id: u64) -> Result<UserRecord, DirectoryError> {
        self.records
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }
}
