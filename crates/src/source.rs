//! Record sources: the HTTP directory backend and an in-memory stand-in.
//!
//! Every call is a single attempt. There is no caching, no timeout policy and
//! no retry; failures surface as [`FetchError`] for the caller to handle.

use crate::error::FetchError;
use crate::record::Record;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Read-only access to the superhero directory.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// `GET {base}/superheroes`
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError>;

    /// `GET {base}/poder/{power}`
    async fn fetch_by_power(&self, power: &str) -> Result<Vec<Record>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpRecordSource {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    // Each segment is percent-encoded on its own, so a power such as
    // "a/b" stays one segment instead of changing the route.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_records(&self, url: Url) -> Result<Vec<Record>, FetchError> {
        tracing::debug!(%url, "requesting records");
        let res = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::new(url.as_str(), e))?;
        let records: Vec<Record> = res
            .json()
            .await
            .map_err(|e| FetchError::new(url.as_str(), e))?;
        tracing::debug!(%url, count = records.len(), "records received");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        self.get_records(self.endpoint(&["superheroes"])).await
    }

    async fn fetch_by_power(&self, power: &str) -> Result<Vec<Record>, FetchError> {
        self.get_records(self.endpoint(&["poder", power])).await
    }
}

/// Serves a fixed list of records from memory.
#[derive(Clone, Debug, Default)]
pub struct StaticRecordSource {
    records: Vec<Record>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The placeholder roster the screen shipped with before the backend existed.
    pub fn demo() -> Self {
        let hero = |id: &str, name: &str, powers: &[&str], age: &str, league: &str, active| Record {
            id: id.to_string(),
            name: name.to_string(),
            powers: powers.iter().map(|p| p.to_string()).collect(),
            age: age.to_string(),
            league: league.to_string(),
            active,
        };
        Self::new(vec![
            hero("1", "Nombre Super", &["Vuelo", "Super Fuerza"], "35", "Justicia", true),
            hero("2", "Nombre Super", &["Invisibilidad", "Telepatía"], "28", "Vengadores", true),
            hero("3", "Nombre Super", &["Control Mental", "Telekinesis"], "42", "X-Men", false),
        ])
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        Ok(self.records.clone())
    }

    async fn fetch_by_power(&self, power: &str) -> Result<Vec<Record>, FetchError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.has_power(power))
            .cloned()
            .collect())
    }
}
