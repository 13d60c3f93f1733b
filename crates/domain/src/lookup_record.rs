use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

/// Identifier of a single lookup request, derived from the submission time in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub u64);

impl QueryId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
    Failure,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Success => "success",
            QueryStatus::Failure => "failure",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(QueryStatus::Success),
            "failure" => Some(QueryStatus::Failure),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryStatus::Success)
    }
}

/// One resolved lookup, immutable once built.
///
/// `addresses` never holds the same address twice and keeps the order in which
/// the resolver returned them. Only successful lookups are ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRecord {
    pub query_id: QueryId,
    pub domain: Arc<str>,
    pub addresses: Vec<Ipv4Addr>,
    /// Unix seconds
    pub created_time: i64,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub query_status: QueryStatus,
    /// Resolver latency in seconds
    pub response_time: Option<f64>,
}

impl LookupRecord {
    pub fn success(
        query_id: QueryId,
        domain: impl Into<Arc<str>>,
        addresses: Vec<Ipv4Addr>,
        created_time: i64,
        response_time: Duration,
    ) -> Self {
        Self {
            query_id,
            domain: domain.into(),
            addresses,
            created_time,
            client_ip: None,
            user_agent: None,
            query_status: QueryStatus::Success,
            response_time: Some(response_time.as_secs_f64()),
        }
    }

    pub fn with_client(mut self, client_ip: Option<String>, user_agent: Option<String>) -> Self {
        self.client_ip = client_ip;
        self.user_agent = user_agent;
        self
    }

    pub fn has_unique_addresses(&self) -> bool {
        self.addresses
            .iter()
            .enumerate()
            .all(|(i, addr)| !self.addresses[..i].contains(addr))
    }

    /// Records that may be written to the history table.
    pub fn is_persistable(&self) -> bool {
        self.query_status.is_success() && !self.addresses.is_empty() && self.has_unique_addresses()
    }
}
