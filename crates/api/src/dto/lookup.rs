use hostprobe_domain::{LookupRecord, QueryId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq)]
pub struct LookupParams {
    pub domain: Option<String>,
}

impl LookupParams {
    /// First `domain` pair wins; other keys and repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            domain: pairs
                .into_iter()
                .find(|(key, _)| key == "domain")
                .map(|(_, value)| value),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressEntry {
    pub ip: String,
    #[serde(rename = "queryID")]
    pub query_id: QueryId,
}

/// Public shape of a lookup, shared by the lookup and history endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub addresses: Vec<AddressEntry>,
    pub client_ip: Option<String>,
    pub created_time: i64,
    pub domain: String,
    #[serde(rename = "queryID")]
    pub query_id: QueryId,
}

impl From<LookupRecord> for LookupResponse {
    fn from(record: LookupRecord) -> Self {
        let query_id = record.query_id;
        Self {
            addresses: record
                .addresses
                .iter()
                .map(|ip| AddressEntry {
                    ip: ip.to_string(),
                    query_id,
                })
                .collect(),
            client_ip: record.client_ip,
            created_time: record.created_time,
            domain: record.domain.to_string(),
            query_id,
        }
    }
}
