use hostprobe_domain::QueryStatus;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use crate::ports::HostResolver;

/// Outcome of a single resolver call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub addresses: Vec<Ipv4Addr>,
    pub elapsed: Option<Duration>,
    pub status: QueryStatus,
}

impl Resolution {
    pub fn failure() -> Self {
        Self {
            addresses: Vec::new(),
            elapsed: None,
            status: QueryStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Times the resolver call and removes duplicate answers, keeping the first
/// occurrence of each address.
pub struct HostLookupService {
    resolver: Arc<dyn HostResolver>,
}

impl HostLookupService {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, domain: &str) -> Resolution {
        let started = Instant::now();
        let result = self.resolver.lookup_ipv4(domain).await;
        let elapsed = started.elapsed();

        let answers = match result {
            Ok(answers) => answers,
            Err(e) => {
                debug!(error = %e, "Resolution failed");
                return Resolution::failure();
            }
        };

        let addresses = dedup_preserving_order(answers);
        if addresses.is_empty() {
            debug!("Resolver returned no IPv4 addresses");
            return Resolution::failure();
        }

        debug!(
            count = addresses.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Resolution succeeded"
        );

        Resolution {
            addresses,
            elapsed: Some(elapsed),
            status: QueryStatus::Success,
        }
    }
}

pub fn dedup_preserving_order(answers: Vec<Ipv4Addr>) -> Vec<Ipv4Addr> {
    let mut seen = HashSet::with_capacity(answers.len());
    answers.into_iter().filter(|addr| seen.insert(*addr)).collect()
}
