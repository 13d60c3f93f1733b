use super::{Repositories, Services};
use hostprobe_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use hostprobe_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub validate_ip: Arc<ValidateIpUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, services: &Services) -> Self {
        Self {
            lookup_domain: Arc::new(LookupDomainUseCase::new(
                services.lookup.clone(),
                repos.lookup_records.clone(),
                services.metrics.clone(),
                services.query_ids.clone(),
            )),
            get_history: Arc::new(GetHistoryUseCase::new(
                repos.lookup_records.clone(),
                config.database.history_limit,
            )),
            validate_ip: Arc::new(ValidateIpUseCase::new()),
        }
    }
}
