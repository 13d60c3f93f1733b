use hostprobe_domain::validate_ipv4;
use tracing::debug;

#[derive(Default)]
pub struct ValidateIpUseCase;

impl ValidateIpUseCase {
    pub fn new() -> Self {
        Self
    }

    /// A missing value is reported as invalid.
    pub fn execute(&self, ip: Option<&str>) -> bool {
        let valid = ip.map(validate_ipv4).unwrap_or(false);
        debug!(ip = ip.unwrap_or(""), valid, "IPv4 validation");
        valid
    }
}
