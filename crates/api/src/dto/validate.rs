use serde::{Deserialize, Serialize};

pub const VALID_IPV4: &str = "is a Valid ipV4";
pub const INVALID_IPV4: &str = "is NOT a Valid ipV4";

#[derive(Deserialize, Debug, Default)]
pub struct ValidateIpRequest {
    pub ip: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidateIpResponse {
    pub ip: &'static str,
}

impl ValidateIpResponse {
    pub fn from_validity(valid: bool) -> Self {
        Self {
            ip: if valid { VALID_IPV4 } else { INVALID_IPV4 },
        }
    }
}
