const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Accepts hostnames made of at least two dot-separated labels.
///
/// Labels are 1-63 ASCII alphanumerics or hyphens and may not start or end
/// with a hyphen. A trailing root dot is rejected.
pub fn validate_domain(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let mut labels = 0usize;
    for label in input.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        labels += 1;
    }

    labels >= 2
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Accepts exactly four dot-separated decimal octets in `0..=255`.
///
/// Octets are parsed as plain decimal, so `010` reads as 10.
pub fn validate_ipv4(input: &str) -> bool {
    let mut octets = 0usize;
    for part in input.split('.') {
        if !is_valid_octet(part) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

fn is_valid_octet(part: &str) -> bool {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    part.parse::<u16>().map(|v| v <= 255).unwrap_or(false)
}
