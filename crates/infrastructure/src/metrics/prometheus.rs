use super::MetricsSnapshot;
use std::fmt::Write;

/// Renders a snapshot in the Prometheus text exposition format.
pub fn render(snapshot: &MetricsSnapshot) -> String {
    let mut output = String::new();

    output.push_str("# HELP hostprobe_endpoint_calls_total Total requests received per endpoint\n");
    output.push_str("# TYPE hostprobe_endpoint_calls_total counter\n");
    for (endpoint, count) in &snapshot.endpoint_calls {
        let _ = writeln!(
            output,
            "hostprobe_endpoint_calls_total{{endpoint=\"{}\"}} {}",
            escape_label(endpoint),
            count
        );
    }

    output.push_str("# HELP hostprobe_lookups_total Total successful lookups per domain\n");
    output.push_str("# TYPE hostprobe_lookups_total counter\n");
    for (domain, count) in &snapshot.lookups {
        let _ = writeln!(
            output,
            "hostprobe_lookups_total{{domain=\"{}\"}} {}",
            escape_label(domain),
            count
        );
    }

    output.push_str("# HELP hostprobe_lookup_duration_seconds Lookup pipeline duration\n");
    output.push_str("# TYPE hostprobe_lookup_duration_seconds summary\n");
    let _ = writeln!(
        output,
        "hostprobe_lookup_duration_seconds_sum {}",
        snapshot.duration_sum_seconds
    );
    let _ = writeln!(
        output,
        "hostprobe_lookup_duration_seconds_count {}",
        snapshot.duration_count
    );

    output
}

fn escape_label(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
