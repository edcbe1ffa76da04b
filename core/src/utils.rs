use chrono::Utc;

/// Epoch milliseconds, the timestamp format the upstream signs and expects.
pub fn current_time_millis() -> u64 {
    // Before 1970 only on a broken clock; clamp instead of wrapping.
    Utc::now().timestamp_millis().max(0) as u64
}

/// Short, log-safe prefix of an identifier.
pub fn short_id(id: &str) -> &str {
    let end = id.char_indices().nth(8).map(|(i, _)| i).unwrap_or(id.len());
    &id[..end]
}
