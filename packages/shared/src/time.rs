//! Time-related utilities.

use chrono::{DateTime, TimeZone, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to UTC RFC 3339 format
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    let dt: DateTime<Utc> = Utc
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_default();
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_utc_timestamp_returns_non_zero_timestamp() {
        // テスト項目: 0 以外のタイムスタンプが返される
        // given (前提条件):
        // when (操作):
        let timestamp = get_utc_timestamp();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_get_utc_timestamp_is_monotonic_enough() {
        // テスト項目: 連続で呼び出したタイムスタンプが減少しない
        // given (前提条件):
        let first = get_utc_timestamp();

        // when (操作):
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = get_utc_timestamp();

        // then (期待する結果):
        assert!(second >= first);
    }

    #[test]
    fn test_timestamp_to_rfc3339_epoch() {
        // テスト項目: エポックが RFC 3339 形式で返される
        // given (前提条件):
        let timestamp = 0;

        // when (操作):
        let result = timestamp_to_rfc3339(timestamp);

        // then (期待する結果):
        assert_eq!(result, "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_to_rfc3339_keeps_milliseconds() {
        // テスト項目: ミリ秒が保持される
        // given (前提条件):
        let timestamp = 1_700_000_000_123;

        // when (操作):
        let result = timestamp_to_rfc3339(timestamp);

        // then (期待する結果):
        assert_eq!(result, "2023-11-14T22:13:20.123+00:00");
    }
}
