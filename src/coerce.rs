use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// 把任意JSON值解析成epoch秒；解析失败返回None，不会panic
///
/// 非字符串值先转成字符串再解析。毫秒按向下取整折算到秒，
/// 1970年之前的时间向负方向取整。
pub fn epoch_secs(value: &Value) -> Option<i64> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };
    parse_millis(&text).map(|ms| ms.div_euclid(1000))
}

fn parse_millis(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }

    // Influx emits RFC3339, but tolerate naive datetimes (assumed UTC)
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    None
}

/// 把JSON值转成有限浮点数；null、布尔值、非数字字符串都返回None
pub fn finite_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rfc3339_to_epoch_secs() {
        assert_eq!(epoch_secs(&json!("2024-01-01T00:00:00Z")), Some(1704067200));
        assert_eq!(
            epoch_secs(&json!("2024-01-01T08:00:00+08:00")),
            Some(1704067200)
        );
    }

    #[test]
    fn test_millis_floored_to_secs() {
        assert_eq!(
            epoch_secs(&json!("2024-01-01T00:00:00.999Z")),
            Some(1704067200)
        );
        // half a second before the epoch floors to -1, not 0
        assert_eq!(epoch_secs(&json!("1969-12-31T23:59:59.500Z")), Some(-1));
    }

    #[test]
    fn test_naive_and_date_only_forms() {
        assert_eq!(epoch_secs(&json!("2024-01-02T00:00:00")), Some(1704153600));
        assert_eq!(epoch_secs(&json!("2024-01-02 00:00:00")), Some(1704153600));
        assert_eq!(epoch_secs(&json!("2024-01-02")), Some(1704153600));
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(epoch_secs(&json!("not-a-date")), None);
        assert_eq!(epoch_secs(&json!("")), None);
        assert_eq!(epoch_secs(&json!(null)), None);
        // stringified numbers are not calendar datetimes
        assert_eq!(epoch_secs(&json!(1704067200)), None);
        assert_eq!(epoch_secs(&json!({"nested": true})), None);
    }

    #[test]
    fn test_finite_f64_from_number_and_string() {
        assert_eq!(finite_f64(&json!(105.5)), Some(105.5));
        assert_eq!(finite_f64(&json!("55.2")), Some(55.2));
        assert_eq!(finite_f64(&json!(" 7 ")), Some(7.0));
        assert_eq!(finite_f64(&json!("1e3")), Some(1000.0));
    }

    #[test]
    fn test_finite_f64_rejects_non_numeric() {
        assert_eq!(finite_f64(&json!(null)), None);
        assert_eq!(finite_f64(&json!(true)), None);
        assert_eq!(finite_f64(&json!("abc")), None);
        assert_eq!(finite_f64(&json!("")), None);
        assert_eq!(finite_f64(&json!("NaN")), None);
        assert_eq!(finite_f64(&json!("inf")), None);
        assert_eq!(finite_f64(&json!([1, 2])), None);
    }
}
