//! 응답 DTO의 시각 직렬화 형식
//!
//! API 응답의 시각 필드는 `yyyy-MM-ddTHH:mm:ss` 형식(UTC, 초 단위)으로 직렬화됩니다.
//! `#[serde(with = "crate::utils::date_format")]`로 사용합니다.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format(value: &DateTime<Utc>) -> String {
    value.format(FORMAT).to_string()
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "crate::utils::date_format")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_serializes_without_fraction_or_offset() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 5).unwrap();
        let json = serde_json::to_string(&Stamp { at }).unwrap();

        assert_eq!(json, r#"{"at":"2024-01-01T09:30:05"}"#);
    }

    #[test]
    fn test_rejects_other_formats() {
        let result: Result<Stamp, _> = serde_json::from_str(r#"{"at":"01/01/2024"}"#);
        assert!(result.is_err());
    }
}
