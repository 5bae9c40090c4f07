//! Custom serde helpers for backend wire formats.

/// Deserializes an ISO 8601 timestamp into `DateTime<Utc>`, tolerating
/// naive datetimes.
///
/// The backend echoes trade timestamps straight from its datetime column:
/// a Postgres deployment sends an offset-bearing string, while a
/// SQLite-backed one sends a naive `"2024-07-25T10:00:00"`. Naive values
/// are taken as UTC.
pub mod timestamp_utc_or_naive {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))
    }
}
