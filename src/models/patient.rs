//! Patient record as stored in the on-disk patient store.
//!
//! The store's schema is owned externally, so every field is decoded
//! defensively: a missing or wrong-typed field becomes `None`, never a
//! decode error. Only the top-level shape of the store is validated
//! (by the loader).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One entry of the patient store. `id` is unique within a loaded
/// collection; everything else is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub pid: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<String>,
    pub creationdate: Option<String>,
}

impl Patient {
    /// Decode a store entry with explicit field-presence checks.
    /// Returns `None` only when the entry is not a JSON object at all.
    pub fn from_value(value: &Value) -> Option<Patient> {
        let obj = value.as_object()?;
        let field = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_string);
        Some(Patient {
            id: field("_id"),
            pid: field("pid"),
            firstname: field("firstname"),
            lastname: field("lastname"),
            sex: field("sex"),
            birthday: field("birthday"),
            creationdate: field("creationdate"),
        })
    }

    /// Creation timestamp used as the directory sort key.
    /// Absent or unparseable dates pin to the Unix epoch so every record
    /// has a deterministic (oldest) position.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.creationdate
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Age in whole years as of `today`, derived from `birthday`.
    pub fn age_years(&self, today: NaiveDate) -> Option<u32> {
        let born = parse_date(self.birthday.as_deref()?)?;
        today.years_since(born)
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD`.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    parse_date(raw).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Date-only, or the date part of a full timestamp.
    NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d").ok()
}
