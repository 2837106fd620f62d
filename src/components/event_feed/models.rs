use serde::{Deserialize, Deserializer, Serialize};

/// Fee string the event API uses for free-of-charge events
pub const FREE_MARKER: &str = "무료";

/// Event record as returned by the event API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawEventRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub event_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub event_fee: String,
}

/// The API sends `null` for blank fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalized event shown by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventRecord {
    pub category: String,
    pub location: String,
    pub event_name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_free: bool,
    pub event_fee: Option<String>,
}

impl EventRecord {
    /// Normalize a raw record
    pub fn from_raw(raw: &RawEventRecord) -> Self {
        Self {
            category: raw.category.clone(),
            location: raw.address.clone(),
            event_name: raw.event_name.clone(),
            start_date: raw.start_date.clone(),
            end_date: raw.end_date.clone(),
            is_free: is_free_fee(&raw.event_fee),
            event_fee: if raw.event_fee.is_empty() {
                None
            } else {
                Some(raw.event_fee.clone())
            },
        }
    }
}

impl From<RawEventRecord> for EventRecord {
    fn from(raw: RawEventRecord) -> Self {
        Self::from_raw(&raw)
    }
}

/// An event is free when its fee is empty or exactly the free marker
pub fn is_free_fee(fee: &str) -> bool {
    fee.is_empty() || fee == FREE_MARKER
}

/// Normalize a full API response
pub fn normalize_all(raw: &[RawEventRecord]) -> Vec<EventRecord> {
    raw.iter().map(EventRecord::from_raw).collect()
}
