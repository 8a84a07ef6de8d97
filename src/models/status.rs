use serde::{ Serialize, Serializer };
use std::fmt;

use crate::models::inventory::RecordId;

/// How close a license is to expiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Ok,
    Warning,
    Expired,
    /// Expiration could not be parsed
    Unknown,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Ok => write!(f, "ok"),
            Urgency::Warning => write!(f, "warning"),
            Urgency::Expired => write!(f, "expired"),
            Urgency::Unknown => write!(f, "unknown"),
        }
    }
}

/// Days left until expiration, as shown in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysRemaining {
    Days(i64),
    Infinite,
    Unknown,
}

impl DaysRemaining {
    pub fn days(&self) -> Option<i64> {
        match self {
            DaysRemaining::Days(days) => Some(*days),
            _ => None,
        }
    }
}

impl fmt::Display for DaysRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysRemaining::Days(days) => write!(f, "{}", days),
            DaysRemaining::Infinite => write!(f, "∞"),
            DaysRemaining::Unknown => write!(f, "?"),
        }
    }
}

impl Serialize for DaysRemaining {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DaysRemaining::Days(days) => serializer.serialize_i64(*days),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// A classified inventory row ready for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub id: RecordId,
    pub name: String,
    pub expiration: String,
    pub days_remaining: DaysRemaining,
    pub urgency: Urgency,
    pub license_count: String,
    pub activation_info: String,
    pub username: String,
    pub renew: String,
    pub renew_checked: bool,
}
