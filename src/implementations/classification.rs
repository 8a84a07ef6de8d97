use chrono::NaiveDate;

use crate::models::inventory::InventoryEntry;
use crate::models::record::Expiration;
use crate::models::status::{ DaysRemaining, RecordView, Urgency };

/// Licenses expiring within this many days (inclusive) need attention
pub const WARNING_WINDOW_DAYS: i64 = 90;

pub fn days_remaining(expiration: &Expiration, today: NaiveDate) -> DaysRemaining {
    match expiration {
        Expiration::Date(date) => DaysRemaining::Days((*date - today).num_days()),
        Expiration::Lifetime(_) => DaysRemaining::Infinite,
        Expiration::Unparsed(_) => DaysRemaining::Unknown,
    }
}

/// Bucket a day count: negative is expired, up to the window is a warning.
pub fn urgency_for_days(days: i64) -> Urgency {
    if days < 0 {
        Urgency::Expired
    } else if days <= WARNING_WINDOW_DAYS {
        Urgency::Warning
    } else {
        Urgency::Ok
    }
}

pub fn classify(expiration: &Expiration, today: NaiveDate) -> Urgency {
    match days_remaining(expiration, today) {
        DaysRemaining::Days(days) => urgency_for_days(days),
        DaysRemaining::Infinite => Urgency::Ok,
        DaysRemaining::Unknown => Urgency::Unknown,
    }
}

/// Build the presentation row for one entry
pub fn describe(entry: &InventoryEntry, today: NaiveDate) -> RecordView {
    let record = &entry.record;
    RecordView {
        id: entry.id,
        name: record.name.clone(),
        expiration: record.expiration.to_display(),
        days_remaining: days_remaining(&record.expiration, today),
        urgency: classify(&record.expiration, today),
        license_count: record.license_count.clone(),
        activation_info: record.activation_info.clone(),
        username: record.username.clone(),
        renew: record.renew.as_str().to_string(),
        renew_checked: record.renew.is_checked(),
    }
}
