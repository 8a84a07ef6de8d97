//! Filtering and ordering of the inventory for listings.
//!
//! Views are lists of [`RecordId`]s into the inventory, never copies of records.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::implementations::classification::{ days_remaining, WARNING_WINDOW_DAYS };
use crate::models::inventory::{ Inventory, InventoryEntry, RecordId };
use crate::models::record::Expiration;

/// Sort position of lifetime licenses under the date key (9999-12-31)
pub fn lifetime_sort_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Sort position of lifetime licenses under the days key
pub const LIFETIME_SORT_DAYS: i64 = 999_999;

/// Sort position of unparseable expirations under the days key
pub const UNPARSED_SORT_DAYS: i64 = -999_999;

/// Which records to keep by expiration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Between 0 and 90 days left, inclusive
    Upcoming,
    /// Already past expiration
    Expired,
}

impl StatusFilter {
    pub const VARIANTS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Upcoming, StatusFilter::Expired];

    /// Days are only defined for dated records; lifetime and unparsed
    /// entries pass `All` and nothing else.
    pub fn matches(&self, expiration: &Expiration, today: NaiveDate) -> bool {
        let days = days_remaining(expiration, today).days();
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => matches!(days, Some(d) if (0..=WARNING_WINDOW_DAYS).contains(&d)),
            StatusFilter::Expired => matches!(days, Some(d) if d < 0),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Upcoming => write!(f, "Only upcoming"),
            StatusFilter::Expired => write!(f, "Only expired"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(StatusFilter::All),
            "upcoming" | "proximos" | "próximos" => Ok(StatusFilter::Upcoming),
            "expired" | "vencidos" => Ok(StatusFilter::Expired),
            _ => Err(format!("invalid status filter `{}` (all, upcoming, expired)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Expiration date
    #[default]
    Date,
    /// Days remaining until expiration
    Days,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "expiration date"),
            SortKey::Days => write!(f, "days remaining"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "validade" | "expiration" => Ok(SortKey::Date),
            "days" | "dias" | "remaining" => Ok(SortKey::Days),
            _ => Err(format!("invalid sort key `{}` (date, days)", s)),
        }
    }
}

/// Active sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: SortKey::Date, ascending: true }
    }
}

impl SortState {
    /// Selecting the active key flips direction; another key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.ascending = !self.ascending;
        } else {
            self.key = key;
            self.ascending = true;
        }
    }
}

/// Everything that shapes a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Case-insensitive substring of the name; empty matches all
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortState,
}

/// Ids of entries matching both the name search and the status filter, in inventory order
pub fn filter(
    inventory: &Inventory,
    search: &str,
    status: StatusFilter,
    today: NaiveDate
) -> Vec<RecordId> {
    let needle = search.trim().to_lowercase();
    inventory
        .entries()
        .iter()
        .filter(|entry| needle.is_empty() || entry.record.name.to_lowercase().contains(&needle))
        .filter(|entry| status.matches(&entry.record.expiration, today))
        .map(|entry| entry.id)
        .collect()
}

fn date_key(expiration: &Expiration) -> NaiveDate {
    match expiration {
        Expiration::Date(date) => *date,
        Expiration::Lifetime(_) => lifetime_sort_date(),
        Expiration::Unparsed(_) => NaiveDate::MIN,
    }
}

fn days_key(expiration: &Expiration, today: NaiveDate) -> i64 {
    match expiration {
        Expiration::Date(date) => (*date - today).num_days(),
        Expiration::Lifetime(_) => LIFETIME_SORT_DAYS,
        Expiration::Unparsed(_) => UNPARSED_SORT_DAYS,
    }
}

fn compare(a: &InventoryEntry, b: &InventoryEntry, key: SortKey, today: NaiveDate) -> Ordering {
    let (a, b) = (&a.record.expiration, &b.record.expiration);
    match key {
        SortKey::Date => date_key(a).cmp(&date_key(b)),
        SortKey::Days => days_key(a, today).cmp(&days_key(b, today)),
    }
}

/// Stable sort of a view. Ids missing from the inventory are dropped.
pub fn sort(inventory: &Inventory, ids: &[RecordId], state: SortState, today: NaiveDate) -> Vec<RecordId> {
    let mut entries: Vec<&InventoryEntry> = ids
        .iter()
        .filter_map(|id| inventory.get(*id))
        .collect();

    // Descending reverses the comparator rather than the result, so ties keep their order.
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, state.key, today);
        if state.ascending { ordering } else { ordering.reverse() }
    });

    entries.into_iter().map(|entry| entry.id).collect()
}

/// Filter then sort
pub fn apply_query(inventory: &Inventory, options: &QueryOptions, today: NaiveDate) -> Vec<RecordId> {
    let ids = filter(inventory, &options.search, options.status, today);
    sort(inventory, &ids, options.sort, today)
}
