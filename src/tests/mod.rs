pub mod classification_tests;
pub mod query_tests;

use chrono::NaiveDate;
use log::info;
use serde_json::Map;
use std::cell::{ Cell, RefCell };

use crate::errors::{ AgendaError, AgendaResult };
use crate::models::record::{ Expiration, RenewalFlag, SoftwareRecord };
use crate::traits::InventoryStorage;

// Setup function to initialize logging
pub(crate) fn setup() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A record as it would be read from the inventory file
pub(crate) fn stored(name: &str, validade: &str, renovacao: &str) -> SoftwareRecord {
    SoftwareRecord {
        name: name.to_string(),
        expiration: Expiration::from_stored(validade),
        license_count: "1".to_string(),
        activation_info: String::new(),
        username: String::new(),
        renew: RenewalFlag::parse(renovacao),
        extra: Map::new(),
    }
}

/// Storage double that keeps records in memory and counts saves
#[derive(Default)]
pub(crate) struct MemoryStorage {
    pub records: RefCell<Vec<SoftwareRecord>>,
    pub saves: Cell<usize>,
    /// When set, every save fails with a storage error
    pub fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn with_records(records: Vec<SoftwareRecord>) -> Self {
        Self { records: RefCell::new(records), ..Self::default() }
    }
}

impl InventoryStorage for MemoryStorage {
    fn load(&self) -> AgendaResult<Vec<SoftwareRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[SoftwareRecord]) -> AgendaResult<()> {
        if self.fail_saves.get() {
            return Err(AgendaError::Storage {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
