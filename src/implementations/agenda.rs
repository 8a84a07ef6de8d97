use chrono::NaiveDate;
use log::{ info, warn };

use crate::errors::{ AgendaError, AgendaResult };
use crate::implementations::alerts::{ scan_expirations, ExpirationAlert };
use crate::implementations::classification::describe;
use crate::implementations::query::{ apply_query, QueryOptions };
use crate::models::inventory::{ Inventory, RecordId };
use crate::models::record::{ RecordDraft, SoftwareRecord };
use crate::models::status::RecordView;
use crate::traits::InventoryStorage;

/// The inventory together with the storage it is persisted to.
///
/// Every successful mutation writes the whole inventory back. A mutation
/// whose save fails leaves the inventory as it was.
pub struct Agenda<S: InventoryStorage> {
    storage: S,
    inventory: Inventory,
}

impl<S: InventoryStorage> Agenda<S> {
    pub fn open(storage: S) -> AgendaResult<Self> {
        let inventory = Inventory::new(storage.load()?);
        info!("Loaded {} software record(s)", inventory.len());
        Ok(Self { storage, inventory })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Classified rows for a listing, filtered and sorted
    pub fn view(&self, options: &QueryOptions, today: NaiveDate) -> Vec<RecordView> {
        apply_query(&self.inventory, options, today)
            .into_iter()
            .filter_map(|id| self.inventory.get(id))
            .map(|entry| describe(entry, today))
            .collect()
    }

    pub fn alerts(&self, today: NaiveDate) -> Vec<ExpirationAlert> {
        scan_expirations(&self.inventory, today)
    }

    pub fn record(&self, id: RecordId) -> AgendaResult<&SoftwareRecord> {
        self.inventory
            .get(id)
            .map(|entry| &entry.record)
            .ok_or_else(|| AgendaError::RecordNotFound(format!("#{}", id)))
    }

    pub fn find_by_name(&self, name: &str) -> AgendaResult<RecordId> {
        self.inventory
            .find_by_name(name)
            .ok_or_else(|| AgendaError::RecordNotFound(name.to_string()))
    }

    /// Resolve a user-supplied target: an exact name first, then a `#` id.
    pub fn resolve(&self, target: &str) -> AgendaResult<RecordId> {
        if let Some(id) = self.inventory.find_by_name(target) {
            return Ok(id);
        }
        target
            .trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .ok()
            .map(RecordId)
            .filter(|id| self.inventory.get(*id).is_some())
            .ok_or_else(|| AgendaError::RecordNotFound(target.to_string()))
    }

    /// Current values of a record, ready to be edited
    pub fn draft_for(&self, id: RecordId) -> AgendaResult<RecordDraft> {
        self.record(id).map(RecordDraft::from_record)
    }

    pub fn add(&mut self, draft: &RecordDraft) -> AgendaResult<RecordId> {
        let id = self.commit(|inventory| inventory.add(draft))?;
        info!("Added software #{}", id);
        Ok(id)
    }

    pub fn edit(&mut self, id: RecordId, draft: &RecordDraft) -> AgendaResult<()> {
        self.commit(|inventory| inventory.edit(id, draft))?;
        info!("Updated software #{}", id);
        Ok(())
    }

    pub fn toggle_renew(&mut self, id: RecordId) -> AgendaResult<SoftwareRecord> {
        let record = self.commit(|inventory| inventory.toggle_renew(id).cloned())?;
        info!("Renewal for '{}' set to '{}'", record.name, record.renew);
        Ok(record)
    }

    pub fn remove(&mut self, id: RecordId) -> AgendaResult<SoftwareRecord> {
        let record = self.commit(|inventory| inventory.remove(id))?;
        info!("Removed software '{}'", record.name);
        Ok(record)
    }

    /// Apply `change` to a copy of the inventory and keep it only once saved.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Inventory) -> AgendaResult<T>) -> AgendaResult<T> {
        let mut next = self.inventory.clone();
        let outcome = change(&mut next)?;
        if let Err(e) = self.storage.save(&next.records()) {
            warn!("Save failed, change discarded: {}", e);
            return Err(e);
        }
        self.inventory = next;
        Ok(outcome)
    }
}
