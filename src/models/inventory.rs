use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::errors::{ AgendaError, AgendaResult };
use crate::models::record::{ RecordDraft, SoftwareRecord };

/// Session-stable handle to an inventory entry.
///
/// Assigned in file order on load and on add; never reused and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub id: RecordId,
    pub record: SoftwareRecord,
}

/// Ordered collection of license records; order is the persisted order
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
    last_id: u64,
}

impl Inventory {
    pub fn new(records: Vec<SoftwareRecord>) -> Self {
        let mut inventory = Self { entries: Vec::with_capacity(records.len()), last_id: 0 };
        for record in records {
            inventory.push(record);
        }
        inventory
    }

    fn push(&mut self, record: SoftwareRecord) -> RecordId {
        self.last_id += 1;
        let id = RecordId(self.last_id);
        self.entries.push(InventoryEntry { id, record });
        id
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&InventoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// First entry with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<RecordId> {
        self.entries
            .iter()
            .find(|entry| entry.record.name == name)
            .map(|entry| entry.id)
    }

    /// Records in persisted order, for writing back to storage
    pub fn records(&self) -> Vec<SoftwareRecord> {
        self.entries.iter().map(|entry| entry.record.clone()).collect()
    }

    pub fn add(&mut self, draft: &RecordDraft) -> AgendaResult<RecordId> {
        let record = draft.validate()?;
        Ok(self.push(record))
    }

    /// Replace all editable fields at once. Unknown stored keys are kept, as
    /// are a license count or renew flag left blank in the draft.
    pub fn edit(&mut self, id: RecordId, draft: &RecordDraft) -> AgendaResult<()> {
        let entry = self.entry_mut(id)?;
        let mut record = draft.validate_update(&entry.record)?;
        record.extra = std::mem::take(&mut entry.record.extra);
        entry.record = record;
        Ok(())
    }

    /// Flip the renew flag and return its new value
    pub fn toggle_renew(&mut self, id: RecordId) -> AgendaResult<&SoftwareRecord> {
        let entry = self.entry_mut(id)?;
        entry.record.renew = entry.record.renew.toggled();
        Ok(&entry.record)
    }

    pub fn remove(&mut self, id: RecordId) -> AgendaResult<SoftwareRecord> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AgendaError::RecordNotFound(format!("#{}", id)))?;
        Ok(self.entries.remove(position).record)
    }

    fn entry_mut(&mut self, id: RecordId) -> AgendaResult<&mut InventoryEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| AgendaError::RecordNotFound(format!("#{}", id)))
    }
}
