use crate::errors::AgendaResult;
use crate::models::record::SoftwareRecord;

/// Durable home of the inventory
pub trait InventoryStorage {
    /// Load every record in persisted order
    fn load(&self) -> AgendaResult<Vec<SoftwareRecord>>;

    /// Overwrite the stored inventory with `records`
    fn save(&self, records: &[SoftwareRecord]) -> AgendaResult<()>;
}
