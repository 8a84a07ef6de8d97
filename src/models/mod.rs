pub mod record;
pub mod status;
pub mod inventory;

// Re-export common model types
pub use record::{ Expiration, RecordDraft, RenewalFlag, SoftwareRecord };
pub use status::{ DaysRemaining, RecordView, Urgency };
pub use inventory::{ Inventory, InventoryEntry, RecordId };
