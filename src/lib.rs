pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ AgendaConfig, ConfigError };
pub use errors::{ AgendaError, AgendaResult, ErrorSeverity, RecoverableError };
pub use implementations::agenda::Agenda;
pub use implementations::alerts::{
    format_alert_message,
    run_expiration_check,
    scan_expirations,
    ExpirationAlert,
};
pub use implementations::json_storage::{ InventoryDocument, JsonFileStorage };
pub use implementations::query::{
    apply_query,
    QueryOptions,
    SortKey,
    SortState,
    StatusFilter,
};
pub use models::{
    DaysRemaining,
    Expiration,
    Inventory,
    InventoryEntry,
    RecordDraft,
    RecordId,
    RecordView,
    RenewalFlag,
    SoftwareRecord,
    Urgency,
};
pub use traits::{ ExpirationNotifier, InventoryStorage };
