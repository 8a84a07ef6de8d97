pub mod storage;
pub mod notifier;

// Re-export traits
pub use storage::InventoryStorage;
pub use notifier::ExpirationNotifier;
