pub mod list;
pub mod add;
pub mod edit;
pub mod toggle;
pub mod remove;
pub mod check;
pub mod browse;
