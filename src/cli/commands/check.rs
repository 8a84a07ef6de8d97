use anyhow::Result;
use chrono::NaiveDate;

use crate::cli::ui::{ self, ConsoleNotifier };
use license_agenda::implementations::alerts::run_expiration_check;
use license_agenda::traits::InventoryStorage;

/// Alert trigger meant to be run by a scheduler, e.g. at login
pub fn execute<S: InventoryStorage>(storage: &S, wait: bool, json: bool, today: NaiveDate) -> Result<()> {
    let notifier = ConsoleNotifier { wait, json };
    let alerts = run_expiration_check(storage, &notifier, today)?;

    if alerts.is_empty() {
        if json {
            println!("[]");
        } else {
            ui::print_success("No licenses are expired or expiring within 90 days.");
        }
    }

    Ok(())
}
