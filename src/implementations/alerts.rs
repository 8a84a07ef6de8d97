use chrono::NaiveDate;
use log::{ debug, info, warn };
use serde::Serialize;

use crate::errors::AgendaResult;
use crate::implementations::classification::urgency_for_days;
use crate::models::inventory::{ Inventory, RecordId };
use crate::models::record::Expiration;
use crate::models::status::Urgency;
use crate::traits::{ ExpirationNotifier, InventoryStorage };

/// A license that is expired or about to expire and is still meant to be renewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpirationAlert {
    pub id: RecordId,
    pub name: String,
    /// Expiration as stored
    pub expiration: String,
    pub days_remaining: i64,
    pub urgency: Urgency,
}

/// Find alert-worthy licenses, in inventory order.
///
/// Records with an unparseable date are logged and skipped whatever their
/// renew flag; lifetime licenses never alert.
pub fn scan_expirations(inventory: &Inventory, today: NaiveDate) -> Vec<ExpirationAlert> {
    let mut alerts = Vec::new();

    for entry in inventory.entries() {
        let record = &entry.record;
        let date = match &record.expiration {
            Expiration::Date(date) => *date,
            Expiration::Lifetime(_) => {
                debug!("Skipping lifetime license: {}", record.name);
                continue;
            }
            Expiration::Unparsed(raw) => {
                warn!("Invalid date for software {}: '{}'", record.name, raw);
                continue;
            }
        };

        if !record.renew.wants_alerts() {
            debug!("Renewal declined, not alerting: {}", record.name);
            continue;
        }

        let days = (date - today).num_days();
        let urgency = urgency_for_days(days);
        if matches!(urgency, Urgency::Expired | Urgency::Warning) {
            alerts.push(ExpirationAlert {
                id: entry.id,
                name: record.name.clone(),
                expiration: record.expiration.to_stored(),
                days_remaining: days,
                urgency,
            });
        }
    }

    alerts
}

/// Body of the alert notification
pub fn format_alert_message(alerts: &[ExpirationAlert]) -> String {
    let mut message = String::from("The following licenses are expiring soon or have expired:\n\n");
    for alert in alerts {
        message.push_str(&format!("Software: {}\n", alert.name));
        message.push_str(&format!("Expiration: {}\n", alert.expiration));
        if alert.days_remaining < 0 {
            message.push_str(&format!("Expired {} day(s) ago\n", -alert.days_remaining));
        } else {
            message.push_str(&format!("Days remaining: {}\n", alert.days_remaining));
        }
        message.push_str("-------------------\n");
    }
    message
}

/// Scan the persisted inventory and notify when anything needs attention.
pub fn run_expiration_check<S, N>(
    storage: &S,
    notifier: &N,
    today: NaiveDate
) -> AgendaResult<Vec<ExpirationAlert>>
    where S: InventoryStorage, N: ExpirationNotifier
{
    let inventory = Inventory::new(storage.load()?);
    info!("Checking {} license(s) for expiration as of {}", inventory.len(), today);

    let alerts = scan_expirations(&inventory, today);
    if alerts.is_empty() {
        info!("No licenses need attention");
    } else {
        info!("{} license(s) need attention", alerts.len());
        notifier.notify(&alerts)?;
    }

    Ok(alerts)
}
