use anyhow::Result;

use crate::cli::ui;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::traits::InventoryStorage;

/// Remove command; asks for confirmation unless `yes` is set
pub fn execute<S: InventoryStorage>(agenda: &mut Agenda<S>, target: &str, yes: bool) -> Result<()> {
    let id = agenda.resolve(target)?;
    let name = agenda.record(id)?.name.clone();

    if !yes && !ui::confirm_action(&format!("Remove '{}'?", name), false)? {
        ui::print_info("Nothing removed.");
        return Ok(());
    }

    agenda.remove(id)?;
    ui::print_success(&format!("Software '{}' removed", name));

    Ok(())
}
