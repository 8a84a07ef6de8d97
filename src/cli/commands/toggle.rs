use anyhow::Result;

use crate::cli::ui;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::traits::InventoryStorage;

pub fn execute<S: InventoryStorage>(agenda: &mut Agenda<S>, target: &str) -> Result<()> {
    let id = agenda.resolve(target)?;
    let record = agenda.toggle_renew(id)?;

    let mark = if record.renew.is_checked() { "[x]" } else { "[ ]" };
    ui::print_success(&format!("{} Renew '{}': {}", mark, record.name, record.renew));

    Ok(())
}
