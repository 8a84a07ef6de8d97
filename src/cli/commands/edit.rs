use anyhow::Result;

use crate::cli::ui::{ self, PromptMode };
use crate::cli::RecordFields;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::traits::InventoryStorage;

/// Edit command.
///
/// With no field flags every field is prompted, pre-filled with its current
/// value. The record is only changed if all fields validate.
pub fn execute<S: InventoryStorage>(
    agenda: &mut Agenda<S>,
    target: &str,
    fields: &RecordFields,
    no_input: bool
) -> Result<()> {
    let id = agenda.resolve(target)?;
    let mut draft = agenda.draft_for(id)?;

    ui::print_header(&format!("Edit Software #{}", id));

    if fields.is_empty() {
        if no_input {
            ui::print_warning("Nothing to change; pass field options or drop --no-input.");
            return Ok(());
        }
        ui::prompt_draft(&mut draft, PromptMode::All)?;
    } else {
        fields.apply_to(&mut draft);
    }

    agenda.edit(id, &draft)?;
    let name = draft.name.unwrap_or_default();
    ui::print_success(&format!("Software '{}' updated", name));

    Ok(())
}
