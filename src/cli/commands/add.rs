use anyhow::Result;

use crate::cli::ui::{ self, PromptMode };
use crate::cli::RecordFields;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::models::RecordDraft;
use license_agenda::traits::InventoryStorage;

/// Add command: missing fields are prompted for unless `no_input` is set
pub fn execute<S: InventoryStorage>(
    agenda: &mut Agenda<S>,
    fields: &RecordFields,
    no_input: bool
) -> Result<()> {
    ui::print_header("Add Software");

    let mut draft = RecordDraft::default();
    fields.apply_to(&mut draft);
    if !no_input {
        ui::prompt_draft(&mut draft, PromptMode::MissingOnly)?;
    }

    let id = agenda.add(&draft)?;
    let name = draft.name.unwrap_or_default();
    ui::print_success(&format!("Software '{}' added as #{}", name, id));

    Ok(())
}
