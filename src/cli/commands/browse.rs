use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::cli::ui::{ self, ConsoleNotifier, PromptMode };
use license_agenda::implementations::agenda::Agenda;
use license_agenda::implementations::query::{ QueryOptions, SortKey };
use license_agenda::models::{ RecordDraft, RecordView };
use license_agenda::traits::{ ExpirationNotifier, InventoryStorage };

const ACTIONS: [&str; 10] = [
    "Search",
    "Status filter",
    "Sort by expiration date",
    "Sort by days remaining",
    "Add",
    "Edit",
    "Toggle renew",
    "Remove",
    "Show alerts",
    "Quit",
];

enum Flow {
    Continue,
    Quit,
}

/// Interactive loop over the inventory.
///
/// Failed actions are reported and the loop continues.
pub fn execute<S: InventoryStorage>(agenda: &mut Agenda<S>, today: NaiveDate) -> Result<()> {
    let mut options = QueryOptions::default();

    loop {
        let views = agenda.view(&options, today);
        ui::print_header("Software Licenses");
        ui::print_record_table(&views);
        println!();
        ui::print_result("Query", &ui::describe_query(&options));

        let choice = ui::select_action("Action", &ACTIONS)?;
        debug!("Browse action: {}", ACTIONS[choice]);

        match run_action(agenda, &mut options, &views, choice, today) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => ui::report_error(&e),
        }
    }

    Ok(())
}

fn run_action<S: InventoryStorage>(
    agenda: &mut Agenda<S>,
    options: &mut QueryOptions,
    views: &[RecordView],
    choice: usize,
    today: NaiveDate
) -> Result<Flow> {
    match choice {
        0 => {
            options.search = ui::prompt_text("Search name", Some(options.search.as_str()))?;
        }
        1 => {
            options.status = ui::select_status_filter(options.status)?;
        }
        2 => options.sort.select(SortKey::Date),
        3 => options.sort.select(SortKey::Days),
        4 => {
            let mut draft = RecordDraft::default();
            ui::prompt_draft(&mut draft, PromptMode::MissingOnly)?;
            let id = agenda.add(&draft)?;
            ui::print_success(&format!("Software '{}' added as #{}", draft.name.unwrap_or_default(), id));
        }
        5 => {
            if let Some(view) = pick(views, "Software to edit")? {
                let mut draft = agenda.draft_for(view.id)?;
                ui::prompt_draft(&mut draft, PromptMode::All)?;
                agenda.edit(view.id, &draft)?;
                ui::print_success(&format!("Software '{}' updated", draft.name.unwrap_or_default()));
            }
        }
        6 => {
            if let Some(view) = pick(views, "Software to toggle")? {
                let record = agenda.toggle_renew(view.id)?;
                ui::print_success(&format!("Renew '{}': {}", record.name, record.renew));
            }
        }
        7 => {
            if let Some(view) = pick(views, "Software to remove")? {
                if ui::confirm_action(&format!("Remove '{}'?", view.name), false)? {
                    let record = agenda.remove(view.id)?;
                    ui::print_success(&format!("Software '{}' removed", record.name));
                }
            }
        }
        8 => {
            let alerts = agenda.alerts(today);
            if alerts.is_empty() {
                ui::print_success("No licenses are expired or expiring within 90 days.");
            } else {
                ConsoleNotifier { wait: true, json: false }.notify(&alerts)?;
            }
        }
        _ => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn pick<'a>(views: &'a [RecordView], prompt: &str) -> Result<Option<&'a RecordView>> {
    if views.is_empty() {
        ui::print_warning("No software in the current view.");
        return Ok(None);
    }
    Ok(ui::select_record(prompt, views)?.map(|index| &views[index]))
}
