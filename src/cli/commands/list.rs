use anyhow::{ anyhow, Result };
use chrono::NaiveDate;

use crate::cli::ui;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::implementations::query::{ QueryOptions, SortKey, SortState, StatusFilter };
use license_agenda::traits::InventoryStorage;

/// List command
pub fn execute<S: InventoryStorage>(
    agenda: &Agenda<S>,
    search: Option<&str>,
    status_str: &str,
    sort_str: &str,
    descending: bool,
    json: bool,
    today: NaiveDate
) -> Result<()> {
    let status: StatusFilter = status_str.parse().map_err(|e: String| anyhow!(e))?;
    let key: SortKey = sort_str.parse().map_err(|e: String| anyhow!(e))?;

    let options = QueryOptions {
        search: search.unwrap_or_default().to_string(),
        status,
        sort: SortState { key, ascending: !descending },
    };
    let views = agenda.view(&options, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    ui::print_header("Software Licenses");
    ui::print_record_table(&views);
    println!();
    ui::print_result("Shown", &format!("{} of {}", views.len(), agenda.inventory().len()));
    ui::print_result("Query", &ui::describe_query(&options));

    Ok(())
}
