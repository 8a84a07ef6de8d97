use colored::*;
use console::{ pad_str, Alignment, Term };
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Select };
use textwrap::wrap;

use license_agenda::errors::{ AgendaError, AgendaResult, ErrorSeverity, RecoverableError };
use license_agenda::implementations::alerts::{ format_alert_message, ExpirationAlert };
use license_agenda::implementations::query::{ QueryOptions, StatusFilter };
use license_agenda::models::{ RecordDraft, RecordView, Urgency };
use license_agenda::traits::ExpirationNotifier;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn terminal_width() -> usize {
    Term::stdout().size().1 as usize
}

fn to_io(e: dialoguer::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = terminal_width();
    for line in text.lines() {
        if line.starts_with('-') {
            println!("{}", line.dimmed());
        } else {
            for wrapped_line in wrap(line, width.saturating_sub(4).max(20)) {
                println!("{}", wrapped_line);
            }
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Report a command failure, with a hint when the error carries one
pub fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<AgendaError>() {
        Some(agenda_error) => {
            match agenda_error.severity() {
                ErrorSeverity::Warning => print_warning(&agenda_error.to_string()),
                ErrorSeverity::Error | ErrorSeverity::Fatal => print_error(&agenda_error.to_string()),
            }
            if let Some(hint) = agenda_error.recovery_strategy() {
                print_info(&hint);
            }
        }
        None => print_error(&format!("{:#}", error)),
    }
}

fn paint(text: String, urgency: Urgency) -> ColoredString {
    match urgency {
        Urgency::Expired => text.red(),
        Urgency::Warning => text.yellow(),
        Urgency::Ok => text.green(),
        Urgency::Unknown => text.normal(),
    }
}

const COLUMNS: [(&str, usize); 8] = [
    ("#", 4),
    ("Renew", 5),
    ("Name", 22),
    ("Expiration", 12),
    ("Licenses", 8),
    ("Days", 7),
    ("Activation", 34),
    ("Username", 18),
];

fn row(cells: [&str; 8]) -> String {
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| pad_str(cell, *width, Alignment::Left, Some("…")).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the license table, one colored row per record
pub fn print_record_table(views: &[RecordView]) {
    if views.is_empty() {
        print_info("No software matches the current filter.");
        return;
    }

    let headers = COLUMNS.map(|(title, _)| title);
    println!("{}", row(headers).bold());

    for view in views {
        let id = view.id.to_string();
        let renew = if view.renew_checked { "[x]" } else { "[ ]" };
        let days = view.days_remaining.to_string();
        let line = row([
            id.as_str(),
            renew,
            view.name.as_str(),
            view.expiration.as_str(),
            view.license_count.as_str(),
            days.as_str(),
            view.activation_info.as_str(),
            view.username.as_str(),
        ]);
        println!("{}", paint(line, view.urgency));
    }
}

/// One-line summary of the active filter and sort
pub fn describe_query(options: &QueryOptions) -> String {
    let arrow = if options.sort.ascending { "↑" } else { "↓" };
    let search = if options.search.is_empty() { "-".to_string() } else { format!("'{}'", options.search) };
    format!(
        "Search: {} | Status: {} | Sort: {} {}",
        search,
        options.status,
        options.sort.key,
        arrow
    )
}

/// Ask for one line of text, optionally pre-filled
pub fn prompt_text(prompt: &str, initial: Option<&str>) -> std::io::Result<String> {
    let theme = get_theme();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt).allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    input.interact_text().map_err(to_io)
}

/// How to walk the draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Ask only for fields that have no value yet
    MissingOnly,
    /// Ask for every field, showing the current value
    All,
}

/// Prompt for the draft's fields in form order
pub fn prompt_draft(draft: &mut RecordDraft, mode: PromptMode) -> std::io::Result<()> {
    let fields: [(&str, &mut Option<String>); 6] = [
        ("Software name", &mut draft.name),
        ("Expiration date (YYYY-MM-DD, DD-MM-YYYY or vitalício)", &mut draft.expiration),
        ("Number of licenses", &mut draft.license_count),
        ("Activation (mode or URL)", &mut draft.activation_info),
        ("Username", &mut draft.username),
        ("Will it be renewed? (sim/nao)", &mut draft.renew),
    ];

    for (prompt, slot) in fields {
        match mode {
            PromptMode::MissingOnly if slot.is_some() => continue,
            _ => {}
        }
        let value = prompt_text(prompt, slot.as_deref())?;
        *slot = Some(value);
    }
    Ok(())
}

/// Pick one record from a listing
pub fn select_record(prompt: &str, views: &[RecordView]) -> std::io::Result<Option<usize>> {
    if views.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = views
        .iter()
        .map(|view| format!("#{} {} ({})", view.id, view.name, view.expiration))
        .collect();

    Select::with_theme(&get_theme())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(to_io)
}

/// Interactive selection of the status filter
pub fn select_status_filter(current: StatusFilter) -> std::io::Result<StatusFilter> {
    let options = StatusFilter::VARIANTS;
    let labels: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    let default = options.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::with_theme(&get_theme())
        .with_prompt("Status")
        .items(&labels)
        .default(default)
        .interact()
        .map_err(to_io)?;

    Ok(options[selection])
}

/// Pick an item from a menu
pub fn select_action(prompt: &str, items: &[&str]) -> std::io::Result<usize> {
    Select::with_theme(&get_theme())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(to_io)
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str, default: bool) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(to_io)
}

pub fn pause() -> std::io::Result<()> {
    println!("\nPress Enter to continue...");
    let _input: String = Input::with_theme(&get_theme())
        .allow_empty(true)
        .interact()
        .map_err(to_io)?;
    Ok(())
}

/// Prints expiration alerts to the terminal
pub struct ConsoleNotifier {
    /// Block until the user acknowledges the alert
    pub wait: bool,
    pub json: bool,
}

impl ExpirationNotifier for ConsoleNotifier {
    fn notify(&self, alerts: &[ExpirationAlert]) -> AgendaResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(alerts)?);
            return Ok(());
        }

        print_header("License Expiration Warning");
        print_text(&format_alert_message(alerts));

        if self.wait {
            pause()?;
        }
        Ok(())
    }
}
