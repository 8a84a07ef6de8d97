use clap::{ Args, Parser, Subcommand };
use std::path::PathBuf;

use license_agenda::models::RecordDraft;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "license-agenda",
    about = "Tracks software license expiration dates and warns before they lapse",
    version,
    author,
    long_about = None
)]
pub struct AgendaCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    /// Evaluate expirations as of this date instead of today (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Field values shared by `add` and `edit`
#[derive(Args, Debug, Clone, Default)]
pub struct RecordFields {
    /// Software name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Expiration date (YYYY-MM-DD or DD-MM-YYYY), or "vitalício" for a lifetime license
    #[arg(short, long)]
    pub expiration: Option<String>,

    /// Number of licenses
    #[arg(long)]
    pub licenses: Option<String>,

    /// Activation mode or URL
    #[arg(short, long)]
    pub activation: Option<String>,

    /// Username the license is registered to
    #[arg(short, long)]
    pub username: Option<String>,

    /// Whether the license will be renewed (sim, nao)
    #[arg(short, long)]
    pub renew: Option<String>,
}

impl RecordFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.expiration.is_none()
            && self.licenses.is_none()
            && self.activation.is_none()
            && self.username.is_none()
            && self.renew.is_none()
    }

    /// Overwrite the draft with every field given on the command line
    pub fn apply_to(&self, draft: &mut RecordDraft) {
        let pairs = [
            (&self.name, &mut draft.name),
            (&self.expiration, &mut draft.expiration),
            (&self.licenses, &mut draft.license_count),
            (&self.activation, &mut draft.activation_info),
            (&self.username, &mut draft.username),
            (&self.renew, &mut draft.renew),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List licenses with their days remaining
    List {
        /// Case-insensitive text to look for in the software name
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter (all, upcoming, expired)
        #[arg(long, default_value = "all")]
        status: String,

        /// Sort key (date, days)
        #[arg(long, default_value = "date")]
        sort: String,

        /// Sort in descending order
        #[arg(short, long, default_value = "false")]
        desc: bool,
    },

    /// Add a software license
    Add {
        #[command(flatten)]
        fields: RecordFields,

        /// Do not prompt for missing fields
        #[arg(long, default_value = "false")]
        no_input: bool,
    },

    /// Edit a software license
    Edit {
        /// Software name or list id
        target: String,

        #[command(flatten)]
        fields: RecordFields,

        /// Do not prompt; only apply the given fields
        #[arg(long, default_value = "false")]
        no_input: bool,
    },

    /// Flip the renew flag of a software license
    Toggle {
        /// Software name or list id
        target: String,
    },

    /// Remove a software license
    Remove {
        /// Software name or list id
        target: String,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value = "false")]
        yes: bool,
    },

    /// Warn about licenses that are expired or expire within 90 days
    Check {
        /// Wait for Enter after showing the warning
        #[arg(short, long, default_value = "false")]
        wait: bool,
    },

    /// Browse and edit the inventory interactively
    Browse,
}
