use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "calcestate",
    about = "Real-estate ratio calculator with a local property notebook",
    version,
    author,
    long_about = None
)]
pub struct CalcEstateCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved properties and liked ratios
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CalcEstateCli {
    pub fn json_output(&self) -> bool {
        self.output_format.eq_ignore_ascii_case("json")
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the ratio catalog
    Ratios {
        #[command(subcommand)]
        action: RatioAction,
    },

    /// Compute a ratio from its inputs
    Calc {
        /// Ratio id (see `ratios list`)
        id: u32,

        /// Input as name=value; series inputs take comma-separated values
        #[arg(short, long = "input")]
        inputs: Vec<String>,

        /// Prompt for every input not given with --input
        #[arg(long, default_value = "false")]
        interactive: bool,

        /// Save the result onto this property
        #[arg(short, long)]
        save_to: Option<String>,
    },

    /// Manage saved properties
    Property {
        #[command(subcommand)]
        action: PropertyAction,
    },

    /// Manage data fields on a property
    Field {
        #[command(subcommand)]
        action: FieldAction,
    },
}

#[derive(Subcommand)]
pub enum RatioAction {
    /// List ratios
    List {
        /// Only show liked ratios
        #[arg(long, default_value = "false")]
        liked: bool,

        /// Filter by title, description or category
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a ratio's description, formula and inputs
    Show {
        id: u32,
    },

    /// Toggle whether a ratio is liked
    Like {
        id: u32,
    },
}

#[derive(Subcommand)]
pub enum PropertyAction {
    /// List properties, newest first
    List,

    /// Show a property and its fields
    Show {
        id: String,
    },

    /// Create a property
    Create {
        name: String,

        /// Hex color (#RRGGBB) or palette number 1-8
        #[arg(long)]
        color: Option<String>,
    },

    /// Rename or recolor a property
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        /// Hex color (#RRGGBB) or palette number 1-8
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a property and all of its fields
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value = "false")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum FieldAction {
    /// Append a field to a property
    Add {
        property_id: String,

        #[arg(long)]
        label: String,

        #[arg(long, default_value = "")]
        value: String,

        /// text, number, date or boolean
        #[arg(short = 't', long = "type", default_value = "text")]
        field_type: String,
    },

    /// Remove a field from a property
    Delete {
        property_id: String,
        field_id: String,
    },
}
