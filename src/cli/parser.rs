use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for ragenda
/// Persian (Jalali) agenda calendar for the terminal
#[derive(Parser)]
#[command(
    name = "ragenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "A Persian (Jalali) agenda calendar: month grids, days-remaining badges and birthdays",
    long_about = None
)]
pub struct Cli {
    /// Override the events JSON file ("-" reads stdin)
    #[arg(global = true, long = "events", value_name = "FILE")]
    pub events: Option<String>,

    /// Teachers JSON used to show teacher names instead of codes
    #[arg(global = true, long = "teachers", value_name = "FILE")]
    pub teachers: Option<String>,

    /// Courses JSON used to show course names instead of codes
    #[arg(global = true, long = "courses", value_name = "FILE")]
    pub courses: Option<String>,

    /// Classes JSON used to show class names instead of codes
    #[arg(global = true, long = "classes", value_name = "FILE")]
    pub classes: Option<String>,

    /// Pin "today" (YYYY-MM-DD or Jalali YYYY/MM/DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init {
        /// Events JSON file to store in the configuration
        #[arg(long = "events-file", value_name = "FILE")]
        events_file: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Convert Persian / Arabic-Indic digits to ASCII
    Normalize {
        /// Text to normalize (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Convert between Gregorian (YYYY-MM-DD) and Jalali (YYYY/MM/DD)
    Convert {
        /// Date to convert; the separator decides the direction
        date: String,
    },

    /// Days from today to a Jalali date, with its badge
    Days {
        /// Event date (YYYY/MM/DD, any digit script)
        date: String,

        /// Use the legacy 365-day approximation instead of the real calendar
        #[arg(long)]
        approximate: bool,
    },

    /// Print the Saturday-first month grid
    Grid {
        /// Gregorian month to display (YYYY-MM); defaults to the current month
        #[arg(long, short = 'm', value_name = "YYYY-MM")]
        month: Option<String>,

        /// Go back N months from the selected month
        #[arg(long, value_name = "N", conflicts_with = "next")]
        prev: Option<u32>,

        /// Go forward N months from the selected month
        #[arg(long, value_name = "N")]
        next: Option<u32>,

        /// Only show events whose title, description or date contains TEXT
        #[arg(long, short = 'f', value_name = "TEXT", default_value = "")]
        filter: String,

        /// Only show events of the teacher with this code
        #[arg(long, value_name = "CODE")]
        teacher: Option<String>,
    },

    /// List the events of a month with their days-remaining badges
    Agenda {
        /// Gregorian month to display (YYYY-MM); defaults to the current month
        #[arg(long, short = 'm', value_name = "YYYY-MM")]
        month: Option<String>,

        /// Only show events whose title, description or date contains TEXT
        #[arg(long, short = 'f', value_name = "TEXT", default_value = "")]
        filter: String,

        /// Only show events of the teacher with this code
        #[arg(long, value_name = "CODE")]
        teacher: Option<String>,

        /// Extra event fields to show as columns (e.g. teacherCode, timeSlot)
        #[arg(long = "field", value_name = "NAME")]
        fields: Vec<String>,

        /// Print the labeled events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Days until the next birthday and current age for a Jalali birth date
    Birthday {
        /// Birth date (YYYY/MM/DD, any digit script)
        date: String,
    },
}
