use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for obralog
/// CLI application to track construction projects with SQLite
#[derive(Parser)]
#[command(
    name = "obralog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Construction project ledger: workers, daily work logs, expenses and profitability reports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Projects ("obras"): create, close, list, inspect, delete
    Project {
        #[command(subcommand)]
        action: ProjectCmd,
    },

    /// Workers: create, list, delete
    Worker {
        #[command(subcommand)]
        action: WorkerCmd,
    },

    /// Daily work logs ("partes"): hours of a worker on a project
    Parts {
        #[command(subcommand)]
        action: PartsCmd,
    },

    /// Project expenses ("gastos")
    Expense {
        #[command(subcommand)]
        action: ExpenseCmd,
    },

    /// Show the profitability report
    Report {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(long = "chart", help = "Draw a profitability bar chart below the table")]
        chart: bool,
    },

    /// Export the profitability report
    Export {
        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(
            long,
            value_enum,
            help = "Output format (default: from the file extension, else csv)"
        )]
        format: Option<ExportFormat>,

        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

/// Report scope shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    #[arg(
        long,
        short = 'm',
        value_name = "MONTH",
        conflicts_with = "all_time",
        help = "Month to report: 1-12, a month name or YYYY-MM (default: current month)"
    )]
    pub month: Option<String>,

    #[arg(long = "all-time", help = "Report over every record, no month filter")]
    pub all_time: bool,

    #[arg(
        long = "include-finished",
        help = "Also list finished projects closed outside the selected month"
    )]
    pub include_finished: bool,

    #[arg(long, short = 'p', value_name = "PROJECT", help = "Single project (id or name)")]
    pub project: Option<String>,
}

#[derive(Subcommand)]
pub enum ProjectCmd {
    /// Create a project
    Add {
        name: String,

        #[arg(long, help = "Agreed budget")]
        budget: f64,

        #[arg(
            long,
            help = "not_started | in_progress | blocked | finished (Spanish labels accepted)"
        )]
        status: Option<String>,

        #[arg(long)]
        contractor: Option<String>,

        #[arg(long = "start", value_name = "YYYY-MM-DD")]
        start_date: Option<String>,

        #[arg(
            long = "end",
            value_name = "YYYY-MM-DD",
            help = "Completion date, only with --status finished (default: today)"
        )]
        end_date: Option<String>,
    },

    /// Mark a project as finished
    Close {
        project: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Completion date (default: today)")]
        date: Option<String>,
    },

    /// List projects
    List {
        #[arg(long)]
        status: Option<String>,
    },

    /// Project dashboard: lifetime totals and work log detail
    Show {
        project: String,

        #[arg(long, value_name = "FILE", help = "Export the work log detail (csv or json)")]
        export: Option<String>,

        #[arg(long, value_enum, requires = "export")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Delete a project without work logs or expenses
    Del { project: String },
}

#[derive(Subcommand)]
pub enum WorkerCmd {
    /// Register a worker
    Add {
        name: String,

        #[arg(long = "national-id", help = "DNI / NIE")]
        national_id: Option<String>,

        #[arg(long, help = "oficial, peón, ...")]
        role: Option<String>,
    },

    /// List workers
    List,

    /// Delete a worker without work logs
    Del { worker: String },
}

#[derive(Subcommand)]
pub enum PartsCmd {
    /// Log hours of a worker on a project
    Add {
        worker: String,

        project: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Work date (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Hours worked (default: suggested hours for the day)")]
        hours: Option<f64>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List work logs
    List {
        #[arg(long, short = 'p')]
        project: Option<String>,
    },

    /// Delete a work log by id
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum ExpenseCmd {
    /// Record an expense
    Add {
        project: String,

        #[arg(
            long,
            help = "per_diem | fuel | materials | container | other (Spanish labels accepted)"
        )]
        category: String,

        #[arg(long)]
        amount: f64,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Expense date (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Free text, only for category 'other'")]
        description: Option<String>,
    },

    /// List expenses
    List {
        #[arg(long, short = 'p')]
        project: Option<String>,
    },

    /// Delete an expense by id
    Del { id: i64 },
}
