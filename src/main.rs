use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_add_command, handle_list_command, handle_summary_command, Shell};
use expense_tracker::config::{logging, paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Personal expense log with category and period summaries",
    long_about = "Records expenses in a JSON file and summarizes them by category. \
                  Run without a command to use the interactive menu."
)]
struct Cli {
    /// Expense file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "interactive")]
    Shell,

    /// Record an expense
    Add {
        /// Amount spent (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        description: String,
        /// Food, Transportation, Entertainment, Utilities, Other (or 1-5)
        #[arg(short, long)]
        category: String,
    },

    /// List all recorded expenses
    List,

    /// Summarize expenses by category and period
    #[command(alias = "analyze")]
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Also write the summary to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level);

    let store = ExpenseStore::new(settings.resolve_expenses_file(&paths, cli.file));

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Shell::new(&store, stdin.lock(), stdout.lock()).run()?;
        }
        Commands::Add {
            amount,
            description,
            category,
        } => {
            handle_add_command(&store, &amount, &description, &category)?;
        }
        Commands::List => {
            handle_list_command(&store)?;
        }
        Commands::Summary { json, output } => {
            handle_summary_command(
                &store,
                Local::now().naive_local(),
                json,
                output.as_deref(),
            )?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Initialized expense tracker at: {}", paths.base_dir().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Expense file:  {}", store.path().display());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expense file:   {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Initialized: {}", paths.is_initialized());
            println!("  Log level:   {}", settings.log_level);
        }
    }

    Ok(())
}
