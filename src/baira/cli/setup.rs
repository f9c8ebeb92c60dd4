use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "baira", bin_name = "baira", version)]
#[command(about = "Keep a todo list and a shopping list in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging (written to baira.log in the data directory)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the todo list (or the buy list with --buy)
    #[command(alias = "a")]
    Add {
        /// Add to the buy list instead of the todo list
        #[arg(short, long)]
        buy: bool,

        /// Item text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show both lists, or just one
    #[command(alias = "ls")]
    List {
        /// Which list to show (todo or buy)
        list: Option<String>,

        /// Print the lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an item by id or position
    #[command(alias = "rm")]
    Remove {
        /// List the item is in (todo or buy)
        list: String,

        /// Item id, or its position as shown by `baira list`
        item: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move an item to the other list
    #[command(alias = "mv")]
    Move {
        /// List the item is in now (todo or buy)
        list: String,

        /// Item id, or its position as shown by `baira list`
        item: String,
    },

    /// Delete everything in both lists
    #[command(alias = "clear")]
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (key-prefix, line-width, show-age)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,

    /// Open the interactive view
    #[command(alias = "tui")]
    Ui,
}
