use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tagger",
    bin_name = "tagger",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Tag files and find them with filter expressions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tag database to use (overrides TAGGER_DB and config)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Files,
    Tags,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Files => "File Commands:",
            CommandGroup::Tags => "Tag Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "remove" | "move" | "files" => Some(CommandGroup::Files),
            "set" | "unset" | "get" | "match" => Some(CommandGroup::Tags),
            "config" | "version" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Files, CommandGroup::Tags, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("tagger {version}\n"));
    output.push_str("Tag files and find them with filter expressions\n");
    output.push('\n');
    output.push_str("Usage: tagger [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Filter syntax:\n");
    output.push_str("  name                 tag is present (any value)\n");
    output.push_str("  name OP INTEGER      OP is one of == != < > <= >=\n");
    output.push_str("  a AND b, a OR b      AND binds tighter than OR\n");
    output.push_str("  ( ... )              grouping\n");

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --db <PATH>  Tag database to use\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Name of the subcommand as clap knows it
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add { .. } => "add",
        Commands::Remove { .. } => "remove",
        Commands::Move { .. } => "move",
        Commands::Files { .. } => "files",
        Commands::Set { .. } => "set",
        Commands::Unset { .. } => "unset",
        Commands::Get { .. } => "get",
        Commands::Match { .. } => "match",
        Commands::Config { .. } => "config",
        Commands::Version => "version",
        Commands::Help { .. } => "help",
    }
}

/// Prints help for a command by name, falling back to the grouped help
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a file
    #[command(display_order = 1)]
    Add {
        /// Path of the file
        path: String,
    },

    /// Forget a file and its tags
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Path of the file, or uuid:<id>
        file: String,
    },

    /// Change a file's path, keeping its tags
    #[command(alias = "mv", display_order = 3)]
    Move {
        /// Path of the file, or uuid:<id>
        file: String,

        /// New path
        new_path: String,
    },

    /// List registered files
    #[command(alias = "ls", display_order = 4)]
    Files {
        /// Show when each file was added
        #[arg(short, long)]
        long: bool,
    },

    /// Set a tag, optionally with an integer value
    #[command(display_order = 10)]
    Set {
        /// Path of the file, or uuid:<id>
        file: String,

        /// Tag name
        name: String,

        /// Integer value (omit for a plain tag)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Remove a tag
    #[command(display_order = 11)]
    Unset {
        /// Path of the file, or uuid:<id>
        file: String,

        /// Tag name
        name: String,
    },

    /// Show a file's tags
    #[command(display_order = 12)]
    Get {
        /// Path of the file, or uuid:<id>
        file: String,
    },

    /// List files matching a filter expression
    ///
    /// Everything after the first filter word is part of the filter, so
    /// options (--strict, -v, --db) must come before it.
    #[command(alias = "m", display_order = 13)]
    Match {
        /// Fail when nothing matches
        #[arg(long)]
        strict: bool,

        /// Filter words (joined with spaces), e.g. status == 1 AND draft.
        /// Options must precede them.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        filter: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (database-path, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print version
    #[command(display_order = 31)]
    Version,

    /// Print help for tagger or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
