//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Translate between plain text and Morse code
#[derive(Parser, Debug)]
#[command(name = "morse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Fail on unmapped characters or unresolvable codes instead of dropping them
    #[arg(short, long, global = true)]
    pub strict: bool,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text as Morse (reads stdin without arguments or with "-")
    Encode {
        /// Text to encode, joined by single spaces
        text: Vec<String>,
    },

    /// Decode Morse to text (reads stdin without arguments or with "-")
    Decode {
        /// Morse to decode, joined by single spaces
        #[arg(allow_hyphen_values = true)]
        morse: Vec<String>,
    },

    /// Show the character for one code
    Lookup {
        /// Code made of "." and "-"
        #[arg(allow_hyphen_values = true)]
        code: String,
    },

    /// Show the code for one character
    Code {
        /// Letter or digit
        character: char,
    },

    /// Print the trie
    Tree {
        /// Label nodes with their codes
        #[arg(long)]
        codes: bool,
    },

    /// Print the alphabet in trie order
    Table,

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file path
    Path,
}
