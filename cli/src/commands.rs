pub mod add;
pub mod departments;
pub mod greet;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};

pub const DEFAULT_NAME: &str = "Geo";
pub const DEFAULT_PHRASE: &str = "Ayy whaddup, it's ya boi";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Greeters and department rosters.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Reduce output (-q hides headers, -qq also hides details)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the tool
    #[command(alias = "i")]
    Info,
    /// Greet someone through the Greetable contract
    #[command(alias = "g")]
    Greet {
        /// Name of the greeter
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,
        /// Phrase placed before the name
        #[arg(short, long, default_value = DEFAULT_PHRASE)]
        phrase: String,
        /// Greet without a name
        #[arg(long, conflicts_with = "name")]
        anonymous: bool,
    },
    /// Run the IT and accounting department flow
    #[command(alias = "d")]
    Departments {
        /// Report to file with accounting, repeatable
        #[arg(short, long = "report")]
        reports: Vec<String>,
        /// Employee to hire into both departments, repeatable
        #[arg(short, long = "employee")]
        employees: Vec<String>,
    },
    /// Add two numbers
    #[command(alias = "a")]
    Add {
        #[arg(allow_negative_numbers = true)]
        n1: f64,
        #[arg(allow_negative_numbers = true)]
        n2: f64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
