mod commands;
mod terminal;

use commands::{CommandLine, Commands, add, departments, greet, info};
use roster_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Info => {
            info::info(&cfg);
            Ok(())
        }
        Commands::Greet { name, phrase, anonymous } => {
            let name = (!anonymous).then_some(name.as_str());
            greet::greet(name, &phrase, &cfg);
            Ok(())
        }
        Commands::Departments { reports, employees } => {
            departments::departments(reports, employees, &cfg)
        }
        Commands::Add { n1, n2 } => {
            add::add(n1, n2, &cfg);
            Ok(())
        }
    };

    if cfg.shows_headers() {
        print::rule();
    }
    result
}
