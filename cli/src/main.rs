mod cli;
mod commands;
mod term;

use clap::Parser;
use gstash::utils::logger;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::cli::{Cli, Commands};
use crate::commands::CliCommand;
use crate::term::logger::TERM_LOGGER;

fn main() {
    init_log();
    logger::set_logger(&TERM_LOGGER);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Save(command) => command.exec(),
        Commands::KeepIndex(command) => command.exec(),
        Commands::IncludeUntracked(command) => command.exec(),
        Commands::Drop(command) => command.exec(),
        Commands::Pop(command) => command.exec(),
        Commands::Apply(command) => command.exec(),
        Commands::Show(command) => command.exec(),
        Commands::Hash(command) => command.exec(),
        Commands::Staged(command) => command.exec(),
        Commands::Unstaged(command) => command.exec(),
        Commands::Rename(command) => command.exec(),
    };

    match result {
        Ok(message) => println!("{}", message),
        Err(err) => {
            logger::error(err.to_string());
            std::process::exit(1);
        }
    }
}

// stdout only carries the command result, everything else goes to stderr
fn init_log() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info));

    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}
