use std::process;
use log::{error, LevelFilter};

use mapbounds::utils::logger::Logger;
use mapbounds::commands::{build_cli, CommandFactory, MapBoundsCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    // Global options are read from the innermost matches
    let options = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);
    let level = if options.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let logger = match options.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::append(log_file) {
                Ok(l) => l.quiet(),
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
            Logger::console().quiet()
        }
    };

    let factory = MapBoundsCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
