use std::process;

use clap::Parser;

use sincity_ascii::cli::{commands, Args, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Charsets) => {
            commands::run_charsets();
            Ok(())
        }
        None => commands::run_convert(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
