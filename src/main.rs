use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};

mod cli;
use cli::Cli;

fn configure_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf, "{} [{}] {}", record.target(), record.level(), record.args())
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    configure_logger(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    match cli.execute(io::stdin()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
