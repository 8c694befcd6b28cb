use std::process::exit;

use clap::Parser;

use jot::cli::{Cli, handlers};
use jot::{logging, tui};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_default() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let data_file = cli.data_file.as_deref();
    let result = match cli.command {
        None => tui::run(data_file),
        Some(command) => handlers::dispatch(command, data_file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        exit(1);
    }
}
