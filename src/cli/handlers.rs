use std::path::Path;

use tracing::warn;

use crate::io::config_io;
use crate::io::kv::FileKvStore;
use crate::io::paths;
use crate::model::config::Config;
use crate::model::list::ListStore;

use super::commands::{AddArgs, Commands};

pub fn dispatch(
    command: Commands,
    data_file_override: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_file_override);
    match command {
        Commands::List => cmd_list(&store),
        Commands::Add(args) => cmd_add(&mut store, &args),
    }
}

fn open_store(data_file_override: Option<&Path>) -> ListStore {
    let config = match config_io::load_config(&paths::config_file()) {
        Ok(c) => c,
        Err(e) => {
            warn!("config ignored: {e}");
            Config::default()
        }
    };
    let data_file = paths::resolve_data_file(data_file_override, &config);
    ListStore::load(Box::new(FileKvStore::new(&data_file)))
}

fn cmd_list(store: &ListStore) -> Result<(), Box<dyn std::error::Error>> {
    for (i, entry) in store.entries().iter().enumerate() {
        let first = entry.split('\n').next().unwrap_or("");
        let marker = if entry.contains('\n') { " …" } else { "" };
        println!("{:>3}. {first}{marker}", i + 1);
    }
    Ok(())
}

fn cmd_add(store: &mut ListStore, args: &AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err("cannot add a blank entry".into());
    }
    let index = store.insert_blank_at_head();
    store.apply_edit(index, text)?;
    Ok(())
}
