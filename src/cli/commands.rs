use clap::Parser;

use crate::io::store::{DEFAULT_PATH, LoadPolicy, SaveMode, Store};

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - a checklist in your terminal, kept in ./todo.json"), version)]
pub struct Cli {
    /// Save through a temporary file and rename instead of rewriting in place
    #[arg(long)]
    pub atomic_save: bool,

    /// Refuse to start when todo.json cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// The store for `todo.json` in the working directory, with the chosen options
    pub fn store(&self) -> Store {
        Store::new(DEFAULT_PATH)
            .with_save_mode(if self.atomic_save {
                SaveMode::Atomic
            } else {
                SaveMode::InPlace
            })
            .with_load_policy(if self.strict {
                LoadPolicy::Strict
            } else {
                LoadPolicy::Lenient
            })
    }
}
