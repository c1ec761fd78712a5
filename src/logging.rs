//! Logger setup for the binaries.
//!
//! The terminal game owns stdout/stderr while the alternate screen is up,
//! so it only logs when given a file. The filter comes from `RUST_LOG`.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

/// Log to `path` at `info` by default. Without a path, logging stays off
/// unless `RUST_LOG` asks for it.
pub fn init_for_terminal(path: Option<&Path>) -> io::Result<()> {
    let mut builder = match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };
    install(&mut builder);
    Ok(())
}

/// Log to stderr at `warn` by default.
pub fn init_for_cli() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    install(&mut builder);
}

fn install(builder: &mut Builder) {
    // A logger may already be set (tests, embedding); keep that one.
    let _ = builder.format_timestamp_millis().try_init();
}
