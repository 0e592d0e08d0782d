use std::{env, fs::File, path::Path};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const BASE_LEVEL: LevelFilter = LevelFilter::Info;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => BASE_LEVEL,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Routes logs away from the terminal the slides are drawn on.
///
/// With `--log-file` everything goes to that file. Without it logging stays
/// off unless `RUST_LOG` is set, in which case stderr is used.
pub fn init(log_file: Option<&Path>, verbose: u8) -> Result<()> {
    let mut builder = Builder::from_env(Env::default());
    let from_env = env::var_os("RUST_LOG").is_some();

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
            if !from_env {
                builder.filter_level(level_for(verbose));
            }
        }
        None if from_env => {
            builder.target(Target::Stderr);
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("logger already installed")
}
