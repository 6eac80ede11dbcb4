//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env, Target};

fn main() {
    init_logging();
    if let Err(err) = courier_cli::run() {
        eprintln!("courier: {err}");
        std::process::exit(1);
    }
}

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    if let Err(err) = builder.try_init() {
        eprintln!("courier: logging disabled: {err}");
    }
}
