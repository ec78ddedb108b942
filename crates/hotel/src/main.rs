//! # hotel CLI
//!
//! A thin client over `hotelapp`. The binary only calls `cli::run()` and
//! handles process termination:
//!
//! ```text
//! cli/setup.rs    clap argument definitions
//! cli/mod.rs      config loading, logger init, dispatch to HotelApi
//! cli/render.rs   stdout output for records and user-channel messages
//! ```
//!
//! Log-channel messages reach stderr through `env_logger` (default level
//! `info`, override with `RUST_LOG`). User-channel messages and listings go
//! to stdout.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
