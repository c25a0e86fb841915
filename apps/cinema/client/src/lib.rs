//! Cinema CLI
//!
//! Thin command-line front end for `HelloService` and `MovieService`. Every
//! subcommand maps onto one RPC, except `demo`, which walks the
//! create → get → list flow against a running server.

pub mod cli;
pub mod client;
pub mod output;

pub use cli::{Cli, Commands, run};
pub use client::CinemaClient;
pub use output::{DemoReport, MovieView};
