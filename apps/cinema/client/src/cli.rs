use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::Result;
use serde::Serialize;

use crate::client::CinemaClient;
use crate::output::render_list;

#[derive(Debug, Parser)]
#[command(name = "cinema-client")]
#[command(about = "Talk to the cinema gRPC service")]
pub struct Cli {
    /// Server address
    #[arg(long, env = "CINEMA_ADDR", default_value = "http://127.0.0.1:50051")]
    pub addr: String,

    /// Per-call timeout in milliseconds
    #[arg(long, env = "CINEMA_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask for a greeting
    Hello {
        name: String,

        #[arg(short, long, default_value = "English")]
        language: String,
    },

    /// Add a movie to the catalog
    CreateMovie {
        title: String,

        #[arg(short, long)]
        year: i32,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Fetch one movie by id
    GetMovie { id: i64 },

    /// List every movie
    ListMovies,

    /// Create a movie, read it back, then list the catalog
    Demo,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Execute the parsed command and return what should be printed
pub async fn run(cli: Cli) -> Result<String> {
    let mut client = CinemaClient::connect(&cli.addr, cli.timeout()).await?;
    execute(&mut client, cli.command, cli.json).await
}

/// Execute `command` on an existing client
pub async fn execute(client: &mut CinemaClient, command: Commands, json: bool) -> Result<String> {
    match command {
        Commands::Hello { name, language } => {
            let message = client.say_hello(&name, &language).await?;
            if json {
                render_json(&serde_json::json!({ "message": message }))
            } else {
                Ok(message)
            }
        }
        Commands::CreateMovie {
            title,
            year,
            description,
        } => {
            let movie = client.create_movie(&title, description, year).await?;
            if json { render_json(&movie) } else { Ok(movie.to_string()) }
        }
        Commands::GetMovie { id } => {
            let movie = client.get_movie(id).await?;
            if json { render_json(&movie) } else { Ok(movie.to_string()) }
        }
        Commands::ListMovies => {
            let movies = client.list_movies().await?;
            if json { render_json(&movies) } else { Ok(render_list(&movies)) }
        }
        Commands::Demo => {
            let report = client.demo().await?;
            if json { render_json(&report) } else { Ok(report.to_string()) }
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cinema-client", "list-movies"]).unwrap();
        assert_eq!(cli.timeout(), Duration::from_secs(5));
        assert!(!cli.json);
        assert!(matches!(cli.command, Commands::ListMovies));
    }

    #[test]
    fn test_create_movie_args() {
        let cli = Cli::try_parse_from([
            "cinema-client",
            "--json",
            "create-movie",
            "Унесенные призраками",
            "--year",
            "2001",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::CreateMovie {
                title,
                year,
                description,
            } => {
                assert_eq!(title, "Унесенные призраками");
                assert_eq!(year, 2001);
                assert!(description.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_hello_language_default() {
        let cli = Cli::try_parse_from(["cinema-client", "hello", "Ann"]).unwrap();
        match cli.command {
            Commands::Hello { name, language } => {
                assert_eq!(name, "Ann");
                assert_eq!(language, "English");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_get_movie_requires_numeric_id() {
        assert!(Cli::try_parse_from(["cinema-client", "get-movie", "abc"]).is_err());
    }
}
