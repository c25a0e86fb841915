//! Drives the CLI commands against an in-process server.

use std::net::SocketAddr;
use std::time::Duration;

use cinema_client::cli::execute;
use cinema_client::client::{DEMO_DESCRIPTION, DEMO_TITLE, DEMO_YEAR};
use cinema_client::{CinemaClient, Commands};
use cinema_server::{CallGuard, HelloServiceImpl, MovieServiceImpl, serve};
use database::common::ConnectionGate;
use domain_greetings::{GreetingPolicy, GreetingService, InMemoryGreetingRepository};
use async_trait::async_trait;
use domain_movies::{
    CreateMovie, InMemoryMovieRepository, Movie, MovieRepository, MovieResult, MovieService,
};
use grpc_client::server::ServerConfig;
use tokio::net::TcpListener;

async fn start_server() -> SocketAddr {
    start_server_with(InMemoryMovieRepository::new()).await
}

async fn start_server_with<M: MovieRepository + 'static>(movies: M) -> SocketAddr {
    let guard = CallGuard::new(ConnectionGate::ready(), None);
    let greeter = HelloServiceImpl::new(
        GreetingService::new(
            InMemoryGreetingRepository::with_greetings([("French", "Bonjour")]),
            GreetingPolicy::Lookup,
        ),
        guard.clone(),
    );
    let movies = MovieServiceImpl::new(MovieService::new(movies), guard);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(&ServerConfig::new(), listener, greeter, movies, std::future::pending()).await
    });
    addr
}

async fn client() -> CinemaClient {
    let addr = start_server().await;
    CinemaClient::connect(&format!("http://{addr}"), Duration::from_secs(5))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_demo_flow() {
    let mut client = client().await;

    let report = client.demo().await.unwrap();
    assert_eq!(report.created, report.fetched);
    assert_eq!(report.created.title, DEMO_TITLE);
    assert_eq!(report.created.year, DEMO_YEAR);
    assert_eq!(report.created.description.as_deref(), Some(DEMO_DESCRIPTION));
    assert_eq!(report.all, vec![report.created.clone()]);
}

#[tokio::test]
async fn test_demo_json_output() {
    let mut client = client().await;

    let output = execute(&mut client, Commands::Demo, true).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["created"]["title"], DEMO_TITLE);
    assert_eq!(json["all"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_hello_text_output() {
    let mut client = client().await;

    let output = execute(
        &mut client,
        Commands::Hello {
            name: "Ann".into(),
            language: "French".into(),
        },
        false,
    )
    .await
    .unwrap();
    assert_eq!(output, "Bonjour, Ann!");
}

#[tokio::test]
async fn test_get_missing_movie_reports_error() {
    let mut client = client().await;

    let err = execute(&mut client, Commands::GetMovie { id: 77 }, false)
        .await
        .unwrap_err();
    let status = err
        .chain()
        .find_map(|e| e.downcast_ref::<tonic::Status>())
        .expect("tonic status in chain");
    assert_eq!(status.code(), tonic::Code::NotFound);
}

#[tokio::test]
async fn test_connect_to_nothing_fails() {
    let result = CinemaClient::connect("http://127.0.0.1:1", Duration::from_millis(200)).await;
    assert!(result.is_err());
}

/// Sleeps before every catalog call
struct StalledMovies(InMemoryMovieRepository);

#[async_trait]
impl MovieRepository for StalledMovies {
    async fn create(&self, input: CreateMovie) -> MovieResult<Movie> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        self.0.create(input).await
    }

    async fn get_by_id(&self, id: i64) -> MovieResult<Option<Movie>> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        self.0.get_by_id(id).await
    }

    async fn list(&self) -> MovieResult<Vec<Movie>> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        self.0.list().await
    }
}

#[tokio::test]
async fn test_timeout_reports_deadline_exceeded() {
    let addr = start_server_with(StalledMovies(InMemoryMovieRepository::new())).await;
    let mut client = CinemaClient::connect(&format!("http://{addr}"), Duration::from_millis(200))
        .await
        .unwrap();

    let err = execute(&mut client, Commands::ListMovies, false)
        .await
        .unwrap_err();
    let status = err
        .chain()
        .find_map(|e| e.downcast_ref::<tonic::Status>())
        .expect("tonic status in chain");
    assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
}
