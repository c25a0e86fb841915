//! gRPC server initialization and lifecycle management
//!
//! Startup is strictly ordered: tracing, configuration, store connection with
//! bounded retry, schema bootstrap, and only then the listener. A store that
//! never becomes reachable ends the process without ever binding the port.

use std::future::Future;

use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use database::common::ConnectionGate;
use database::postgres::Connect;
use domain_greetings::{GreetingRepository, GreetingService, PgGreetingRepository};
use domain_movies::{MovieRepository, MovieService, PgMovieRepository};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
use migration::CinemaSchema;
use rpc::cinema::v1::hello_service_server::{self, HelloServiceServer};
use rpc::cinema::v1::movie_service_server::{self, MovieServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::Config;
use crate::service::{CallGuard, HelloServiceImpl, MovieServiceImpl};
use crate::startup::StartupSequencer;

const SERVICES: [&str; 2] = [hello_service_server::SERVICE_NAME, movie_service_server::SERVICE_NAME];

/// Run the gRPC server
///
/// This is the main entry point for server initialization. It:
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Loads configuration from the environment
/// 3. Connects to the database with bounded retry and bootstraps the schema
/// 4. Serves until SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The database never becomes reachable or the bootstrap fails
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    let connector = config.database.clone();

    run_with(config, connector, shutdown_signal()).await
}

/// Start the store, then bind and serve until `shutdown` resolves.
///
/// The connector is a parameter so the startup path can be driven against
/// something other than a live database.
pub async fn run_with<C, S>(config: Config, connector: C, shutdown: S) -> Result<()>
where
    C: Connect,
    S: Future<Output = ()> + Send + 'static,
{
    let gate = ConnectionGate::new();
    let sequencer = StartupSequencer::new(
        connector,
        CinemaSchema::new(config.seed_greetings),
        config.retry.clone(),
        gate.clone(),
    );

    let store = sequencer
        .start()
        .await
        .wrap_err("Database is unavailable, refusing to start")?;

    let guard = CallGuard::new(gate, config.server.request_timeout);
    let greeter = HelloServiceImpl::new(
        GreetingService::new(PgGreetingRepository::new(store.clone()), config.greeting_policy),
        guard.clone(),
    );
    let movies = MovieServiceImpl::new(MovieService::new(PgMovieRepository::new(store)), guard);
    info!(policy = %config.greeting_policy, "Services created");

    let addr = config
        .server
        .socket_addr()
        .wrap_err_with(|| format!("Failed to parse server address: {}", config.server.addr_string()))?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    serve(&config.server, listener, greeter, movies, shutdown).await
}

/// Serve both services plus `grpc.health.v1.Health` on an already bound
/// listener.
///
/// Health reports `SERVING` once the listener is up and flips to
/// `NOT_SERVING` as soon as `shutdown` resolves; in-flight calls are allowed
/// to finish.
pub async fn serve<G, M, S>(
    config: &ServerConfig,
    listener: TcpListener,
    greeter: HelloServiceImpl<G>,
    movies: MovieServiceImpl<M>,
    shutdown: S,
) -> Result<()>
where
    G: GreetingRepository + 'static,
    M: MovieRepository + 'static,
    S: Future<Output = ()> + Send + 'static,
{
    let (health_reporter, health_service) = create_health_service();

    let mut hello = HelloServiceServer::new(greeter)
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    let mut movie = MovieServiceServer::new(movies)
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    if config.enable_compression {
        hello = hello
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
        movie = movie
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let local_addr = listener.local_addr().wrap_err("Listener has no local address")?;
    GrpcServer::log_startup_multiple(config, &SERVICES);
    GrpcServer::setup_health_multiple(&health_reporter, &SERVICES).await;
    info!(%local_addr, "Cinema service listening");

    let reporter = health_reporter.clone();
    Server::builder()
        .add_service(health_service)
        .add_service(hello)
        .add_service(movie)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
            shutdown.await;
            GrpcServer::mark_not_serving(&reporter, &SERVICES).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("Server stopped");
    Ok(())
}
