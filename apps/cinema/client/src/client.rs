use std::time::Duration;

use eyre::{Result, WrapErr};
use grpc_client::{ChannelConfig, create_channel_with_config};
use rpc::cinema::v1::hello_service_client::HelloServiceClient;
use rpc::cinema::v1::movie_service_client::MovieServiceClient;
use rpc::cinema::v1::{CreateMovieRequest, Empty, GetMovieRequest, HelloRequest};
use tonic::Request;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tracing::{debug, instrument};

use crate::output::{DemoReport, MovieView};

pub const DEMO_TITLE: &str = "Унесенные призраками";
pub const DEMO_YEAR: i32 = 2001;
pub const DEMO_DESCRIPTION: &str = "Тихиро с мамой и папой переезжает в новый дом. \
Заблудившись по дороге, они оказываются в странном пустынном городе, где их ждет \
великолепный пир. Родители с жадностью набрасываются на еду и к ужасу девочки \
превращаются в свиней, став пленниками злой колдуньи Юбабы. Теперь, оказавшись одна \
среди волшебных существ и загадочных видений, Тихиро должна придумать, как избавить \
своих родителей от чар коварной старухи.";

/// Slack between the per-call deadline and the channel's local timer, so a
/// slow call comes back from the server as `DEADLINE_EXCEEDED` rather than
/// being cut off locally.
const CHANNEL_TIMEOUT_SLACK: Duration = Duration::from_secs(1);

/// Both service clients over one shared channel
#[derive(Debug, Clone)]
pub struct CinemaClient {
    hello: HelloServiceClient<Channel>,
    movies: MovieServiceClient<Channel>,
    timeout: Duration,
}

impl CinemaClient {
    /// Connect to `addr`, sending `timeout` as the deadline of every call
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self> {
        let config =
            ChannelConfig::new().with_request_timeout(timeout.saturating_add(CHANNEL_TIMEOUT_SLACK));
        let channel = create_channel_with_config(addr, config)
            .await
            .wrap_err_with(|| format!("Failed to connect to {addr}"))?;
        Ok(Self::from_channel(channel, timeout))
    }

    pub fn from_channel(channel: Channel, timeout: Duration) -> Self {
        Self {
            timeout,
            hello: HelloServiceClient::new(channel.clone())
                .send_compressed(CompressionEncoding::Zstd)
                .accept_compressed(CompressionEncoding::Zstd),
            movies: MovieServiceClient::new(channel)
                .send_compressed(CompressionEncoding::Zstd)
                .accept_compressed(CompressionEncoding::Zstd),
        }
    }

    /// Wrap `message` with this client's deadline in `grpc-timeout`
    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.set_timeout(self.timeout);
        request
    }

    #[instrument(skip(self))]
    pub async fn say_hello(&mut self, name: &str, language: &str) -> Result<String> {
        let request = self.request(HelloRequest {
            name: name.to_string(),
            language: language.to_string(),
        });
        let response = self
            .hello
            .say_hello(request)
            .await
            .wrap_err("SayHello failed")?;
        Ok(response.into_inner().message)
    }

    #[instrument(skip(self, description))]
    pub async fn create_movie(
        &mut self,
        title: &str,
        description: Option<String>,
        year: i32,
    ) -> Result<MovieView> {
        let request = self.request(CreateMovieRequest {
            title: title.to_string(),
            description,
            year,
        });
        let movie = self
            .movies
            .create_movie(request)
            .await
            .wrap_err("CreateMovie failed")?
            .into_inner();
        debug!(id = movie.id, "Movie created");
        Ok(movie.into())
    }

    #[instrument(skip(self))]
    pub async fn get_movie(&mut self, id: i64) -> Result<MovieView> {
        let request = self.request(GetMovieRequest { id });
        let movie = self
            .movies
            .get_movie(request)
            .await
            .wrap_err_with(|| format!("GetMovie({id}) failed"))?
            .into_inner();
        Ok(movie.into())
    }

    #[instrument(skip(self))]
    pub async fn list_movies(&mut self) -> Result<Vec<MovieView>> {
        let request = self.request(Empty {});
        let response = self
            .movies
            .list_movies(request)
            .await
            .wrap_err("ListMovies failed")?;
        Ok(response.into_inner().movies.into_iter().map(Into::into).collect())
    }

    /// Create the demo movie, read it back, then list everything
    pub async fn demo(&mut self) -> Result<DemoReport> {
        let created = self
            .create_movie(DEMO_TITLE, Some(DEMO_DESCRIPTION.to_string()), DEMO_YEAR)
            .await?;
        let fetched = self.get_movie(created.id).await?;
        let all = self.list_movies().await?;

        Ok(DemoReport {
            created,
            fetched,
            all,
        })
    }
}
