use std::sync::Arc;

use domain_movies::conversions::to_list_response;
use domain_movies::{CreateMovie, MovieRepository, MovieService};
use rpc::cinema::v1::{
    CreateMovieRequest, Empty, GetMovieRequest, ListMoviesResponse, Movie,
    movie_service_server::MovieService as MovieRpc,
};
use grpc_client::client_deadline;
use tonic::{Request, Response, Status};

use super::CallGuard;

pub struct MovieServiceImpl<R>
where
    R: MovieRepository + 'static,
{
    service: Arc<MovieService<R>>,
    guard: CallGuard,
}

impl<R> MovieServiceImpl<R>
where
    R: MovieRepository + 'static,
{
    pub fn new(service: MovieService<R>, guard: CallGuard) -> Self {
        Self {
            service: Arc::new(service),
            guard,
        }
    }
}

#[tonic::async_trait]
impl<R> MovieRpc for MovieServiceImpl<R>
where
    R: MovieRepository + 'static,
{
    async fn create_movie(
        &self,
        request: Request<CreateMovieRequest>,
    ) -> Result<Response<Movie>, Status> {
        let deadline = client_deadline(request.metadata());
        let input: CreateMovie = request.into_inner().into();

        self.guard
            .run("CreateMovie", deadline, async {
                self.service.create_movie(input).await.map(Movie::from)
            })
            .await
    }

    async fn get_movie(
        &self,
        request: Request<GetMovieRequest>,
    ) -> Result<Response<Movie>, Status> {
        let deadline = client_deadline(request.metadata());
        let id = request.into_inner().id;

        self.guard
            .run("GetMovie", deadline, async {
                self.service.get_movie(id).await.map(Movie::from)
            })
            .await
    }

    async fn list_movies(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<ListMoviesResponse>, Status> {
        let deadline = client_deadline(request.metadata());

        self.guard
            .run("ListMovies", deadline, async {
                self.service.list_movies().await.map(to_list_response)
            })
            .await
    }
}
