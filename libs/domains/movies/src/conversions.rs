//! Proto ↔ domain conversions for movies

use rpc::cinema::v1 as pb;

use crate::models::{CreateMovie, Movie};

impl From<pb::CreateMovieRequest> for CreateMovie {
    fn from(req: pb::CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            year: req.year,
        }
    }
}

impl From<Movie> for pb::Movie {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
        }
    }
}

impl From<pb::Movie> for Movie {
    fn from(movie: pb::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
        }
    }
}

/// Wrap a list of movies in the ListMovies response
pub fn to_list_response(movies: Vec<Movie>) -> pb::ListMoviesResponse {
    pb::ListMoviesResponse {
        movies: movies.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_description() {
        let input: CreateMovie = pb::CreateMovieRequest {
            title: "Унесенные призраками".into(),
            description: None,
            year: 2001,
        }
        .into();

        assert_eq!(input, CreateMovie::new("Унесенные призраками", 2001));
    }

    #[test]
    fn test_list_response_preserves_count() {
        let response = to_list_response(vec![
            CreateMovie::new("A", 2000).into_movie(1),
            CreateMovie::new("B", 2001).with_description("b").into_movie(2),
        ]);

        assert_eq!(response.movies.len(), 2);
        assert_eq!(response.movies[1].description.as_deref(), Some("b"));
    }
}
