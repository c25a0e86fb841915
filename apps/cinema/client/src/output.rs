//! What the CLI prints, as text or JSON

use std::fmt;

use rpc::cinema::v1 as pb;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
}

impl From<pb::Movie> for MovieView {
    fn from(movie: pb::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
        }
    }
}

impl fmt::Display for MovieView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, Title={}, Description={}, Year={}",
            self.id,
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.year
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub created: MovieView,
    pub fetched: MovieView,
    pub all: Vec<MovieView>,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created Movie: {}", self.created)?;
        writeln!(f, "Fetched Movie: {}", self.fetched)?;
        write!(f, "All Movies:")?;
        for movie in &self.all {
            write!(f, "\n{movie}")?;
        }
        Ok(())
    }
}

/// Render a movie list one per line
pub fn render_list(movies: &[MovieView]) -> String {
    movies
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, description: Option<&str>) -> MovieView {
        MovieView {
            id,
            title: "Унесенные призраками".into(),
            description: description.map(String::from),
            year: 2001,
        }
    }

    #[test]
    fn test_movie_line() {
        assert_eq!(
            movie(1, Some("spirits")).to_string(),
            "ID=1, Title=Унесенные призраками, Description=spirits, Year=2001"
        );
        assert_eq!(
            movie(2, None).to_string(),
            "ID=2, Title=Унесенные призраками, Description=, Year=2001"
        );
    }

    #[test]
    fn test_demo_report_text() {
        let report = DemoReport {
            created: movie(1, None),
            fetched: movie(1, None),
            all: vec![movie(1, None)],
        };

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Created Movie: ID=1"));
        assert!(lines[1].starts_with("Fetched Movie: ID=1"));
        assert_eq!(lines[2], "All Movies:");
    }

    #[test]
    fn test_json_keeps_missing_description_as_null() {
        let json = serde_json::to_value(movie(3, None)).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), "");
    }
}
