//! Schema bootstrap for the cinema service.
//!
//! Every statement is idempotent and runs on each startup, before the
//! listener binds. There is no migration history table.

use database::postgres::SchemaBootstrap;

const CREATE_GREETINGS: &str = r#"
    CREATE TABLE IF NOT EXISTS greetings (
        id BIGSERIAL PRIMARY KEY,
        language TEXT NOT NULL,
        greeting TEXT NOT NULL
    )
"#;

const CREATE_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS movies (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        year INTEGER NOT NULL
    )
"#;

/// Advisory lock key serializing the greeting seed across replicas
pub const SEED_LOCK_KEY: i64 = 109_304_474_856_801; // b"cinema"

// `language` carries no unique constraint, so the guard has to be NOT EXISTS
// rather than ON CONFLICT. NOT EXISTS alone is racy between replicas starting
// together; both statements go out as one simple query, which Postgres runs
// as a single implicit transaction, so the xact lock covers the insert.
const SEED_GREETINGS: &str = r#"
    SELECT pg_advisory_xact_lock(109304474856801);
    INSERT INTO greetings (language, greeting)
    SELECT seed.language, seed.greeting
    FROM (VALUES
        ('English', 'Hello'),
        ('Russian', 'Привет'),
        ('Spanish', 'Hola'),
        ('French', 'Bonjour')
    ) AS seed (language, greeting)
    WHERE NOT EXISTS (
        SELECT 1 FROM greetings g
        WHERE g.language = seed.language AND g.greeting = seed.greeting
    )
"#;

/// Seeded `(language, greeting)` pairs
pub const SEED_PAIRS: [(&str, &str); 4] = [
    ("English", "Hello"),
    ("Russian", "Привет"),
    ("Spanish", "Hola"),
    ("French", "Bonjour"),
];

/// Tables for greetings and movies, plus the optional greeting seed
#[derive(Debug, Clone, Copy)]
pub struct CinemaSchema {
    pub seed_greetings: bool,
}

impl CinemaSchema {
    pub fn new(seed_greetings: bool) -> Self {
        Self { seed_greetings }
    }
}

impl Default for CinemaSchema {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SchemaBootstrap for CinemaSchema {
    fn name(&self) -> &str {
        "cinema"
    }

    fn statements(&self) -> Vec<&'static str> {
        let mut statements = vec![CREATE_GREETINGS, CREATE_MOVIES];
        if self.seed_greetings {
            statements.push(SEED_GREETINGS);
        }
        statements
    }
}
