//! In-process repository for tests and local wiring without PostgreSQL.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::GreetingResult;
use crate::models::Greeting;
use crate::repository::GreetingRepository;

#[derive(Debug, Default)]
pub struct InMemoryGreetingRepository {
    greetings: RwLock<Vec<Greeting>>,
}

impl InMemoryGreetingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given `(language, greeting)` pairs
    pub fn with_greetings<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let greetings = pairs
            .into_iter()
            .zip(1..)
            .map(|((language, text), id)| Greeting {
                id,
                language: language.to_string(),
                text: text.to_string(),
            })
            .collect();
        Self {
            greetings: RwLock::new(greetings),
        }
    }
}

#[async_trait]
impl GreetingRepository for InMemoryGreetingRepository {
    async fn find_by_language(&self, language: &str) -> GreetingResult<Option<String>> {
        Ok(self
            .greetings
            .read()
            .await
            .iter()
            .find(|g| g.language == language)
            .map(|g| g.text.clone()))
    }

    async fn insert(&self, language: &str, text: &str) -> GreetingResult<Greeting> {
        let mut greetings = self.greetings.write().await;
        let greeting = Greeting {
            id: greetings.len() as i64 + 1,
            language: language.to_string(),
            text: text.to_string(),
        };
        greetings.push(greeting.clone());
        Ok(greeting)
    }

    async fn list(&self) -> GreetingResult<Vec<Greeting>> {
        Ok(self.greetings.read().await.clone())
    }
}
