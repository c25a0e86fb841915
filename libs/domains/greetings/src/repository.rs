use async_trait::async_trait;

use crate::error::GreetingResult;
use crate::models::Greeting;

/// Repository trait for greetings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GreetingRepository: Send + Sync {
    /// Greeting text for a language; any matching row when there are several
    async fn find_by_language(&self, language: &str) -> GreetingResult<Option<String>>;

    /// Store a new greeting row
    async fn insert(&self, language: &str, text: &str) -> GreetingResult<Greeting>;

    /// Every stored greeting, in no particular order
    async fn list(&self) -> GreetingResult<Vec<Greeting>>;
}
