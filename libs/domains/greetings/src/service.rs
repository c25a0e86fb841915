use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::GreetingResult;
use crate::models::{DEFAULT_GREETING, GreetingPolicy};
use crate::repository::GreetingRepository;

/// Service layer for `SayHello`
#[derive(Clone)]
pub struct GreetingService<R: GreetingRepository> {
    repository: Arc<R>,
    policy: GreetingPolicy,
}

impl<R: GreetingRepository> GreetingService<R> {
    pub fn new(repository: R, policy: GreetingPolicy) -> Self {
        Self {
            repository: Arc::new(repository),
            policy,
        }
    }

    /// Build the greeting message for `name` under the configured policy.
    ///
    /// Only a missing row falls back to [`DEFAULT_GREETING`]; store failures
    /// are returned as errors under every policy.
    #[instrument(skip(self), fields(policy = %self.policy))]
    pub async fn say_hello(&self, name: &str, language: &str) -> GreetingResult<String> {
        match self.policy {
            GreetingPolicy::Lookup => {
                let greeting = match self.repository.find_by_language(language).await? {
                    Some(greeting) => greeting,
                    None => {
                        debug!("No greeting stored for language, using default");
                        DEFAULT_GREETING.to_string()
                    }
                };
                Ok(format!("{greeting}, {name}!"))
            }
            GreetingPolicy::InsertThenList => {
                self.repository.insert(language, name).await?;
                let known: Vec<String> = self
                    .repository
                    .list()
                    .await?
                    .into_iter()
                    .map(|g| g.text)
                    .collect();
                Ok(format!("Hello, {name}! Known greetings: {}", known.join(", ")))
            }
            GreetingPolicy::InsertOnly => {
                self.repository.insert(language, name).await?;
                Ok(format!("Hello, {name}!"))
            }
        }
    }
}
