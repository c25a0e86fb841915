use std::sync::Arc;

use domain_greetings::{GreetingError, GreetingRepository, GreetingService};
use rpc::cinema::v1::{HelloRequest, HelloResponse, hello_service_server::HelloService};
use grpc_client::client_deadline;
use tonic::{Request, Response, Status};

use super::CallGuard;

pub struct HelloServiceImpl<R>
where
    R: GreetingRepository + 'static,
{
    service: Arc<GreetingService<R>>,
    guard: CallGuard,
}

impl<R> HelloServiceImpl<R>
where
    R: GreetingRepository + 'static,
{
    pub fn new(service: GreetingService<R>, guard: CallGuard) -> Self {
        Self {
            service: Arc::new(service),
            guard,
        }
    }
}

#[tonic::async_trait]
impl<R> HelloService for HelloServiceImpl<R>
where
    R: GreetingRepository + 'static,
{
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloResponse>, Status> {
        let deadline = client_deadline(request.metadata());
        let req = request.into_inner();

        self.guard
            .run("SayHello", deadline, async {
                let message = self.service.say_hello(&req.name, &req.language).await?;
                Ok::<_, GreetingError>(HelloResponse { message })
            })
            .await
    }
}
