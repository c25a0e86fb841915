//! Generated gRPC bindings for the cinema service.
//!
//! ```ignore
//! use rpc::cinema::v1::hello_service_client::HelloServiceClient;
//! use rpc::cinema::v1::HelloRequest;
//! ```

pub mod cinema {
    pub mod v1 {
        tonic::include_proto!("cinema.v1");
    }
}

pub use cinema::v1;
