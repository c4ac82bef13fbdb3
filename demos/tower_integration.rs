//! Example: Tower integration with outcome-rail
//!
//! A service whose errors become failed outcomes, so callers see every
//! failure on the data path.
//!
//! Run with: `cargo run --example tower_integration --features tower`

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use outcome_rail::tower::OutcomeLayer;
use outcome_rail::Error;
use tower::{Layer, Service, ServiceExt};

#[derive(Debug, Clone)]
struct User {
    #[allow(dead_code)]
    id: u64,
    #[allow(dead_code)]
    name: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(u64),
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound(id) => {
                Error::with_id("lookup failed", 404).and_detail(Error::new(format!("user {id} not found")))
            },
        }
    }
}

/// Directory service that knows two users.
#[derive(Clone)]
struct UserDirectory;

impl Service<u64> for UserDirectory {
    type Response = User;
    type Error = ApiError;
    type Future = Ready<Result<User, ApiError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, id: u64) -> Self::Future {
        ready(match id {
            1 => Ok(User { id: 1, name: "Alice".to_string() }),
            2 => Ok(User { id: 2, name: "Bob".to_string() }),
            _ => Err(ApiError::NotFound(id)),
        })
    }
}

#[tokio::main]
async fn main() {
    println!("=== Tower Integration Example ===\n");

    let mut service = OutcomeLayer::new().layer(UserDirectory);

    for id in [1, 2, 3] {
        let outcome = match service.ready().await {
            Ok(ready) => ready.call(id).await,
            Err(never) => match never {},
        };
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        };

        match outcome.error_obj() {
            None => println!("user {id}: {:?}", outcome.data()),
            Some(error) => println!("user {id}: {error}"),
        }
    }
}
