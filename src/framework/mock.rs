//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a queue
//! of expectations instead of a running [`StoreActor`](crate::framework::StoreActor). Use it to
//! test code *around* the client, in particular failure paths that a real store cannot easily be
//! driven into (a closed actor, a dropped reply).
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real keyed collection |
//! | **Error Injection** | Easy (`return_err`) | Only reachable domain errors |
//! | **Use Case** | Client wrappers, HTTP handlers | The store itself, full system |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<User>::new();
//! mock.expect_get("ada@example.com".into()).return_err(StoreError::ActorDropped);
//!
//! let users = UserClient::new(mock.client());
//! assert!(users.find_by_email("ada@example.com").await.is_err());
//! mock.verify();
//! ```

use crate::framework::{KeyedEntity, StoreClient, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// A scripted answer for one incoming request.
enum Expectation<T: KeyedEntity> {
    Get {
        key: T::Key,
        response: Result<T, StoreError<T::Error>>,
    },
    List {
        response: Result<Vec<T>, StoreError<T::Error>>,
    },
    Create {
        response: Result<T, StoreError<T::Error>>,
    },
    Delete {
        key: T::Key,
        response: Result<(), StoreError<T::Error>>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: KeyedEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(expectation);
}

/// A mock client with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// panics the background task, which surfaces in the test as `StoreError::ActorDropped`.
pub struct MockClient<T: KeyedEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: KeyedEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "unexpected key for get");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { key, respond_to },
                        Some(Expectation::Delete {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "unexpected key for delete");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, key: T::Key) -> Respond<T, T> {
        let queue = self.expectations.clone();
        Respond::new(move |response| push(&queue, Expectation::Get { key, response }))
    }

    pub fn expect_list(&mut self) -> Respond<T, Vec<T>> {
        let queue = self.expectations.clone();
        Respond::new(move |response| push(&queue, Expectation::List { response }))
    }

    pub fn expect_create(&mut self) -> Respond<T, T> {
        let queue = self.expectations.clone();
        Respond::new(move |response| push(&queue, Expectation::Create { response }))
    }

    pub fn expect_delete(&mut self, key: T::Key) -> Respond<T, ()> {
        let queue = self.expectations.clone();
        Respond::new(move |response| push(&queue, Expectation::Delete { key, response }))
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: KeyedEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finishes an expectation by choosing its answer.
pub struct Respond<T: KeyedEntity, R> {
    record: Box<dyn FnOnce(Result<R, StoreError<T::Error>>) + Send>,
}

impl<T: KeyedEntity, R> Respond<T, R> {
    fn new(record: impl FnOnce(Result<R, StoreError<T::Error>>) + Send + 'static) -> Self {
        Self {
            record: Box::new(record),
        }
    }

    pub fn return_ok(self, value: R) {
        (self.record)(Ok(value));
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        (self.record)(Err(error));
    }
}
