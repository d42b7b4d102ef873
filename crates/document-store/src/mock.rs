//! # Mock Collection & Testing Guide
//!
//! `MockCollection<T>` hands out a real [`CollectionHandle<T>`] whose requests are answered
//! from a queue of expectations instead of a running [`Collection`](crate::Collection). It
//! lets resource managers be unit-tested for the paths a real collection rarely takes:
//! a closed store, a dropped response, a failed snapshot write.
//!
//! ## When to use Mocks vs Real Collections
//!
//! | Feature | MockCollection | Real Collection |
//! |---------|----------------|-----------------|
//! | **State** | None (scripted answers) | Real documents |
//! | **Use Case** | Error mapping, call order | Behavior of the resource itself |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a broken backend) |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut mock = MockCollection::<MenuItem>::new();
//! mock.expect_find_all().return_err(StoreError::Closed);
//!
//! let manager = MenuManager::new(mock.handle());
//! assert!(matches!(manager.list().await, Err(MenuError::Store(_))));
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong operation or wrong id) panics the mock task, which the caller
//! observes as [`StoreError::Dropped`].

use crate::document::Document;
use crate::error::StoreError;
use crate::handle::CollectionHandle;
use crate::id::DocumentId;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response it should receive.
enum Expectation<T: Document> {
    Insert {
        response: Result<T, StoreError>,
    },
    FindAll {
        response: Result<Vec<T>, StoreError>,
    },
    FindById {
        id: DocumentId,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        id: DocumentId,
        response: Result<T, StoreError>,
    },
    Delete {
        id: DocumentId,
        response: Result<T, StoreError>,
    },
    Action {
        id: DocumentId,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock collection with expectation tracking for fluent testing.
pub struct MockCollection<T: Document> {
    handle: CollectionHandle<T>,
    expectations: Queue<T>,
    _task: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Insert { respond_to, .. }, Some(Expectation::Insert { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::FindAll { respond_to }, Some(Expectation::FindAll { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::FindById { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "FindById called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            handle: CollectionHandle::new(sender),
            expectations,
            _task: task,
        }
    }

    /// Returns a handle wired to this mock.
    pub fn handle(&self) -> CollectionHandle<T> {
        self.handle.clone()
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Insert { response })
    }

    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FindAll { response })
    }

    pub fn expect_find_by_id(&mut self, id: DocumentId) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::FindById { id, response })
    }

    pub fn expect_update(&mut self, id: DocumentId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: DocumentId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: DocumentId) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T>>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: DocumentId,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl Document for Note {
        type Create = String;
        type Patch = String;
        type Action = std::convert::Infallible;
        type ActionResult = ();
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &DocumentId {
            &self.id
        }

        fn from_create_params(id: DocumentId, text: String, _: Timestamp) -> Result<Self, NoteError> {
            Ok(Self { id, text })
        }

        fn on_update(&mut self, text: String, _: Timestamp, _: &()) -> Result<(), NoteError> {
            self.text = text;
            Ok(())
        }

        fn handle_action(&mut self, action: Self::Action, _: Timestamp, _: &()) -> Result<(), NoteError> {
            match action {}
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: DocumentId::from(id),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn answers_expectations_in_order() {
        let mut mock = MockCollection::<Note>::new();
        mock.expect_insert().return_ok(note("n1", "hello"));
        mock.expect_find_by_id(DocumentId::from("n1"))
            .return_ok(Some(note("n1", "hello")));
        mock.expect_find_all().return_err(StoreError::Closed);

        let handle = mock.handle();
        let created = handle.insert("hello".to_string()).await.unwrap();
        assert_eq!(created.id, DocumentId::from("n1"));

        let fetched = handle.find_by_id(DocumentId::from("n1")).await.unwrap();
        assert_eq!(fetched, Some(note("n1", "hello")));

        assert!(matches!(handle.find_all().await, Err(StoreError::Closed)));
        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_request_surfaces_as_dropped() {
        let mut mock = MockCollection::<Note>::new();
        mock.expect_delete(DocumentId::from("n1"))
            .return_ok(note("n1", "bye"));

        let result = mock.handle().find_all().await;
        assert!(matches!(result, Err(StoreError::Dropped)));
    }
}
