//! # Collection Task
//!
//! This module defines the `Collection`, the component that owns the documents of one
//! collection. It is the "server" side of the store: it processes requests sequentially,
//! so every request observes the effects of the one before it and no locking is needed.

use crate::document::Document;
use crate::error::StoreError;
use crate::handle::CollectionHandle;
use crate::id::DocumentId;
use crate::message::StoreRequest;
use crate::uri::StoreUri;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task that manages the documents of a single collection.
///
/// # Architecture Note
/// This struct owns the state (`documents`) and the receiver end of the channel. Callers
/// only ever hold a [`CollectionHandle`].
///
/// **Ordering**: documents are kept in insertion order (`seq`), which is the "natural
/// order" returned by `FindAll`. `index` maps the opaque id to that sequence number.
///
/// **Atomicity**: every request is handled to completion before the next one is read.
/// An `Action` therefore reads and writes its document in one step, which is how
/// read-modify-write operations (like a status toggle) avoid lost updates.
///
/// **Persistence**: when opened with a `file://` URI, the whole collection is rewritten
/// to its snapshot file after each successful mutation. If the write fails, the
/// mutation is rolled back and the caller gets the I/O error.
///
/// # Usage Pattern
///
/// 1.  **Create**: `Collection::new()` (in-memory) or `Collection::open()` (from a URI)
///     returns the collection and its handle.
/// 2.  **Run**: spawn `collection.run(context)` in a background task.
/// 3.  **Use**: clone the handle wherever documents are needed. Dropping every handle
///     ends the task.
pub struct Collection<T: Document> {
    name: String,
    receiver: mpsc::Receiver<StoreRequest<T>>,
    documents: BTreeMap<u64, T>,
    index: HashMap<DocumentId, u64>,
    next_seq: u64,
    snapshot: Option<PathBuf>,
}

impl<T: Document> Collection<T> {
    /// Creates an empty in-memory collection and its associated handle.
    ///
    /// # Arguments
    ///
    /// * `name` - Collection name, used in logs and for snapshot file names.
    /// * `buffer_size` - The capacity of the request channel. If the channel is full,
    ///   calls on the handle wait until there is space.
    pub fn new(name: impl Into<String>, buffer_size: usize) -> (Self, CollectionHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let collection = Self {
            name: name.into(),
            receiver,
            documents: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 1,
            snapshot: None,
        };
        (collection, CollectionHandle::new(sender))
    }

    /// Opens a collection on the backend selected by `uri`.
    ///
    /// For `file://` backends the snapshot is loaded if it exists; otherwise its directory
    /// is created so the first write succeeds.
    pub async fn open(
        name: impl Into<String>,
        uri: &StoreUri,
        buffer_size: usize,
    ) -> Result<(Self, CollectionHandle<T>), StoreError> {
        let (mut collection, handle) = Self::new(name, buffer_size);
        if let Some(path) = uri.snapshot_path(&collection.name) {
            collection.load(&path).await?;
            collection.snapshot = Some(path);
        }
        info!(
            collection = %collection.name,
            backend = %uri,
            size = collection.documents.len(),
            "Collection opened"
        );
        Ok((collection, handle))
    }

    async fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let documents: Vec<T> = serde_json::from_slice(&bytes)?;
                for document in documents {
                    self.push(document);
                }
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(dir) = path.parent() {
                    tokio::fs::create_dir_all(dir).await?;
                }
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn push(&mut self, document: T) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(document.id().clone(), seq);
        self.documents.insert(seq, document);
        seq
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        let documents: Vec<&T> = self.documents.values().collect();
        let bytes = serde_json::to_vec_pretty(&documents)?;
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, path).await?;
        Ok(())
    }

    /// Runs the collection's event loop, processing requests until every handle is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every update and action hook. It carries
    /// settings decided at startup (e.g. the order transition policy).
    pub async fn run(mut self, context: T::Context) {
        // Just the type name (e.g. "MenuItem" instead of "restaurant_ops::model::menu_item::MenuItem")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, collection = %self.name, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { params, respond_to } => {
                    debug!(entity_type, ?params, "Insert");
                    let result = self.insert(params).await;
                    match &result {
                        Ok(doc) => {
                            info!(entity_type, id = %doc.id(), size = self.documents.len(), "Inserted")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Insert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::FindAll { respond_to } => {
                    debug!(entity_type, size = self.documents.len(), "FindAll");
                    let _ = respond_to.send(Ok(self.documents.values().cloned().collect()));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.find(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Update");
                    let result = self.update(&id, patch, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.documents.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, collection = %self.name, size = self.documents.len(), "Shutdown");
    }

    fn find(&self, id: &DocumentId) -> Option<&T> {
        self.index.get(id).and_then(|seq| self.documents.get(seq))
    }

    fn locate(&self, id: &DocumentId) -> Result<(u64, T), StoreError> {
        self.index
            .get(id)
            .and_then(|seq| self.documents.get(seq).map(|doc| (*seq, doc.clone())))
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn insert(&mut self, params: T::Create) -> Result<T, StoreError> {
        let id = DocumentId::generate();
        let document =
            T::from_create_params(id.clone(), params, Utc::now()).map_err(rejected)?;
        let seq = self.push(document.clone());
        if let Err(e) = self.persist().await {
            self.documents.remove(&seq);
            self.index.remove(&id);
            return Err(e);
        }
        Ok(document)
    }

    async fn update(
        &mut self,
        id: &DocumentId,
        patch: T::Patch,
        context: &T::Context,
    ) -> Result<T, StoreError> {
        let (seq, mut document) = self.locate(id)?;
        document
            .on_update(patch, Utc::now(), context)
            .map_err(rejected)?;
        self.replace(seq, document.clone()).await?;
        Ok(document)
    }

    async fn action(
        &mut self,
        id: &DocumentId,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, StoreError> {
        let (seq, mut document) = self.locate(id)?;
        let result = document
            .handle_action(action, Utc::now(), context)
            .map_err(rejected)?;
        self.replace(seq, document).await?;
        Ok(result)
    }

    async fn delete(&mut self, id: &DocumentId) -> Result<T, StoreError> {
        let seq = self
            .index
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let Some(document) = self.documents.remove(&seq) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        if let Err(e) = self.persist().await {
            self.index.insert(id.clone(), seq);
            self.documents.insert(seq, document);
            return Err(e);
        }
        Ok(document)
    }

    async fn replace(&mut self, seq: u64, document: T) -> Result<(), StoreError> {
        let previous = self.documents.insert(seq, document);
        if let Err(e) = self.persist().await {
            if let Some(previous) = previous {
                self.documents.insert(seq, previous);
            }
            return Err(e);
        }
        Ok(())
    }
}

fn rejected<E: std::error::Error + Send + Sync + 'static>(e: E) -> StoreError {
    StoreError::Rejected(Box::new(e))
}
