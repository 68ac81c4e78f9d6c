//! Scripted entity fetcher.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::{EntityFetcher, EntityRequest};

enum Script<E> {
    Items(Vec<E>),
    Fail(Box<dyn Fn() -> Error + Send + Sync>),
}

/// An [`EntityFetcher`] returning a fixed list (or a fixed failure).
///
/// Counts calls and remembers the last request for assertions.
pub struct StaticEntities<E> {
    script: Mutex<Script<E>>,
    calls: AtomicU32,
    last_request: Mutex<Option<EntityRequest>>,
}

impl<E: Clone + Send + Sync> StaticEntities<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self {
            script: Mutex::new(Script::Items(items)),
            calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Fetcher whose every call fails with the error built by `make_error`.
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> Error + Send + Sync + 'static,
    {
        Self {
            script: Mutex::new(Script::Fail(Box::new(make_error))),
            calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<EntityRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl<E: Clone + Send + Sync> EntityFetcher<E> for StaticEntities<E> {
    async fn fetch(&self, request: &EntityRequest) -> Result<Vec<E>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());
        match &*self.script.lock() {
            Script::Items(items) => Ok(items.clone()),
            Script::Fail(make_error) => Err(make_error()),
        }
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
