/// Hand-written test doubles for the mirror scenarios
///
/// `GatedRepository` parks every read until the test releases it, so the
/// order in which refreshes complete is fully under test control.
/// `ScriptedFeed` hands out pre-arranged subscription outcomes.
/// `ReadBarrierRepository` holds every lookup until a set number of callers
/// have read, forcing reads to happen before any write.
use async_trait::async_trait;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;
use jobboard_lib::modules::jobs::application::ports::{ChangeFeed, ChangeStream};
use jobboard_lib::modules::jobs::domain::{Job, JobChange, JobRepository, JobUpdate, NewJob};
use jobboard_lib::modules::jobs::infrastructure::InMemoryJobRepository;
use jobboard_lib::shared::errors::{AppError, AppResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, Barrier};
use uuid::Uuid;

/// One parked read
pub struct Gate {
    pub call: usize,
    reply: oneshot::Sender<AppResult<Vec<Job>>>,
}

impl Gate {
    pub fn release(self, jobs: Vec<Job>) {
        // The reader may have been cancelled meanwhile
        let _ = self.reply.send(Ok(jobs));
    }

    pub fn fail(self, message: &str) {
        let _ = self.reply.send(Err(AppError::Persistence(message.to_string())));
    }
}

pub struct GatedRepository {
    calls: AtomicUsize,
    gates: mpsc::UnboundedSender<Gate>,
}

impl GatedRepository {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Gate>) {
        let (gates, parked) = mpsc::unbounded_channel();
        (
            Self {
                calls: AtomicUsize::new(0),
                gates,
            },
            parked,
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn parked_read(&self) -> AppResult<Vec<Job>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let (reply, outcome) = oneshot::channel();
        self.gates
            .send(Gate { call, reply })
            .map_err(|_| AppError::Internal("gate receiver dropped".to_string()))?;
        outcome
            .await
            .map_err(|_| AppError::Internal("gate dropped unreleased".to_string()))?
    }
}

#[async_trait]
impl JobRepository for GatedRepository {
    async fn find_all(&self) -> AppResult<Vec<Job>> {
        self.parked_read().await
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        self.parked_read().await
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Job>> {
        Ok(None)
    }

    async fn create(&self, _job: NewJob) -> AppResult<Job> {
        Err(AppError::Internal("read-only test repository".to_string()))
    }

    async fn update(&self, _id: Uuid, _update: JobUpdate) -> AppResult<Option<Job>> {
        Err(AppError::Internal("read-only test repository".to_string()))
    }

    async fn delete(&self, _id: Uuid) -> AppResult<bool> {
        Err(AppError::Internal("read-only test repository".to_string()))
    }
}

pub type FeedSender = UnboundedSender<AppResult<JobChange>>;

/// A stream the test drives by hand; dropping the sender ends it
pub fn manual_stream() -> (FeedSender, ChangeStream) {
    let (sender, receiver) = unbounded();
    (sender, receiver.boxed())
}

#[derive(Default)]
pub struct ScriptedFeed {
    outcomes: Mutex<VecDeque<AppResult<ChangeStream>>>,
    subscriptions: AtomicUsize,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_fail(self, message: &str) -> Self {
        self.push(Err(AppError::Subscription(message.to_string())));
        self
    }

    /// Queue a working subscription and return its sender
    pub fn then_stream(&self) -> FeedSender {
        let (sender, stream) = manual_stream();
        self.push(Ok(stream));
        sender
    }

    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    fn push(&self, outcome: AppResult<ChangeStream>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

#[async_trait]
impl ChangeFeed for ScriptedFeed {
    async fn subscribe(&self) -> AppResult<ChangeStream> {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(AppError::Subscription("no subscription scripted".to_string())))
    }
}

/// Delegates to an in-memory store; `find_by_id` returns only once
/// `readers` lookups are in flight
pub struct ReadBarrierRepository {
    inner: Arc<InMemoryJobRepository>,
    readers: Barrier,
}

impl ReadBarrierRepository {
    pub fn new(inner: Arc<InMemoryJobRepository>, readers: usize) -> Self {
        Self {
            inner,
            readers: Barrier::new(readers),
        }
    }
}

#[async_trait]
impl JobRepository for ReadBarrierRepository {
    async fn find_all(&self) -> AppResult<Vec<Job>> {
        self.inner.find_all().await
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        self.inner.find_active().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        let job = self.inner.find_by_id(id).await?;
        self.readers.wait().await;
        Ok(job)
    }

    async fn create(&self, job: NewJob) -> AppResult<Job> {
        self.inner.create(job).await
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>> {
        self.inner.update(id, update).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.inner.delete(id).await
    }
}
