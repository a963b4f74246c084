//! Client-side, read-only mirror of the job collection.
//!
//! The mirror loads the collection once, then listens on the change feed.
//! Every notification, whatever it says, triggers a full re-read of the same
//! query; the event payload is never applied. Refreshes may overlap: each one
//! draws a ticket when it starts and its result is applied only if no later
//! ticket has been applied already, so a slow, older response can never
//! overwrite a newer one.

use futures::StreamExt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::modules::jobs::application::ports::{ChangeFeed, ChangeStream, JobRepository};
use crate::modules::jobs::domain::Job;
use crate::shared::errors::{AppError, AppResult};

/// Which query the mirror keeps materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorScope {
    /// Every posting (admin console)
    All,
    /// Active postings only (public listing)
    ActiveOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorStatus {
    Uninitialized,
    Loading,
    Ready,
    Error(String),
}

/// Point-in-time view of the mirror
#[derive(Debug, Clone)]
pub struct MirrorSnapshot {
    pub status: MirrorStatus,
    /// Last collection that loaded successfully
    pub jobs: Arc<Vec<Job>>,
    /// Ticket of the refresh whose outcome is currently shown
    pub applied_ticket: u64,
    /// Whether change notifications are currently being received
    pub live: bool,
    /// Why the feed is down; holds the status at `Error` until a
    /// re-subscription succeeds
    pub feed_error: Option<String>,
}

impl MirrorSnapshot {
    fn uninitialized() -> Self {
        Self {
            status: MirrorStatus::Uninitialized,
            jobs: Arc::new(Vec::new()),
            applied_ticket: 0,
            live: false,
            feed_error: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == MirrorStatus::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            MirrorStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

struct Session {
    token: CancellationToken,
    listener: Option<JoinHandle<()>>,
}

struct MirrorShared {
    repository: Arc<dyn JobRepository>,
    feed: Arc<dyn ChangeFeed>,
    scope: MirrorScope,
    state: watch::Sender<MirrorSnapshot>,
    issued: AtomicU64,
}

pub struct JobsMirror {
    shared: Arc<MirrorShared>,
    session: Mutex<Option<Session>>,
}

impl JobsMirror {
    pub fn new(
        repository: Arc<dyn JobRepository>,
        feed: Arc<dyn ChangeFeed>,
        scope: MirrorScope,
    ) -> Self {
        let (state, _) = watch::channel(MirrorSnapshot::uninitialized());
        Self {
            shared: Arc::new(MirrorShared {
                repository,
                feed,
                scope,
                state,
                issued: AtomicU64::new(0),
            }),
            session: Mutex::new(None),
        }
    }

    pub fn scope(&self) -> MirrorScope {
        self.shared.scope
    }

    pub fn snapshot(&self) -> MirrorSnapshot {
        self.shared.state.borrow().clone()
    }

    /// Receiver that is notified whenever the snapshot changes
    pub fn watch(&self) -> watch::Receiver<MirrorSnapshot> {
        self.shared.state.subscribe()
    }

    pub fn is_active(&self) -> bool {
        self.lock_session().is_some()
    }

    /// Subscribe to the change feed and load the collection.
    ///
    /// The subscription is opened before the initial read so a change made
    /// while that read is in flight still triggers a refresh. Calling this on
    /// an active mirror does nothing.
    pub async fn activate(&self) {
        let token = {
            let mut session = self.lock_session();
            if session.is_some() {
                return;
            }
            let token = CancellationToken::new();
            *session = Some(Session {
                token: token.clone(),
                listener: None,
            });
            token
        };
        info!("Activating jobs mirror ({:?})", self.shared.scope);

        let subscribed = self.connect(&token).await;
        self.shared.refresh(&token).await;

        if let Err(err) = subscribed {
            self.shared.lose_feed(&token, &err);
        }
    }

    /// Re-read the collection now
    pub async fn refresh(&self) {
        match self.current_token() {
            Some(token) => self.shared.refresh(&token).await,
            None => debug!("Refresh requested on an inactive mirror, ignoring"),
        }
    }

    /// Recover from the `Error` state: re-subscribe if the feed was lost,
    /// then reload.
    pub async fn retry(&self) {
        let Some(token) = self.current_token() else {
            debug!("Retry requested on an inactive mirror, ignoring");
            return;
        };

        let mut reconnect_failure = None;
        if !self.listener_running() {
            if let Err(err) = self.connect(&token).await {
                reconnect_failure = Some(err);
            }
        }

        self.shared.refresh(&token).await;

        if let Some(err) = reconnect_failure {
            self.shared.lose_feed(&token, &err);
        }
    }

    /// Stop listening and discard the local collection.
    ///
    /// In-flight refreshes are abandoned; once this returns no notification
    /// reaches the mirror and nothing is applied to it.
    pub async fn deactivate(&self) {
        let session = self.lock_session().take();
        let Some(session) = session else {
            return;
        };
        session.token.cancel();

        if let Some(listener) = session.listener {
            listener.abort();
            // Cancellation is the expected outcome here
            let _ = listener.await;
        }

        self.shared.state.send_modify(|snapshot| {
            let applied_ticket = snapshot.applied_ticket;
            *snapshot = MirrorSnapshot {
                applied_ticket,
                ..MirrorSnapshot::uninitialized()
            };
        });
        info!("Jobs mirror deactivated ({:?})", self.shared.scope);
    }

    async fn connect(&self, token: &CancellationToken) -> AppResult<()> {
        let changes = self.shared.feed.subscribe().await.map_err(|err| match err {
            AppError::Subscription(_) => err,
            other => AppError::Subscription(other.to_string()),
        })?;

        // Marked live before the listener runs so a feed that closes at once
        // still ends up not live
        self.shared.mark_connected(token);
        let listener = tokio::spawn(Arc::clone(&self.shared).listen(changes, token.clone()));

        let mut session = self.lock_session();
        match session.as_mut() {
            Some(active) if !active.token.is_cancelled() => {
                if let Some(previous) = active.listener.replace(listener) {
                    previous.abort();
                }
            }
            // Deactivated while subscribing
            _ => listener.abort(),
        }
        Ok(())
    }

    fn listener_running(&self) -> bool {
        self.lock_session()
            .as_ref()
            .and_then(|session| session.listener.as_ref())
            .map(|listener| !listener.is_finished())
            .unwrap_or(false)
    }

    fn current_token(&self) -> Option<CancellationToken> {
        self.lock_session()
            .as_ref()
            .map(|session| session.token.clone())
    }

    fn lock_session(&self) -> MutexGuard<'_, Option<Session>> {
        // No code path panics while holding this lock; recover anyway
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Drop for JobsMirror {
    fn drop(&mut self) {
        if let Some(session) = self.lock_session().take() {
            session.token.cancel();
            if let Some(listener) = session.listener {
                listener.abort();
            }
        }
    }
}

impl MirrorShared {
    async fn fetch(&self) -> AppResult<Vec<Job>> {
        match self.scope {
            MirrorScope::All => self.repository.find_all().await,
            MirrorScope::ActiveOnly => self.repository.find_active().await,
        }
    }

    async fn refresh(&self, token: &CancellationToken) {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        self.state.send_if_modified(|snapshot| {
            if token.is_cancelled()
                || ticket <= snapshot.applied_ticket
                || snapshot.status == MirrorStatus::Loading
                || snapshot.feed_error.is_some()
            {
                return false;
            }
            snapshot.status = MirrorStatus::Loading;
            true
        });

        let result = tokio::select! {
            _ = token.cancelled() => {
                debug!("Refresh #{} abandoned", ticket);
                return;
            }
            result = self.fetch() => result,
        };

        self.state.send_if_modified(|snapshot| {
            if token.is_cancelled() {
                return false;
            }
            if ticket <= snapshot.applied_ticket {
                debug!(
                    "Discarding stale refresh #{} (#{} already applied)",
                    ticket, snapshot.applied_ticket
                );
                return false;
            }

            snapshot.applied_ticket = ticket;
            match result {
                Ok(jobs) => {
                    debug!("Refresh #{} applied ({} jobs)", ticket, jobs.len());
                    snapshot.jobs = Arc::new(jobs);
                    snapshot.status = match &snapshot.feed_error {
                        Some(reason) => MirrorStatus::Error(reason.clone()),
                        None => MirrorStatus::Ready,
                    };
                }
                Err(err) => {
                    // Keep the last good collection
                    warn!("Refresh #{} failed: {}", ticket, err);
                    snapshot.status = MirrorStatus::Error(err.to_string());
                }
            }
            true
        });
    }

    async fn listen(self: Arc<Self>, mut changes: ChangeStream, token: CancellationToken) {
        loop {
            let next = tokio::select! {
                _ = token.cancelled() => return,
                next = changes.next() => next,
            };

            match next {
                Some(Ok(change)) => {
                    debug!("Change notification ({}), refreshing", change);
                    let shared = Arc::clone(&self);
                    let token = token.clone();
                    tokio::spawn(async move { shared.refresh(&token).await });
                }
                Some(Err(err)) => {
                    let err = match err {
                        AppError::Subscription(_) => err,
                        other => AppError::Subscription(other.to_string()),
                    };
                    self.lose_feed(&token, &err);
                    return;
                }
                None => {
                    let err = AppError::Subscription("Change feed closed".to_string());
                    self.lose_feed(&token, &err);
                    return;
                }
            }
        }
    }

    /// Enter the error state without touching the collection. Later
    /// refreshes still update the jobs but leave the status at `Error`.
    fn lose_feed(&self, token: &CancellationToken, err: &AppError) {
        self.state.send_if_modified(|snapshot| {
            if token.is_cancelled() {
                return false;
            }
            warn!("Jobs mirror lost its change feed: {}", err);
            let reason = err.to_string();
            snapshot.status = MirrorStatus::Error(reason.clone());
            snapshot.feed_error = Some(reason);
            snapshot.live = false;
            true
        });
    }

    fn mark_connected(&self, token: &CancellationToken) {
        self.state.send_if_modified(|snapshot| {
            if token.is_cancelled() || (snapshot.live && snapshot.feed_error.is_none()) {
                return false;
            }
            snapshot.live = true;
            snapshot.feed_error = None;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::application::ports::ChangePublisher;
    use crate::modules::jobs::domain::repository::MockJobRepository;
    use crate::modules::jobs::domain::{JobChange, JobDraft};
    use crate::modules::jobs::infrastructure::BroadcastChangeFeed;
    use chrono::Utc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use uuid::Uuid;

    fn job(title: &str, is_active: bool) -> Job {
        let draft = JobDraft {
            title: title.to_string(),
            team: "Engineering".to_string(),
            location: "Lagos, Nigeria".to_string(),
            employment_type: "Full-time".to_string(),
            level: "Senior".to_string(),
            description: "Build and run the platform.".to_string(),
            requirements: vec!["Rust".to_string()],
            responsibilities: vec!["Ship features".to_string()],
        };
        let mut job = draft.validate().unwrap().into_job(Uuid::new_v4(), Utc::now());
        job.is_active = is_active;
        job
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn activation_loads_the_scoped_query() {
        let active = job("Backend Engineer", true);
        let returned = vec![active.clone()];

        let mut repo = MockJobRepository::new();
        repo.expect_find_active()
            .times(1)
            .returning(move || Ok(returned.clone()));
        repo.expect_find_all().never();

        let feed = Arc::new(BroadcastChangeFeed::new(8));
        let mirror = JobsMirror::new(Arc::new(repo), feed.clone(), MirrorScope::ActiveOnly);
        assert_eq!(mirror.snapshot().status, MirrorStatus::Uninitialized);

        mirror.activate().await;

        let snapshot = mirror.snapshot();
        assert!(snapshot.is_ready());
        assert!(snapshot.live);
        assert_eq!(snapshot.jobs.as_slice(), &[active]);
        assert_eq!(feed.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_keeps_last_collection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = job("Product Designer", true);
        let returned = vec![first.clone()];

        let mut repo = MockJobRepository::new();
        let counter = Arc::clone(&calls);
        repo.expect_find_all().returning(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(returned.clone())
            } else {
                Err(AppError::Persistence("connection reset".to_string()))
            }
        });

        let mirror = JobsMirror::new(
            Arc::new(repo),
            Arc::new(BroadcastChangeFeed::new(8)),
            MirrorScope::All,
        );
        mirror.activate().await;
        mirror.refresh().await;

        let snapshot = mirror.snapshot();
        assert_eq!(
            snapshot.error(),
            Some("Persistence error: connection reset")
        );
        assert_eq!(snapshot.jobs.as_slice(), &[first]);
    }

    #[tokio::test]
    async fn notifications_trigger_refetch_not_patching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut repo = MockJobRepository::new();
        repo.expect_find_all().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        });

        let feed = Arc::new(BroadcastChangeFeed::new(8));
        let mirror = JobsMirror::new(Arc::new(repo), feed.clone(), MirrorScope::All);
        mirror.activate().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The payload names a job the store never returns; it must not appear
        feed.publish(JobChange::inserted(Uuid::new_v4()));
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(mirror.snapshot().jobs.is_empty());
    }

    #[tokio::test]
    async fn deactivate_discards_state_and_stops_listening() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let returned = vec![job("Legal Counsel", true)];

        let mut repo = MockJobRepository::new();
        repo.expect_find_all().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(returned.clone())
        });

        let feed = Arc::new(BroadcastChangeFeed::new(8));
        let mirror = JobsMirror::new(Arc::new(repo), feed.clone(), MirrorScope::All);
        mirror.activate().await;
        mirror.deactivate().await;

        let snapshot = mirror.snapshot();
        assert_eq!(snapshot.status, MirrorStatus::Uninitialized);
        assert!(snapshot.jobs.is_empty());
        assert!(!snapshot.live);
        assert!(!mirror.is_active());

        feed.publish(JobChange::deleted(Uuid::new_v4()));
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn refresh_on_inactive_mirror_is_ignored() {
        let mut repo = MockJobRepository::new();
        repo.expect_find_all().never();

        let mirror = JobsMirror::new(
            Arc::new(repo),
            Arc::new(BroadcastChangeFeed::new(8)),
            MirrorScope::All,
        );
        mirror.refresh().await;
        mirror.retry().await;
        mirror.deactivate().await;

        assert_eq!(mirror.snapshot().status, MirrorStatus::Uninitialized);
    }

    #[tokio::test]
    async fn second_activation_is_a_no_op() {
        let mut repo = MockJobRepository::new();
        repo.expect_find_all().times(1).returning(|| Ok(Vec::new()));

        let feed = Arc::new(BroadcastChangeFeed::new(8));
        let mirror = JobsMirror::new(Arc::new(repo), feed.clone(), MirrorScope::All);
        mirror.activate().await;
        mirror.activate().await;

        assert_eq!(feed.subscriber_count(), 1);
    }
}
