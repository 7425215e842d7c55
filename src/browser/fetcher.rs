//! Fetch intents and the background fetcher
//!
//! A fetch is described by a `FetchIntent`. `fetch` runs one intent against a
//! `CardSource` and normalizes the response; `Fetcher` runs it on a worker
//! thread and hands the tagged `Completion` back over a channel.

use super::error::FetchError;
use crate::api::{CardRecord, CardSource, PAGE_SIZE};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Which request path a fetch takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Paged catalog listing
    Listing,
    /// Name search
    Search,
}

impl FetchMode {
    /// User-facing message for a response with zero records
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Listing => "No card data found",
            Self::Search => "No cards found matching your search",
        }
    }
}

/// The latest user intent a fetch serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchIntent {
    /// Load one listing page (1-based)
    Listing(u32),
    /// Search by name
    Search(String),
}

impl FetchIntent {
    /// Request path for this intent
    #[must_use]
    pub const fn mode(&self) -> FetchMode {
        match self {
            Self::Listing(_) => FetchMode::Listing,
            Self::Search(_) => FetchMode::Search,
        }
    }
}

/// Normalized result of a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedCards {
    /// Cards to show, in response order
    pub cards: Vec<CardRecord>,
    /// Page count for the pagination controller
    pub total_pages: u32,
}

/// Result of running one intent
pub type FetchOutcome = Result<FetchedCards, FetchError>;

/// A settled fetch, tagged with the generation it was dispatched under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generation token assigned at dispatch
    pub generation: u64,
    /// The intent that was fetched
    pub intent: FetchIntent,
    /// What came back
    pub outcome: FetchOutcome,
}

/// Number of listing pages for a catalog of `total_count` records
///
/// Never less than 1.
#[must_use]
pub fn total_pages_for(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Run `intent` against `source` on the current thread
///
/// # Errors
/// Returns `FetchError::EmptyResult` when the response holds no records and
/// `FetchError::Transport` when the request itself fails.
pub fn fetch(source: &dyn CardSource, intent: &FetchIntent) -> FetchOutcome {
    match intent {
        FetchIntent::Listing(page) => {
            let response = source.fetch_page(*page, PAGE_SIZE)?;
            if response.data.is_empty() {
                return Err(FetchError::EmptyResult(FetchMode::Listing));
            }
            Ok(FetchedCards {
                total_pages: total_pages_for(response.total_count),
                cards: response.data,
            })
        }
        FetchIntent::Search(term) => {
            let response = source.search_by_name(term)?;
            if response.data.is_empty() {
                return Err(FetchError::EmptyResult(FetchMode::Search));
            }
            Ok(FetchedCards {
                cards: response.data,
                total_pages: 1,
            })
        }
    }
}

/// A dispatched intent waiting for the worker
type Job = (u64, FetchIntent);

/// Runs fetches off the UI thread
///
/// One long-lived worker serves every dispatch in order. Jobs that queue up
/// while a fetch is in flight are collapsed to the newest one, so a burst of
/// dispatches costs at most two requests.
pub struct Fetcher {
    jobs: Option<Sender<Job>>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl Fetcher {
    /// Create a fetcher over `source` and start its worker
    #[must_use]
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let (jobs, queue) = mpsc::channel();
        let results = sender.clone();

        let spawned = thread::Builder::new()
            .name("card-fetch".to_string())
            .spawn(move || run_worker(source.as_ref(), &queue, &results));

        let jobs = match spawned {
            Ok(_) => Some(jobs),
            Err(err) => {
                tracing::error!(%err, "failed to spawn fetch worker");
                None
            }
        };

        Self {
            jobs,
            sender,
            receiver,
        }
    }

    /// Queue `intent` for the background worker
    ///
    /// The completion is delivered through `try_recv`/`recv_timeout`. There
    /// is no cancellation; callers discard stale completions by generation.
    pub fn dispatch(&self, generation: u64, intent: FetchIntent) {
        let Some(jobs) = &self.jobs else {
            self.fail(generation, intent, "fetch worker is not running");
            return;
        };
        if let Err(mpsc::SendError((generation, intent))) = jobs.send((generation, intent)) {
            tracing::error!(generation, "fetch worker has stopped");
            self.fail(generation, intent, "fetch worker has stopped");
        }
    }

    fn fail(&self, generation: u64, intent: FetchIntent, reason: &str) {
        let _ = self.sender.send(Completion {
            generation,
            intent,
            outcome: Err(FetchError::Transport(reason.to_string())),
        });
    }

    /// Next settled fetch, if any, without blocking
    #[must_use]
    pub fn try_recv(&self) -> Option<Completion> {
        self.receiver.try_recv().ok()
    }

    /// Next settled fetch, waiting at most `timeout`
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Completion> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Serve jobs until every job sender is gone
fn run_worker(source: &dyn CardSource, queue: &Receiver<Job>, results: &Sender<Completion>) {
    while let Ok(mut job) = queue.recv() {
        // Only the newest queued job can still be current
        let mut skipped = 0_usize;
        while let Ok(newer) = queue.try_recv() {
            job = newer;
            skipped += 1;
        }
        if skipped > 0 {
            tracing::debug!(skipped, generation = job.0, "coalesced queued fetches");
        }

        let (generation, intent) = job;
        let outcome = fetch(source, &intent);
        let completion = Completion {
            generation,
            intent,
            outcome,
        };
        // A closed channel means the browser is gone
        if results.send(completion).is_err() {
            break;
        }
    }
    tracing::debug!("fetch worker stopped");
}
