use crate::error::ExportError;
use crate::error::Result;
use crate::snapshot::ExportSnapshot;
use async_trait::async_trait;
use mcp_servers_async_utils::OrCancelExt;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;
use workflowy_protocol::Node;

/// Workflowy rate-limits the export endpoint to one call per minute, so no
/// cache may be configured to refresh faster than this.
pub const MIN_EXPORT_TTL: Duration = Duration::from_secs(60);

/// Source of full node exports.
#[async_trait]
pub trait ExportFetcher: Send + Sync {
    async fn fetch_all(&self, cancel: &CancellationToken) -> anyhow::Result<Vec<Node>>;
}

#[derive(Default)]
struct Slot {
    snapshot: Option<ExportSnapshot>,
    /// Bumped every time a fetch settles, successfully or not. Cancelled
    /// fetches do not count.
    settled: u64,
    /// Error of the most recent settle, if it failed.
    last_failure: Option<ExportError>,
}

/// TTL cache over the full node export with coalesced refresh.
///
/// Fresh reads only take the slot's read lock. Stale reads queue on a single
/// refresh mutex, so concurrent callers share one upstream fetch and all see
/// its outcome, including its failure.
pub struct ExportCache {
    fetcher: Arc<dyn ExportFetcher>,
    ttl: Duration,
    slot: RwLock<Slot>,
    refresh: Mutex<()>,
}

impl ExportCache {
    /// `ttl` values below [`MIN_EXPORT_TTL`] are raised to it.
    pub fn new(fetcher: Arc<dyn ExportFetcher>, ttl: Duration) -> Self {
        let ttl = if ttl < MIN_EXPORT_TTL {
            warn!(
                requested_secs = ttl.as_secs_f64(),
                floor_secs = MIN_EXPORT_TTL.as_secs(),
                "export cache TTL below rate-limit floor; raising it"
            );
            MIN_EXPORT_TTL
        } else {
            ttl
        };
        Self {
            fetcher,
            ttl,
            slot: RwLock::new(Slot::default()),
            refresh: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// When the currently held snapshot finished fetching, if one is held.
    pub fn cached_at(&self) -> Option<Instant> {
        self.read_slot()
            .snapshot
            .as_ref()
            .map(ExportSnapshot::fetched_at)
    }

    /// Returns the cached export, fetching a new one if it is missing or
    /// older than the TTL.
    ///
    /// A failed fetch leaves the previous snapshot in place and returns the
    /// fetcher's error. Cancelling `cancel` abandons the wait or the fetch
    /// without committing anything.
    pub async fn snapshot(&self, cancel: &CancellationToken) -> Result<ExportSnapshot> {
        let observed = {
            let slot = self.read_slot();
            if let Some(snapshot) = self.fresh(&slot) {
                debug!(nodes = snapshot.len(), "export cache hit");
                return Ok(snapshot);
            }
            slot.settled
        };

        let _refresh = self
            .refresh
            .lock()
            .or_cancel(cancel)
            .await
            .map_err(|_| ExportError::Cancelled)?;

        {
            let slot = self.read_slot();
            if let Some(snapshot) = self.fresh(&slot) {
                debug!("export refreshed while waiting; reusing it");
                return Ok(snapshot);
            }
            if slot.settled != observed
                && let Some(err) = &slot.last_failure
            {
                debug!("export refresh failed while waiting; sharing its error");
                return Err(err.clone());
            }
        }

        debug!("export cache stale; fetching");
        let started = Instant::now();
        let nodes = match self.fetcher.fetch_all(cancel).or_cancel(cancel).await {
            Ok(Ok(nodes)) => nodes,
            Ok(Err(err)) => {
                let err = ExportError::fetch(err);
                warn!(error = %err, "node export failed; keeping previous snapshot");
                let mut slot = self.write_slot();
                slot.settled += 1;
                slot.last_failure = Some(err.clone());
                return Err(err);
            }
            Err(_) => {
                debug!("node export cancelled");
                return Err(ExportError::Cancelled);
            }
        };

        let snapshot = ExportSnapshot::new(nodes, Instant::now());
        info!(
            nodes = snapshot.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "refreshed node export"
        );
        let mut slot = self.write_slot();
        slot.snapshot = Some(snapshot.clone());
        slot.settled += 1;
        slot.last_failure = None;
        Ok(snapshot)
    }

    /// Drops the held snapshot so the next read fetches regardless of TTL.
    ///
    /// Does not wait for an in-flight refresh; if one is running, its result
    /// is still committed when it lands.
    pub fn invalidate(&self) {
        let mut slot = self.write_slot();
        if slot.snapshot.take().is_some() {
            debug!("export cache invalidated");
        }
    }

    fn fresh(&self, slot: &Slot) -> Option<ExportSnapshot> {
        slot.snapshot
            .as_ref()
            .filter(|snapshot| snapshot.is_fresh(self.ttl, Instant::now()))
            .cloned()
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Slot> {
        match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Slot> {
        match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
