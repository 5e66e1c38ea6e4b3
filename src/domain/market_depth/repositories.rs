use crate::domain::errors::DepthResult;
use crate::domain::market_depth::DepthSnapshot;

/// Upstream producer of depth snapshots. Every delivery is a complete
/// replacement of the ladder; partial updates are not part of the contract.
pub trait DepthSnapshotSource {
    /// Most recent snapshot, `None` before the first delivery.
    fn latest(&self) -> Option<DepthSnapshot>;

    /// Push every future snapshot into `callback`, one at a time. The current
    /// one is not replayed; read it with [`latest`](Self::latest).
    fn subscribe(&mut self, callback: Box<dyn FnMut(DepthSnapshot)>) -> DepthResult<()>;

    fn unsubscribe(&mut self) -> DepthResult<()>;
}
