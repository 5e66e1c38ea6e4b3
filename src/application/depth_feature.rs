use leptos::*;

use crate::domain::errors::DepthResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_depth::repositories::DepthSnapshotSource;
use crate::domain::market_depth::{DepthFrame, DepthLadder, DepthSnapshot};
use crate::{log_debug, log_info};

/// Boundary between the snapshot source and the table: every snapshot the
/// source pushes lands in `snapshot` untouched.
pub struct DepthFeature<S: DepthSnapshotSource> {
    source: S,
    snapshot: RwSignal<Option<DepthSnapshot>>,
    connected: bool,
}

impl<S: DepthSnapshotSource> DepthFeature<S> {
    pub fn new(source: S, snapshot: RwSignal<Option<DepthSnapshot>>) -> Self {
        Self { source, snapshot, connected: false }
    }

    /// Publishes the source's latest snapshot, if any, then follows its pushes.
    pub fn connect(&mut self) -> DepthResult<()> {
        if self.connected {
            return Ok(());
        }
        if let Some(latest) = self.source.latest() {
            self.snapshot.set(Some(latest));
        }

        let snapshot = self.snapshot;
        self.source.subscribe(Box::new(move |next: DepthSnapshot| {
            log_debug!(LogComponent::Application("DepthFeature"), "snapshot with {} rows", next.len());
            snapshot.set(Some(next));
        }))?;
        self.connected = true;
        log_info!(LogComponent::Application("DepthFeature"), "depth feed connected");
        Ok(())
    }

    pub fn disconnect(&mut self) -> DepthResult<()> {
        if self.connected {
            self.source.unsubscribe()?;
            self.connected = false;
            log_info!(LogComponent::Application("DepthFeature"), "depth feed disconnected");
        }
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot(&self) -> RwSignal<Option<DepthSnapshot>> {
        self.snapshot
    }
}

/// Drives a [`DepthLadder`] from `snapshot`: each arrival is applied exactly
/// once and the resulting frame is written to `frame`.
pub fn bind_ladder(snapshot: Signal<Option<DepthSnapshot>>, frame: RwSignal<DepthFrame>) {
    let ladder = store_value(DepthLadder::new());
    create_effect(move |_| {
        let next = snapshot.with(|current| {
            ladder.update_value(|ladder| {
                ladder.apply(current.as_ref());
            });
            ladder.with_value(|ladder| ladder.frame().clone())
        });
        frame.set(next);
    });
}
