//! Stand-in snapshot sources used until a live depth feed is wired.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::domain::errors::{DepthError, DepthResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_depth::repositories::DepthSnapshotSource;
use crate::domain::market_depth::{DepthLevel, DepthSnapshot};
use crate::{log_debug, log_info};

/// Ten-level sample ladder for symbol 123.
pub fn fixture_snapshot() -> DepthSnapshot {
    #[rustfmt::skip]
    let rows = vec![
        DepthLevel::new("1230", 0, 1000.0,  500.0, 1010.0,  700.0),
        DepthLevel::new("1231", 1,  990.0,  700.0, 1012.0,  400.0),
        DepthLevel::new("1232", 2,  985.0, 1200.0, 1013.0,  800.0),
        DepthLevel::new("1233", 3,  984.0, 1300.0, 1018.0,  750.0),
        DepthLevel::new("1234", 4,  970.0,  800.0, 1021.0,  900.0),
        DepthLevel::new("1235", 5,  969.0,  700.0, 1026.0, 1500.0),
        DepthLevel::new("1236", 6,  950.0,  750.0, 1027.0, 1500.0),
        DepthLevel::new("1237", 7,  945.0,  900.0, 1029.0, 2000.0),
        DepthLevel::new("1238", 8,  943.0,  500.0, 1031.0,  500.0),
        DepthLevel::new("1239", 9,  940.0,  200.0, 1024.0,  800.0),
    ];
    DepthSnapshot::new(rows)
}

/// Always serves the same snapshot through `latest`. It never changes, so
/// subscribers are never called.
pub struct FixtureDepthSource {
    snapshot: DepthSnapshot,
}

impl FixtureDepthSource {
    pub fn new(snapshot: DepthSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Default for FixtureDepthSource {
    fn default() -> Self {
        Self::new(fixture_snapshot())
    }
}

impl DepthSnapshotSource for FixtureDepthSource {
    fn latest(&self) -> Option<DepthSnapshot> {
        Some(self.snapshot.clone())
    }

    fn subscribe(&mut self, _callback: Box<dyn FnMut(DepthSnapshot)>) -> DepthResult<()> {
        Ok(())
    }

    fn unsubscribe(&mut self) -> DepthResult<()> {
        Ok(())
    }
}

const PRICE_STEPS: [f64; 4] = [0.0, 1.0, -1.0, 0.5];
const QUANTITY_STEPS: [f64; 4] = [1.0, 1.1, 0.9, 1.25];

/// Derives `count` snapshots from `base` by nudging prices and quantities
/// with a fixed pattern, so consecutive frames tick both ways.
pub fn replay_frames(base: &DepthSnapshot, count: usize) -> Vec<DepthSnapshot> {
    (0..count)
        .map(|step| {
            base.iter()
                .enumerate()
                .map(|(i, level)| {
                    let k = (step + i) % PRICE_STEPS.len();
                    DepthLevel::new(
                        level.id.clone(),
                        level.level,
                        level.bid_price.value() + PRICE_STEPS[k],
                        (level.bid_quantity.value() * QUANTITY_STEPS[k]).round(),
                        level.ask_price.value() - PRICE_STEPS[k],
                        (level.ask_quantity.value() * QUANTITY_STEPS[(k + 1) % QUANTITY_STEPS.len()]).round(),
                    )
                })
                .collect()
        })
        .collect()
}

type SnapshotCallback = Box<dyn FnMut(DepthSnapshot)>;

/// Cycles through a fixed list of snapshots on a timer.
pub struct ReplayDepthSource {
    frames: Vec<DepthSnapshot>,
    interval: Duration,
    cursor: Cell<usize>,
    last_delivered: RefCell<Option<DepthSnapshot>>,
    callback: RefCell<Option<SnapshotCallback>>,
}

impl ReplayDepthSource {
    pub fn new(frames: Vec<DepthSnapshot>, interval: Duration) -> DepthResult<Self> {
        if frames.is_empty() {
            return Err(DepthError::Source("replay needs at least one frame".to_string()));
        }
        Ok(Self {
            frames,
            interval,
            cursor: Cell::new(0),
            last_delivered: RefCell::new(None),
            callback: RefCell::new(None),
        })
    }

    /// Replay built from the sample ladder.
    pub fn from_fixture(interval: Duration) -> DepthResult<Self> {
        Self::new(replay_frames(&fixture_snapshot(), 8), interval)
    }

    /// Delivers the next frame to the subscriber, if any. Returns false once
    /// nobody is subscribed.
    pub fn advance(&self) -> bool {
        let mut slot = self.callback.borrow_mut();
        let Some(callback) = slot.as_mut() else {
            return false;
        };
        let index = self.cursor.get();
        self.cursor.set((index + 1) % self.frames.len());
        log_debug!(LogComponent::Infrastructure("Replay"), "frame {} of {}", index + 1, self.frames.len());
        let frame = self.frames[index].clone();
        *self.last_delivered.borrow_mut() = Some(frame.clone());
        callback(frame);
        true
    }

    /// Runs until unsubscribed, one frame per interval.
    pub async fn play(&self) {
        log_info!(
            LogComponent::Infrastructure("Replay"),
            "replaying {} frames every {:?}",
            self.frames.len(),
            self.interval
        );
        while self.advance() {
            gloo_timers::future::sleep(self.interval).await;
        }
        log_info!(LogComponent::Infrastructure("Replay"), "replay stopped");
    }
}

impl ReplayDepthSource {
    fn attach(&self, callback: SnapshotCallback) -> DepthResult<()> {
        let mut slot = self.callback.borrow_mut();
        if slot.is_some() {
            return Err(DepthError::Source("replay already has a subscriber".to_string()));
        }
        *slot = Some(callback);
        Ok(())
    }

    fn detach(&self) {
        self.callback.borrow_mut().take();
    }
}

impl DepthSnapshotSource for ReplayDepthSource {
    fn latest(&self) -> Option<DepthSnapshot> {
        self.last_delivered.borrow().clone()
    }

    fn subscribe(&mut self, callback: SnapshotCallback) -> DepthResult<()> {
        self.attach(callback)
    }

    fn unsubscribe(&mut self) -> DepthResult<()> {
        self.detach();
        Ok(())
    }
}

/// Shared handle, so the view can keep playing while the feature owns the
/// subscription.
impl DepthSnapshotSource for Rc<ReplayDepthSource> {
    fn latest(&self) -> Option<DepthSnapshot> {
        self.last_delivered.borrow().clone()
    }

    fn subscribe(&mut self, callback: SnapshotCallback) -> DepthResult<()> {
        self.attach(callback)
    }

    fn unsubscribe(&mut self) -> DepthResult<()> {
        self.detach();
        Ok(())
    }
}
