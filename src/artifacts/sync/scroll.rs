use crate::artifacts::alignment::Side;
use std::time::{Duration, Instant};

/// How long scroll events echoing a synchronized scroll are ignored.
pub const SUPPRESSION_WINDOW: Duration = Duration::from_millis(50);

/// Where a scrollable view currently is, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    /// Height of the whole content.
    pub extent: f64,
    /// Height of the visible part.
    pub viewport: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, extent: f64, viewport: f64) -> Self {
        ScrollPosition {
            offset,
            extent,
            viewport,
        }
    }

    fn range(&self) -> f64 {
        (self.extent - self.viewport).max(0.0)
    }

    /// How far down the view is scrolled, from 0 (top) to 1 (bottom).
    pub fn fraction(&self) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }

    /// The offset that scrolls this view to `fraction` of its range.
    pub fn offset_for(&self, fraction: f64) -> f64 {
        self.range() * fraction.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    /// `source` drove the last synchronized scroll; echoes from the other
    /// side are ignored until `until`.
    Syncing { source: Side, until: Instant },
}

/// Keeps two independently scrollable views at the same relative position.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    state: SyncState,
    window: Duration,
    enabled: bool,
}

impl Default for ScrollSync {
    fn default() -> Self {
        ScrollSync::new(SUPPRESSION_WINDOW)
    }
}

impl ScrollSync {
    pub fn new(window: Duration) -> Self {
        ScrollSync {
            state: SyncState::Idle,
            window,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = SyncState::Idle;
        }
    }

    /// The state at `now`, after any elapsed suppression window.
    pub fn state(&mut self, now: Instant) -> SyncState {
        if let SyncState::Syncing { until, .. } = self.state
            && now >= until
        {
            self.state = SyncState::Idle;
        }
        self.state
    }

    /// Handles a scroll of the `source` view.
    ///
    /// Returns the offset the other view has to be moved to, or `None` when
    /// the event is the echo of a synchronized scroll or syncing is disabled.
    pub fn on_scroll(
        &mut self,
        source: Side,
        position: ScrollPosition,
        target: ScrollPosition,
        now: Instant,
    ) -> Option<f64> {
        if !self.enabled {
            return None;
        }

        match self.state(now) {
            SyncState::Syncing { source: driver, .. } if driver != source => {
                tracing::trace!(%source, "ignoring scroll echo");
                None
            }
            _ => {
                self.state = SyncState::Syncing {
                    source,
                    until: now + self.window,
                };
                Some(target.offset_for(position.fraction()))
            }
        }
    }
}
