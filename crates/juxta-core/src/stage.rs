//! The before/after slot pair.
//!
//! Each slot carries a request token. A load takes a [`LoadTicket`] stamped
//! with the token at the time of the request; results whose ticket no longer
//! matches (the slot was cleared or re-requested meanwhile) are discarded.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::asset::{ImageAsset, Slot};
use crate::error::Result;

/// Which slots are populated. Pending assets count as populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
    Empty,
    SingleBefore,
    SingleAfter,
    Paired,
}

impl StageState {
    /// The divider is interactive only here.
    pub fn is_paired(self) -> bool {
        self == Self::Paired
    }

    pub fn has_images(self) -> bool {
        self != Self::Empty
    }
}

/// Identifies one load request for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub slot: Slot,
    pub token: u64,
}

/// Result of feeding a load result back into the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Updated,
    /// The ticket was superseded; the result was dropped.
    Stale,
}

#[derive(Default)]
struct SlotEntry {
    asset: Option<ImageAsset>,
    /// Asset displaced by a pending one, restored if decoding fails.
    replaced: Option<ImageAsset>,
    token: u64,
    requested_at: Option<Instant>,
    slow_reported: bool,
}

impl SlotEntry {
    fn finish(&mut self) {
        self.requested_at = None;
        self.slow_reported = false;
    }
}

#[derive(Default)]
pub struct Stage {
    before: SlotEntry,
    after: SlotEntry,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, slot: Slot) -> &SlotEntry {
        match slot {
            Slot::Before => &self.before,
            Slot::After => &self.after,
        }
    }

    fn entry_mut(&mut self, slot: Slot) -> &mut SlotEntry {
        match slot {
            Slot::Before => &mut self.before,
            Slot::After => &mut self.after,
        }
    }

    pub fn state(&self) -> StageState {
        match (self.before.asset.is_some(), self.after.asset.is_some()) {
            (false, false) => StageState::Empty,
            (true, false) => StageState::SingleBefore,
            (false, true) => StageState::SingleAfter,
            (true, true) => StageState::Paired,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&ImageAsset> {
        self.entry(slot).asset.as_ref()
    }

    pub fn before(&self) -> Option<&ImageAsset> {
        self.get(Slot::Before)
    }

    pub fn after(&self) -> Option<&ImageAsset> {
        self.get(Slot::After)
    }

    /// Current token of a slot.
    pub fn token(&self, slot: Slot) -> u64 {
        self.entry(slot).token
    }

    /// A request is outstanding or the held asset is still pending.
    pub fn is_loading(&self, slot: Slot) -> bool {
        let entry = self.entry(slot);
        entry.requested_at.is_some() || entry.asset.as_ref().is_some_and(|a| !a.is_ready())
    }

    /// Start a new load for `slot`, invalidating any earlier ticket.
    pub fn begin_load(&mut self, slot: Slot) -> LoadTicket {
        let entry = self.entry_mut(slot);
        entry.token += 1;
        entry.requested_at = Some(Instant::now());
        entry.slow_reported = false;
        debug!(%slot, token = entry.token, "Load requested");
        LoadTicket {
            slot,
            token: entry.token,
        }
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.entry(ticket.slot).token == ticket.token
    }

    /// Apply the stage-1 result (bytes read, asset pending).
    ///
    /// On error the slot is left as it was and the error is returned.
    pub fn apply_read(&mut self, ticket: LoadTicket, result: Result<ImageAsset>) -> Result<Applied> {
        if !self.is_current(ticket) {
            warn!(slot = %ticket.slot, token = ticket.token, "Discarding stale read result");
            return Ok(Applied::Stale);
        }
        let entry = self.entry_mut(ticket.slot);
        match result {
            Ok(pending) => {
                // Keep the last ready asset as fallback across superseded loads.
                let previous = entry.asset.replace(pending);
                if entry.replaced.is_none() {
                    entry.replaced = previous.filter(|a| a.is_ready());
                }
                Ok(Applied::Updated)
            }
            Err(e) => {
                entry.finish();
                // A pending asset left by a superseded load will never decode.
                if entry.asset.as_ref().is_some_and(|a| !a.is_ready()) {
                    entry.asset = entry.replaced.take();
                }
                Err(e)
            }
        }
    }

    /// Apply the stage-2 result (decoded asset).
    ///
    /// On error the asset that was displaced by the pending one is restored.
    pub fn apply_decoded(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageAsset>,
    ) -> Result<Applied> {
        if !self.is_current(ticket) {
            warn!(slot = %ticket.slot, token = ticket.token, "Discarding stale decode result");
            return Ok(Applied::Stale);
        }
        let entry = self.entry_mut(ticket.slot);
        entry.finish();
        match result {
            Ok(ready) => {
                entry.asset = Some(ready);
                entry.replaced = None;
                Ok(Applied::Updated)
            }
            Err(e) => {
                entry.asset = entry.replaced.take();
                Err(e)
            }
        }
    }

    /// Put an asset straight into a slot, superseding any in-flight load.
    pub fn insert(&mut self, slot: Slot, asset: ImageAsset) {
        let entry = self.entry_mut(slot);
        entry.token += 1;
        entry.asset = Some(asset);
        entry.replaced = None;
        entry.finish();
    }

    /// Drop both images. In-flight loads become stale.
    pub fn clear(&mut self) {
        for slot in Slot::BOTH {
            let entry = self.entry_mut(slot);
            entry.token += 1;
            entry.asset = None;
            entry.replaced = None;
            entry.finish();
        }
        debug!("Stage cleared");
    }

    /// Both assets, when both slots are filled.
    pub fn pair(&self) -> Option<(&ImageAsset, &ImageAsset)> {
        Some((self.before()?, self.after()?))
    }

    /// Slots whose request has been outstanding longer than `threshold` and
    /// has not been reported yet. Each slow request is returned once.
    pub fn take_slow_loads(&mut self, threshold: Duration) -> Vec<Slot> {
        let now = Instant::now();
        let mut slow = Vec::new();
        for slot in Slot::BOTH {
            let entry = self.entry_mut(slot);
            if let Some(start) = entry.requested_at {
                if !entry.slow_reported && now.duration_since(start) >= threshold {
                    entry.slow_reported = true;
                    slow.push(slot);
                }
            }
        }
        slow
    }
}
