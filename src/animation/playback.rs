use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    animation::{advance, Increments, Pose, PoseStore},
    error::AnimationError,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Run through the captured frames once and stop on the last one.
    #[default]
    Once,
    /// Jump back to the first frame after the last pair and keep going.
    Loop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { pair: usize, step: u32 },
    Finished,
}

/// Drives the live pose through each pair of stored frames, one step per tick.
pub struct PlaybackController {
    state: PlaybackState,
    step_count: NonZeroU32,
    mode: PlaybackMode,
    increments: Increments,
}

impl PlaybackController {
    pub fn new(step_count: NonZeroU32, mode: PlaybackMode) -> Self {
        Self {
            state: PlaybackState::Idle,
            step_count,
            mode,
            increments: Increments::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Restarts playback from the first stored frame, which is copied into
    /// `live`. Fails without changing any state when fewer than two frames
    /// are stored.
    pub fn start(&mut self, store: &mut PoseStore, live: &mut Pose) -> Result<(), AnimationError> {
        let found = store.len();
        let first = match store.pose(0) {
            Some(first) if found >= 2 => first,
            _ => return Err(AnimationError::InsufficientFrames { found }),
        };
        *live = first;
        self.enter_pair(store, 0);
        info!(frames = found, steps = self.step_count.get(), "playback started");
        Ok(())
    }

    /// Stops playback, whether it is running or finished. Stored frames are
    /// not touched.
    pub fn cancel(&mut self) {
        match self.state {
            PlaybackState::Playing { pair, step } => {
                info!(pair, step, "playback cancelled");
            }
            PlaybackState::Finished => debug!("finished playback cleared"),
            PlaybackState::Idle => return,
        }
        self.state = PlaybackState::Idle;
    }

    /// Returns to `Idle` from any state.
    pub fn reset(&mut self) {
        self.cancel();
    }

    /// Advances one interpolation step. Does nothing unless playing.
    pub fn tick(&mut self, store: &mut PoseStore, live: &mut Pose) -> PlaybackState {
        let PlaybackState::Playing { pair, step } = self.state else {
            return self.state;
        };
        let step = step + 1;
        *live = advance(*live, &self.increments);
        trace!(pair, step, "playback step");
        if step < self.step_count.get() {
            self.state = PlaybackState::Playing { pair, step };
            return self.state;
        }

        let Some(target) = store.pose(pair + 1) else {
            // frames were removed underneath us
            self.state = PlaybackState::Finished;
            return self.state;
        };
        *live = target;
        if pair + 2 < store.len() {
            self.enter_pair(store, pair + 1);
            return self.state;
        }
        match (self.mode, store.pose(0)) {
            (PlaybackMode::Loop, Some(first)) => {
                debug!("playback looping to first frame");
                *live = first;
                self.enter_pair(store, 0);
            }
            _ => {
                info!(frames = store.len(), "playback finished");
                self.state = PlaybackState::Finished;
            }
        }
        self.state
    }

    fn enter_pair(&mut self, store: &mut PoseStore, pair: usize) {
        match store.prepare_pair(pair, self.step_count) {
            Some(increments) => {
                self.increments = increments;
                self.state = PlaybackState::Playing { pair, step: 0 };
            }
            None => self.state = PlaybackState::Finished,
        }
    }
}
