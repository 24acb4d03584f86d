use std::{num::NonZeroU32, path::PathBuf};

use tracing::{info, warn};

use crate::{
    animation::{PlaybackController, PlaybackState, Pose, PoseStore, Spinner, TriangleOscillator},
    config::Settings,
    error::{AnimationError, Error},
};

/// Discrete requests sampled from input once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationCommand {
    CapturePose,
    StartPlayback,
    CancelPlayback,
    ClearCaptures,
    ToggleBall,
    ToggleDog,
    SaveKeyframes,
    LoadKeyframes,
}

/// All animation state of the scene, advanced once per tick.
pub struct AnimationState {
    live: Pose,
    store: PoseStore,
    playback: PlaybackController,
    ball: Spinner,
    head_swing: TriangleOscillator,
    keyframe_file: PathBuf,
}

impl AnimationState {
    pub fn new(settings: &Settings) -> Result<Self, AnimationError> {
        let step_count =
            NonZeroU32::new(settings.step_count).ok_or(AnimationError::ZeroStepCount)?;
        let swing = &settings.head_swing;
        Ok(Self {
            live: Pose::default(),
            store: PoseStore::new(settings.capacity),
            playback: PlaybackController::new(step_count, settings.playback_mode),
            ball: Spinner::new(settings.ball_spin_delta),
            head_swing: TriangleOscillator::new(swing.step, swing.min, swing.max),
            keyframe_file: settings.keyframe_file.clone(),
        })
    }

    pub fn live_pose(&self) -> &Pose {
        &self.live
    }

    pub fn store(&self) -> &PoseStore {
        &self.store
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn ball(&self) -> &Spinner {
        &self.ball
    }

    pub fn head_swing(&self) -> &TriangleOscillator {
        &self.head_swing
    }

    pub fn apply(&mut self, command: AnimationCommand) -> Result<(), Error> {
        match command {
            AnimationCommand::CapturePose => {
                self.store.capture(&self.live)?;
            }
            AnimationCommand::StartPlayback => {
                self.playback.start(&mut self.store, &mut self.live)?;
            }
            AnimationCommand::CancelPlayback => self.playback.cancel(),
            AnimationCommand::ClearCaptures => {
                self.playback.reset();
                self.store.reset();
                info!("cleared captured keyframes");
            }
            AnimationCommand::ToggleBall => {
                self.ball.enabled = !self.ball.enabled;
                info!(enabled = self.ball.enabled, "ball animation toggled");
            }
            AnimationCommand::ToggleDog => {
                self.head_swing.enabled = !self.head_swing.enabled;
                info!(enabled = self.head_swing.enabled, "dog animation toggled");
            }
            AnimationCommand::SaveKeyframes => self.store.save(&self.keyframe_file)?,
            AnimationCommand::LoadKeyframes => {
                self.store.load(&self.keyframe_file)?;
                self.playback.reset();
            }
        }
        Ok(())
    }

    /// Applies held posing keys. Ignored while playback owns the live pose.
    pub fn pose_manually(&mut self, delta: &Pose) {
        if self.playback.is_playing() {
            return;
        }
        self.live = self.live + *delta;
    }

    /// One simulation tick: playback first, then the oscillators.
    pub fn tick(&mut self) {
        self.playback.tick(&mut self.store, &mut self.live);
        self.ball.tick();
        self.head_swing.tick();
    }

    /// The live pose with the head swing layered on top.
    pub fn rendered_pose(&self) -> Pose {
        Pose {
            head: self.live.head + self.head_swing.angle,
            ..self.live
        }
    }

    /// Applies a batch of commands, logging the rejected ones.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = AnimationCommand>) {
        for command in commands {
            if let Err(e) = self.apply(command) {
                warn!(?command, "{}", e);
            }
        }
    }
}
