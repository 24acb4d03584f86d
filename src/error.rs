use thiserror::Error;

/// Failures of the keyframe core itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("keyframe store is full ({capacity} frames), capture stopped")]
    CapacityExceeded { capacity: usize },
    #[error("playback needs at least two captured frames, found {found}")]
    InsufficientFrames { found: usize },
    #[error("interpolation step count must be positive")]
    ZeroStepCount,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Animation(#[from] AnimationError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse ron: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to write ron: {0}")]
    Serialize(#[from] ron::Error),
}
