use std::{fs, num::NonZeroU32, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    animation::{compute_increments, Increments, Pose},
    error::{AnimationError, Error},
};

/// A captured pose and, once playback reaches it, the increments that
/// carry it to the next captured pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyFrame {
    pub pose: Pose,
    increments: Option<Increments>,
}

impl KeyFrame {
    fn new(pose: Pose) -> Self {
        Self {
            pose,
            increments: None,
        }
    }

    pub fn increments(&self) -> Option<&Increments> {
        self.increments.as_ref()
    }
}

#[derive(Serialize, Deserialize)]
struct SavedFrames {
    frames: Vec<Pose>,
}

/// Ordered, fixed-capacity sequence of captured poses, filled from slot 0.
pub struct PoseStore {
    frames: Vec<KeyFrame>,
    capacity: usize,
}

impl PoseStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Copies `live` into the next free slot and returns its index.
    pub fn capture(&mut self, live: &Pose) -> Result<usize, AnimationError> {
        if self.is_full() {
            return Err(AnimationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let index = self.frames.len();
        self.frames.push(KeyFrame::new(*live));
        info!(index, ?live, "captured keyframe");
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&KeyFrame> {
        self.frames.get(index)
    }

    pub fn pose(&self, index: usize) -> Option<Pose> {
        self.frames.get(index).map(|frame| frame.pose)
    }

    pub fn poses(&self) -> impl Iterator<Item = &Pose> + '_ {
        self.frames.iter().map(|frame| &frame.pose)
    }

    /// Recomputes the increments from frame `index` to frame `index + 1`.
    ///
    /// Returns `None` when `index` is not the start of a stored pair.
    pub fn prepare_pair(&mut self, index: usize, step_count: NonZeroU32) -> Option<Increments> {
        let to = self.pose(index + 1)?;
        let frame = self.frames.get_mut(index)?;
        let increments = compute_increments(&frame.pose, &to, step_count);
        frame.increments = Some(increments);
        debug!(index, ?increments, "prepared keyframe pair");
        Some(increments)
    }

    /// Writes the captured poses to `path`. Increments are not persisted.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let saved = SavedFrames {
            frames: self.poses().copied().collect(),
        };
        let text = ron::ser::to_string_pretty(&saved, ron::ser::PrettyConfig::default())?;
        fs::write(path, text)?;
        info!(frames = saved.frames.len(), path = %path.display(), "saved keyframes");
        Ok(())
    }

    /// Replaces the captured poses with the ones stored at `path`.
    ///
    /// The store is left untouched when the file cannot be read or holds
    /// more frames than fit.
    pub fn load(&mut self, path: &Path) -> Result<usize, Error> {
        let text = fs::read_to_string(path)?;
        let saved: SavedFrames = ron::from_str(&text)?;
        if saved.frames.len() > self.capacity {
            return Err(AnimationError::CapacityExceeded {
                capacity: self.capacity,
            }
            .into());
        }
        self.frames = saved.frames.into_iter().map(KeyFrame::new).collect();
        info!(frames = self.frames.len(), path = %path.display(), "loaded keyframes");
        Ok(self.frames.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    fn pose(i: usize) -> Pose {
        Pose {
            yaw: i as f32 * 10.0,
            head: -(i as f32),
            ..Pose::at(Vec3::new(i as f32, 0.0, 0.5))
        }
    }

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("kor_keyframes_{}_{name}.ron", std::process::id()))
    }

    #[test]
    fn capture_fills_slots_in_order() {
        let mut store = PoseStore::new(9);
        for i in 0..9 {
            assert_eq!(store.len(), i);
            assert_eq!(store.capture(&pose(i)), Ok(i));
            assert_eq!(store.len(), i + 1);
        }
        for i in 0..9 {
            assert_eq!(store.pose(i), Some(pose(i)));
        }
    }

    #[test]
    fn capture_beyond_capacity_leaves_store_unchanged() {
        let mut store = PoseStore::new(2);
        store.capture(&pose(0)).unwrap();
        store.capture(&pose(1)).unwrap();
        assert!(store.is_full());
        assert_eq!(
            store.capture(&pose(7)),
            Err(AnimationError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.poses().copied().collect::<Vec<_>>(), [pose(0), pose(1)]);
    }

    #[test]
    fn reset_starts_a_new_session() {
        let mut store = PoseStore::new(3);
        store.capture(&pose(0)).unwrap();
        store.capture(&pose(1)).unwrap();
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.capture(&pose(5)), Ok(0));
    }

    #[test]
    fn prepare_pair_caches_increments_on_the_first_frame() {
        let mut store = PoseStore::new(3);
        store.capture(&pose(0)).unwrap();
        store.capture(&pose(2)).unwrap();
        let steps = NonZeroU32::new(2).unwrap();
        let increments = store.prepare_pair(0, steps).unwrap();
        assert_eq!(increments.per_step().position.x, 1.0);
        assert_eq!(store.get(0).unwrap().increments(), Some(&increments));
        assert!(store.get(1).unwrap().increments().is_none());
        assert!(store.prepare_pair(1, steps).is_none());
    }

    #[test]
    fn save_then_load_restores_poses() {
        let path = temp_file("roundtrip");
        let mut store = PoseStore::new(4);
        for i in 0..3 {
            store.capture(&pose(i)).unwrap();
        }
        store.save(&path).unwrap();

        let mut loaded = PoseStore::new(4);
        loaded.capture(&pose(8)).unwrap();
        assert_eq!(loaded.load(&path).unwrap(), 3);
        assert_eq!(
            loaded.poses().copied().collect::<Vec<_>>(),
            store.poses().copied().collect::<Vec<_>>()
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_rejects_more_frames_than_capacity() {
        let path = temp_file("overflow");
        let mut store = PoseStore::new(3);
        for i in 0..3 {
            store.capture(&pose(i)).unwrap();
        }
        store.save(&path).unwrap();

        let mut small = PoseStore::new(2);
        small.capture(&pose(4)).unwrap();
        assert!(matches!(
            small.load(&path),
            Err(Error::Animation(AnimationError::CapacityExceeded { capacity: 2 }))
        ));
        assert_eq!(small.poses().copied().collect::<Vec<_>>(), [pose(4)]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_reports_missing_file() {
        let mut store = PoseStore::new(2);
        let result = store.load(&temp_file("does_not_exist"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
