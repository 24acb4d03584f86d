use crate::{
    animation::{AnimationState, Rig},
    camera::FlyCamera,
    config::Settings,
    controls::{Bindings, ManualSpeed},
    error::AnimationError,
    input::Input,
    DisplayRequest, Drawer, GameScene, GameSceneState, Loader,
};

/// The keyframe demo: a dog that can be posed, captured and played back,
/// with a spinning ball beside it.
pub struct DogScene {
    animation: AnimationState,
    camera: FlyCamera,
    bindings: Bindings,
    manual_speed: ManualSpeed,
    rig: Rig,
    meshes: Vec<usize>,
}

impl DogScene {
    pub fn new(settings: &Settings) -> Result<Self, AnimationError> {
        Ok(Self {
            animation: AnimationState::new(settings)?,
            camera: FlyCamera::new(&settings.camera),
            bindings: settings.bindings.clone(),
            manual_speed: settings.manual_speed.clone(),
            rig: Rig::dog(),
            meshes: Vec::new(),
        })
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }
}

impl GameScene for DogScene {
    fn load(&mut self, loader: &mut dyn Loader) {
        self.meshes = self
            .rig
            .parts()
            .iter()
            .map(|spec| loader.load(spec.asset, &format!("{:?}", spec.part), spec.scale))
            .collect();
    }

    fn update(&mut self, input: &Input) -> GameSceneState {
        if self.bindings.quit_requested(input) {
            return GameSceneState::Stop;
        }
        self.animation.apply_all(self.bindings.commands(input));
        let delta = self.bindings.manual_delta(input, &self.manual_speed);
        self.animation.pose_manually(&delta);
        self.animation.tick();
        self.camera.update(input, &self.bindings.camera);
        GameSceneState::Continue
    }

    fn display(&self, drawer: &mut dyn Drawer) {
        let transforms = self
            .rig
            .compute_transforms(&self.animation.rendered_pose(), self.animation.ball().angle);
        let requests: Vec<DisplayRequest> = self
            .meshes
            .iter()
            .zip(&transforms)
            .map(|(&mesh, transform)| {
                DisplayRequest::InWorldSpace(mesh, std::slice::from_ref(transform))
            })
            .collect();
        drawer.draw(self.camera.transform(), &requests);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        animation::{Part, PlaybackState},
        geometry::{Transform, Vec3},
    };

    #[derive(Default)]
    struct Recorder {
        assets: Vec<String>,
        drawn: Vec<(usize, [f32; 3])>,
    }

    impl Loader for Recorder {
        fn load(&mut self, asset: &str, _mesh: &str, _base_scale: f32) -> usize {
            self.assets.push(asset.to_owned());
            self.assets.len() - 1
        }
    }

    impl Drawer for Recorder {
        fn draw(&mut self, _camera_transform: Transform, display_request: &[DisplayRequest]) {
            self.drawn.clear();
            for request in display_request {
                let DisplayRequest::InWorldSpace(mesh, transforms) = request;
                for transform in *transforms {
                    self.drawn.push((*mesh, transform.translation));
                }
            }
        }
    }

    fn scene() -> DogScene {
        DogScene::new(&Settings {
            step_count: 4,
            ..Settings::default()
        })
        .unwrap()
    }

    fn tick_with(scene: &mut DogScene, input: &mut Input) -> GameSceneState {
        let state = scene.update(input);
        input.reset();
        state
    }

    #[test]
    fn every_rig_part_is_loaded_and_drawn() {
        let mut scene = scene();
        let mut recorder = Recorder::default();
        scene.load(&mut recorder);
        assert_eq!(recorder.assets.len(), scene.rig.parts().len());
        scene.display(&mut recorder);
        assert_eq!(recorder.drawn.len(), scene.rig.parts().len());
    }

    #[test]
    fn posed_captures_play_back_through_the_drawn_body() {
        let mut scene = scene();
        let mut recorder = Recorder::default();
        scene.load(&mut recorder);
        let bindings = scene.bindings.clone();
        let mut input = Input::new();

        input.keyboard.press(bindings.capture);
        tick_with(&mut scene, &mut input);
        input.keyboard.press(bindings.body.right);
        for _ in 0..10 {
            tick_with(&mut scene, &mut input);
        }
        input.keyboard.release(bindings.body.right);
        input.keyboard.press(bindings.capture);
        tick_with(&mut scene, &mut input);
        let target = *scene.animation().live_pose();
        assert!(target.position.x > 0.0);

        input.keyboard.press(bindings.play);
        for _ in 0..4 {
            tick_with(&mut scene, &mut input);
        }
        assert_eq!(scene.animation().playback_state(), PlaybackState::Finished);

        scene.display(&mut recorder);
        let body = scene.rig.index_of(Part::Body).unwrap();
        let (_, drawn_body) = recorder.drawn[body];
        assert_eq!(Vec3::from(drawn_body), target.position);
    }

    #[test]
    fn quit_key_stops_the_scene() {
        let mut scene = scene();
        let mut input = Input::new();
        input.keyboard.press(scene.bindings.quit);
        assert!(matches!(
            tick_with(&mut scene, &mut input),
            GameSceneState::Stop
        ));
    }

    #[test]
    fn rejected_commands_do_not_stop_the_scene() {
        let mut scene = scene();
        let mut input = Input::new();
        input.keyboard.press(scene.bindings.play);
        assert!(matches!(
            tick_with(&mut scene, &mut input),
            GameSceneState::Continue
        ));
        assert_eq!(scene.animation().playback_state(), PlaybackState::Idle);
    }
}
