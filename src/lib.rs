use input::Input;
use std::{sync::Arc, time::Instant};
use tracing::debug;
use winit::{
    event::{DeviceEvent, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::geometry::Transform;

pub mod animation;
pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;

/// Simulation ticks per second.
pub const TICK_RATE: u128 = 60;

#[derive(Debug)]
pub enum DisplayRequest<'a> {
    InWorldSpace(usize, &'a [Transform]),
}

pub enum GameSceneState {
    Continue,
    Stop,
    ChangeScene(Box<dyn GameScene>),
}
pub trait GameScene {
    fn load(&mut self, loader: &mut dyn Loader);
    fn update(&mut self, input: &Input) -> GameSceneState;
    fn display(&self, drawer: &mut dyn Drawer);
}

struct GameLoop<R: Loader + Drawer> {
    gamescene: Box<dyn GameScene>,
    renderer: R,
    pub frame_count: u128,
    pub start_time: Instant,
    pub input: Input,
}
impl<R: Loader + Drawer> GameLoop<R> {
    fn new(gamescene: Box<dyn GameScene>, renderer: R) -> Self {
        Self {
            renderer,
            gamescene,
            frame_count: 0,
            start_time: Instant::now(),
            input: Input::new(),
        }
    }

    /// Runs as many fixed ticks as the wall clock asks for.
    fn update_gamescene(&mut self) -> bool {
        let target_frame_count =
            Instant::now().duration_since(self.start_time).as_millis() * TICK_RATE / 1000;
        let frame_delta = target_frame_count.saturating_sub(self.frame_count);
        for _ in 0..frame_delta {
            match self.gamescene.update(&self.input) {
                GameSceneState::Continue => self.frame_count += 1,
                GameSceneState::Stop => return false,
                GameSceneState::ChangeScene(new_scene) => {
                    self.gamescene = new_scene;
                    self.gamescene.load(&mut self.renderer);
                    self.frame_count = 0;
                    self.start_time = Instant::now();
                    break;
                }
            };
            self.input.reset();
        }
        true
    }

    pub fn update_input(&mut self, event: DeviceEvent) {
        self.input.update(event);
    }
}

/// Resolves a model asset to a mesh handle the drawer understands.
pub trait Loader {
    fn load(&mut self, asset: &str, mesh: &str, base_scale: f32) -> usize;
}

pub trait Drawer {
    fn draw(&mut self, camera_transform: Transform, display_request: &[DisplayRequest]);
}

pub fn run<R>(
    event_loop: EventLoop<()>,
    window: Window,
    gamescene: Box<dyn GameScene>,
    renderer: R,
) -> !
where
    R: Loader + Drawer + 'static,
{
    let window = Arc::new(window);
    let mut gameloop = GameLoop::new(gamescene, renderer);
    gameloop.gamescene.load(&mut gameloop.renderer);
    window.set_visible(true);
    let mut start = Instant::now();
    let mut frames = 0;
    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            *control_flow = ControlFlow::Exit;
        }
        Event::DeviceEvent {
            device_id: _,
            event,
        } => {
            gameloop.update_input(event);
        }
        Event::MainEventsCleared => {
            frames += 1;
            if frames >= 60 {
                let now = Instant::now();
                let duration = now.duration_since(start).as_secs_f32();
                let fps = frames as f32 / duration;
                debug!(fps, "frame rate");
                frames = 0;
                start = now;
            }
            if !gameloop.update_gamescene() {
                *control_flow = ControlFlow::Exit
            }
            gameloop.gamescene.display(&mut gameloop.renderer);
            window.request_redraw();
        }
        _ => {}
    })
}
