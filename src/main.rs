use anyhow::Context;
use image::io::Reader as ImageReader;
use std::path::PathBuf;
use tracing::{debug, info, trace};
use winit::{event_loop::EventLoop, window::Icon, window::WindowBuilder};

use kor_keyframes::{
    config::{Settings, DEFAULT_SETTINGS_PATH},
    geometry::Transform,
    run,
    scene::DogScene,
    DisplayRequest, Drawer, Loader,
};

/// Stands in for a GPU backend: hands out mesh ids and logs every draw.
#[derive(Default)]
struct TraceRenderer {
    meshes: Vec<String>,
    frame: u64,
}

impl Loader for TraceRenderer {
    fn load(&mut self, asset: &str, mesh: &str, base_scale: f32) -> usize {
        let id = self.meshes.len();
        info!(id, asset, mesh, base_scale, "registered mesh");
        self.meshes.push(mesh.to_owned());
        id
    }
}

impl Drawer for TraceRenderer {
    fn draw(&mut self, camera_transform: Transform, display_request: &[DisplayRequest]) {
        self.frame += 1;
        let view = camera_transform.reverse();
        trace!(frame = self.frame, view = ?view.to_homogeneous(), "begin frame");
        for request in display_request {
            let DisplayRequest::InWorldSpace(mesh_id, transforms) = request;
            let name = self.meshes.get(*mesh_id).map(String::as_str).unwrap_or("?");
            for transform in transforms.iter() {
                debug!(
                    frame = self.frame,
                    mesh = name,
                    model = ?transform.to_homogeneous(),
                    "draw"
                );
            }
        }
    }
}

fn enable_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let format = fmt::format()
        .without_time()
        .with_target(false)
        .with_source_location(true)
        .compact();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(format)
        .init();
}

fn main() -> anyhow::Result<()> {
    enable_tracing();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path);
    let scene = DogScene::new(&settings).context("invalid animation settings")?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title("Keyframe animation")
        .with_window_icon(get_logo())
        .build(&event_loop)
        .context("failed to create window")?;
    run(
        event_loop,
        window,
        Box::new(scene),
        TraceRenderer::default(),
    )
}

pub fn get_logo() -> Option<Icon> {
    if let Ok(image_file) = ImageReader::open("keyframes_icon.png") {
        if let Ok(decoded_image) = image_file.decode() {
            let formatted_image = decoded_image.into_rgba8();
            let (width, height) = (formatted_image.width(), formatted_image.height());
            if let Ok(icon) = Icon::from_rgba(formatted_image.into_vec(), width, height) {
                return Some(icon);
            }
        }
    }
    None
}
