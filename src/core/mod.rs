pub mod camera;
pub mod carousel;
pub mod config;
pub mod decipher;
pub mod loading;
pub mod mapper;
pub mod media;
pub mod nav;
pub mod phase;
pub mod session;
pub mod sim;
pub mod smoothing;
pub mod spring;

pub use camera::HeroCamera;
pub use config::HeroConfig;
pub use mapper::{map_scene, SceneParams};
pub use phase::{Phase, PhaseSequencer, ScrollDirection};
pub use session::{IntroMode, Session};
pub use sim::{step, FrameInput, SimState};

// Shaders bundled as string constants
pub static CUBE_WGSL: &str = include_str!("../../shaders/cube.wgsl");
pub static MARKERS_WGSL: &str = include_str!("../../shaders/markers.wgsl");
