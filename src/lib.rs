pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod vocabulary;

pub use camera::Camera;
pub use config::SceneConfig;
pub use scene::Scene;
