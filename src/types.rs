/// Per-frame scene uniform shared by the star and cloud shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub time: f32,
    pub camera_right: [f32; 3],
    pub fog_near: f32,
    pub camera_up: [f32; 3],
    pub fog_far: f32,
    pub camera_forward: [f32; 3],
    pub ambient: f32,
    pub fog_color: [f32; 3],
    pub star_fade: f32, // 1.0 for soft round stars
    pub cloud_color: [f32; 3],
    pub cloud_opacity: f32,
    pub cloud_center: [f32; 3],
    pub cloud_speed: f32,
    pub viewport: [f32; 2],
    pub cloud_growth: f32,
    pub star_time: f32,
}

/// One star, drawn as a screen-aligned sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3], // Linear
    pub _pad: f32,
}

/// One cloud puff, offset from the cloud center
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PuffInstance {
    pub offset: [f32; 3],
    pub size: f32,
    pub rotation: f32,
    pub spin: f32, // +1 or -1
    pub density: f32,
    pub phase: f32,
}
