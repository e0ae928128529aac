use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// Perspective camera looking at a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

/// A world point mapped onto the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Viewport coordinates, origin top-left, y down
    pub screen: Vec2,
    /// View-space depth along the camera forward axis
    pub depth: f32,
}

/// Near and far plane extents for the current projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumExtents {
    pub near_width: f32,
    pub near_height: f32,
    pub far_width: f32,
    pub far_height: f32,
}

impl Camera {
    pub fn new(position: Vec3, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_degrees.to_radians(),
            near,
            far,
            aspect: 1.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or(Vec3::X)
    }

    /// Up vector orthogonal to forward and right
    pub fn camera_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed perspective with a [0, 1] depth range
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Pixels per world unit at unit depth for a viewport of the given height
    pub fn focal_length(&self, viewport_height: f32) -> f32 {
        viewport_height / (2.0 * (self.fov_y * 0.5).tan())
    }

    /// Depth of a world point along the view axis
    pub fn view_depth(&self, world: Vec3) -> f32 {
        (world - self.position).dot(self.forward())
    }

    /// Map a world point to viewport coordinates, `None` when it is behind the near plane
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Projected> {
        let depth = self.view_depth(world);
        if depth < self.near {
            return None;
        }

        let clip = self.view_proj() * world.extend(1.0);
        let ndc = clip.xy() / clip.w;
        let screen = Vec2::new(
            (ndc.x * 0.5 + 0.5) * viewport.x,
            (0.5 - ndc.y * 0.5) * viewport.y,
        );

        Some(Projected { screen, depth })
    }

    pub fn frustum(&self) -> FrustumExtents {
        let slope = 2.0 * (self.fov_y * 0.5).tan();
        let near_height = slope * self.near;
        let far_height = slope * self.far;
        FrustumExtents {
            near_width: near_height * self.aspect,
            near_height,
            far_width: far_height * self.aspect,
            far_height,
        }
    }
}
