use glam::{Mat4, Vec3};

/// Projection kind of a render camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    /// `fovy` is the view height in world units
    Orthographic,
}

/// Camera handed to the renderer: where the eye is and what it looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees (perspective) or view height
    /// (orthographic)
    pub fovy: f32,
    pub projection: Projection,
}

impl RenderCamera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fovy: f32) -> Self {
        Self {
            position,
            target,
            up,
            fovy,
            projection: Projection::Perspective,
        }
    }

    /// Unit direction from eye to target
    pub fn look_direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

impl Default for RenderCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, Vec3::Y, 45.0)
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub fovy: f32,
}
