//! Orbit camera with clamped, damped controls

use bouquet_core::{mat4_mul, Vec3};
use std::f32::consts::PI;

/// Bounds applied after every orbit or zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle is measured from +Y; 0 looks straight down
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 10.0,
            min_polar: 0.0,
            max_polar: PI / 1.5,
        }
    }
}

/// A perspective camera orbiting a target point
pub struct Camera {
    /// Camera position
    pub position: Vec3,
    /// Target point the camera looks at
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,

    // Orbit control state
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle in radians, 0 on +Z
    pub azimuth: f32,
    /// Angle from +Y in radians
    pub polar: f32,
    pub limits: OrbitLimits,
    /// Multiplier on orbit input
    pub rotate_speed: f32,
    /// Fraction of pending orbit applied per update
    pub damping_factor: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::UP,
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
            distance: 5.0,
            azimuth: 0.0,
            polar: PI / 2.0,
            limits: OrbitLimits::default(),
            rotate_speed: 0.5,
            damping_factor: 0.05,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        };
        camera.update_orbit();
        camera
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the camera directly, clamped to the limits
    pub fn set_orbit(&mut self, distance: f32, azimuth: f32, polar: f32) {
        self.distance = distance;
        self.azimuth = azimuth;
        self.polar = polar;
        self.pending_azimuth = 0.0;
        self.pending_polar = 0.0;
        self.update_orbit();
    }

    /// Queue an orbit from pointer drag, in radians before `rotate_speed`
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.pending_azimuth += d_azimuth * self.rotate_speed;
        self.pending_polar += d_polar * self.rotate_speed;
    }

    /// Zoom in (positive) or out (negative)
    pub fn zoom(&mut self, delta: f32) {
        self.distance -= delta;
        self.update_orbit();
    }

    /// Apply a damped share of the pending orbit. Call once per frame.
    pub fn update(&mut self) {
        self.azimuth += self.pending_azimuth * self.damping_factor;
        self.polar += self.pending_polar * self.damping_factor;
        self.pending_azimuth *= 1.0 - self.damping_factor;
        self.pending_polar *= 1.0 - self.damping_factor;
        self.update_orbit();
    }

    /// Clamp orbit parameters and recompute position
    fn update_orbit(&mut self) {
        self.distance = self
            .distance
            .clamp(self.limits.min_distance, self.limits.max_distance);
        self.polar = self.polar.clamp(self.limits.min_polar, self.limits.max_polar);

        let sin_polar = self.polar.sin();
        self.position = Vec3::new(
            self.target.x + self.distance * sin_polar * self.azimuth.sin(),
            self.target.y + self.distance * self.polar.cos(),
            self.target.z + self.distance * sin_polar * self.azimuth.cos(),
        );
    }

    /// Get the view matrix (4x4, column-major)
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        let f = (self.target - self.position).normalized();
        let mut s = f.cross(&self.up).normalized();
        if s == Vec3::ZERO {
            // Looking straight along the up axis
            s = Vec3::new(1.0, 0.0, 0.0);
        }
        let u = s.cross(&f);

        [
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [
                -s.dot(&self.position),
                -u.dot(&self.position),
                f.dot(&self.position),
                1.0,
            ],
        ]
    }

    /// Get the projection matrix (4x4, column-major)
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        let fov_rad = self.fov.to_radians();
        let f = 1.0 / (fov_rad / 2.0).tan();

        let depth = self.far - self.near;

        [
            [f / self.aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, -(self.far + self.near) / depth, -1.0],
            [0.0, 0.0, -(2.0 * self.far * self.near) / depth, 0.0],
        ]
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> [[f32; 4]; 4] {
        mat4_mul(&self.projection_matrix(), &self.view_matrix())
    }
}
