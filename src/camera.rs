//! Perspective camera producing the model-view-projection matrix.

use glam::{Mat3, Mat4, Vec3};

/// A perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(4.0, 3.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// `projection * view * model`, ready for the `MVP` uniform.
    pub fn mvp(&self, model: Mat4, aspect: f32) -> Mat4 {
        self.view_projection(aspect) * model
    }

    /// The same camera with its eye rotated `angle` radians around the
    /// vertical axis through the target.
    pub fn orbit(&self, angle: f32) -> Self {
        let offset = Mat3::from_rotation_y(angle) * (self.eye - self.target);
        Self {
            eye: self.target + offset,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn orbit_keeps_distance_and_height() {
        let camera = Camera::default();
        let moved = camera.orbit(1.3);
        assert!((moved.eye.distance(camera.target) - camera.eye.distance(camera.target)).abs() < EPS);
        assert!((moved.eye.y - camera.eye.y).abs() < EPS);
        assert!(moved.eye.distance(camera.eye) > 0.1);
    }

    #[test]
    fn full_orbit_returns_home() {
        let camera = Camera::default();
        let moved = camera.orbit(std::f32::consts::TAU);
        assert!(moved.eye.distance(camera.eye) < EPS);
    }

    #[test]
    fn target_lands_in_the_middle_of_the_screen() {
        let camera = Camera::default().orbit(0.7);
        let clip = camera.mvp(Mat4::IDENTITY, 4.0 / 3.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < EPS);
        assert!(ndc.y.abs() < EPS);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn points_behind_the_camera_are_clipped() {
        let camera = Camera::default();
        let behind = camera.eye * 2.0;
        let clip = camera.mvp(Mat4::IDENTITY, 1.0) * behind.extend(1.0);
        assert!(clip.w < 0.0);
    }

    #[test]
    fn model_matrix_is_applied_first() {
        let camera = Camera::default();
        let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let a = camera.mvp(model, 1.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = camera.mvp(Mat4::IDENTITY, 1.0) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((a - b).length() < EPS);
    }
}
