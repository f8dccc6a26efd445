use serde::Deserialize;

/// Which projection the camera applies after the view transform.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Perspective,
    Orthographic,
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective
    }
}

/// Width of the view volume in world units. The height follows from the
/// viewport aspect ratio so the picture does not stretch on resize.
const VIEW_WIDTH: f32 = 1.0;

/// Holds the parameters that shape the projection matrix.
///
/// The matrix is cached; `calculate_projection_matrix` must run again after
/// `aspect_ratio` or `projection` change.
pub struct Camera {
    pub projection: Projection,
    pub aspect_ratio: f32,
    pub near_dist: f32,
    pub far_dist: f32,
    projection_matrix: [[f32; 4]; 4],
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Projection::Perspective, 800.0 / 600.0)
    }
}

impl Camera {
    pub fn new(projection: Projection, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            projection,
            aspect_ratio,
            near_dist: 1.0,
            far_dist: 10.0,
            projection_matrix: [[0.0; 4]; 4],
        };
        camera.calculate_projection_matrix();
        camera
    }

    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        self.projection_matrix
    }

    pub fn calculate_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Perspective => self.perspective_matrix(),
            Projection::Orthographic => self.orthographic_matrix(),
        };
    }

    fn view_height(&self) -> f32 {
        VIEW_WIDTH / self.aspect_ratio
    }

    /// Maps the view volume between the near and far planes into clip space,
    /// with w = -z so the homogeneous divide shrinks distant geometry.
    ///
    /// A point on the near plane lands on z = -1 in normalized device
    /// coordinates, a point on the far plane on z = 1.
    fn perspective_matrix(&self) -> [[f32; 4]; 4] {
        let (near, far) = (self.near_dist, self.far_dist);
        let (width, height) = (VIEW_WIDTH, self.view_height());

        [
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, -(far + near) / (far - near), -1.0],
            [0.0, 0.0, -(2.0 * far * near) / (far - near), 0.0],
        ]
    }

    /// Flattens the view volume straight onto the screen plane, keeping w = 1.
    /// Same near/far mapping as the perspective matrix, no foreshortening.
    fn orthographic_matrix(&self) -> [[f32; 4]; 4] {
        let (near, far) = (self.near_dist, self.far_dist);
        let (width, height) = (VIEW_WIDTH, self.view_height());

        [
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, -2.0 / (far - near), 0.0],
            [0.0, 0.0, -(far + near) / (far - near), 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Matrix4, Vector4};

    use super::{Camera, Projection};

    fn project(matrix: [[f32; 4]; 4], point: Vector4<f32>) -> Vector4<f32> {
        Matrix4::from(matrix) * point
    }

    #[test]
    fn test_perspective_maps_near_plane_to_minus_one() {
        let camera = Camera::new(Projection::Perspective, 800.0 / 600.0);
        let clip = project(
            camera.projection_matrix(),
            Vector4::new(0.0, 0.0, -camera.near_dist, 1.0),
        );

        assert!((clip.z / clip.w - -1.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_maps_far_plane_to_one() {
        let camera = Camera::new(Projection::Perspective, 800.0 / 600.0);
        let clip = project(
            camera.projection_matrix(),
            Vector4::new(0.0, 0.0, -camera.far_dist, 1.0),
        );

        assert!((clip.z / clip.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_w_is_negated_z() {
        let camera = Camera::new(Projection::Perspective, 1.0);
        let clip = project(camera.projection_matrix(), Vector4::new(0.5, 0.5, -4.0, 1.0));

        assert!((clip.w - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_orthographic_maps_near_and_far_planes() {
        let camera = Camera::new(Projection::Orthographic, 800.0 / 600.0);

        let near = project(
            camera.projection_matrix(),
            Vector4::new(0.0, 0.0, -camera.near_dist, 1.0),
        );
        let far = project(
            camera.projection_matrix(),
            Vector4::new(0.0, 0.0, -camera.far_dist, 1.0),
        );

        assert!((near.z / near.w - -1.0).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_aspect_ratio_drives_vertical_scale() {
        let mut camera = Camera::new(Projection::Perspective, 2.0);
        assert!((camera.projection_matrix()[1][1] - 4.0).abs() < 1e-5);

        camera.aspect_ratio = 4.0;
        camera.calculate_projection_matrix();
        assert!((camera.projection_matrix()[1][1] - 8.0).abs() < 1e-5);
    }
}
