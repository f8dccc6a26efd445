use cgmath::{Matrix, Matrix3, Matrix4, Rad, Vector3};

use crate::vector3;

/// Position, scale and rotation of something in the world.
///
/// Rotation is stored as euler angles: `x` is pitch, `y` is yaw, `z` is roll.
/// The rotation matrix applies roll, then pitch, then yaw; the world matrix
/// applies scale, then rotation, then translation.
#[derive(Clone)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    rotation: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: vector3!(0.0, 0.0, 0.0),
            scale: vector3!(1.0, 1.0, 1.0),
            rotation: vector3!(0.0, 0.0, 0.0),
        }
    }
}

impl Transform {
    pub fn new(position: Vector3<f32>, scale: Vector3<f32>, rotation: Vector3<f32>) -> Transform {
        Transform {
            position,
            scale,
            rotation,
        }
    }

    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
    }

    /// Moves the transform by `delta` in world space.
    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    /// Adds `angle` radians to the yaw.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation.y += angle;
    }

    fn rotation_matrix(&self) -> Matrix3<f32> {
        Matrix3::from_angle_y(Rad(self.rotation.y))
            * Matrix3::from_angle_x(Rad(self.rotation.x))
            * Matrix3::from_angle_z(Rad(self.rotation.z))
    }

    /// The direction the transform is facing.
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation_matrix() * vector3!(0.0, 0.0, -1.0)
    }

    pub fn right(&self) -> Vector3<f32> {
        self.rotation_matrix() * vector3!(1.0, 0.0, 0.0)
    }

    /// World matrix taking local coordinates into world space.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation_matrix())
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Inverse of `matrix`, built by undoing each step in reverse order.
    ///
    /// Cameras use this as their view matrix: rather than moving the camera
    /// into the world, everything else is moved into camera-local space.
    pub fn inverse_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_nonuniform_scale(1.0 / self.scale.x, 1.0 / self.scale.y, 1.0 / self.scale.z)
            * Matrix4::from(self.rotation_matrix().transpose())
            * Matrix4::from_translation(-self.position)
    }
}
