use std::f32::consts::FRAC_PI_2;

use cgmath::Vector2;
use glium::glutin::event::VirtualKeyCode;
use uuid::Uuid;

use crate::input::Input;
use crate::render::camera::Camera;
use crate::render::DrawCall;
use crate::settings::Settings;
use crate::transform::Transform;
use crate::{vector2, vector3};

/// Radians the cube turns every frame.
const CUBE_SPIN: f32 = 0.0002;

/// How far in front of the camera the cube starts. The z axis points out of
/// the screen, so "in front" is negative.
const CUBE_DISTANCE: f32 = 5.0;

/// Everything the demo simulates: the fly camera, the spinning cube and the
/// input state feeding them.
///
/// The main loop routes window events into `input`, calls `update` once per
/// frame and reads the resulting view matrix and draw calls back out.
pub struct App {
    pub camera: Camera,
    pub camera_transform: Transform,
    pub cube_transform: Transform,
    pub input: Input,
    viewport: Vector2<f32>,
    cube_mesh_id: Uuid,
    settings: Settings,
    exit_requested: bool,
}

impl App {
    pub fn new(settings: Settings, cube_mesh_id: Uuid) -> App {
        let viewport = vector2!(
            settings.window.width as f32,
            settings.window.height as f32
        );

        App {
            camera: Camera::new(settings.renderer.projection, viewport.x / viewport.y),
            camera_transform: Transform::default(),
            cube_transform: Transform::new(
                vector3!(0.0, 0.0, -CUBE_DISTANCE),
                vector3!(1.0, 1.0, 1.0),
                vector3!(0.0, 0.0, 0.0),
            ),
            input: Input::new(viewport / 2.0),
            viewport,
            cube_mesh_id,
            settings,
            exit_requested: false,
        }
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self) {
        if self.input.keyboard.is_pressed(VirtualKeyCode::Escape) {
            self.exit_requested = true;
            return;
        }

        self.look();
        self.fly();
        self.cube_transform.rotate_y(CUBE_SPIN);
    }

    /// Turns cursor movement from the viewport center into camera yaw and
    /// pitch. Pitch is clamped so the camera can never flip over backwards.
    fn look(&mut self) {
        let movement = self.input.mouse.movement_from(self.center());
        let rotation = self.camera_transform.rotation();
        let sensitivity = self.settings.camera.sensitivity;

        let yaw = rotation.y - movement.x * sensitivity;
        let pitch = (rotation.x - movement.y * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);

        self.camera_transform.set_rotation(vector3!(pitch, yaw, 0.0));
    }

    fn fly(&mut self) {
        let speed = self.settings.camera.move_speed;
        let forward = self.camera_transform.forward();
        let right = self.camera_transform.right();

        if self.input.keyboard.is_pressed(VirtualKeyCode::W) {
            self.camera_transform.translate(forward * speed);
        }
        if self.input.keyboard.is_pressed(VirtualKeyCode::S) {
            self.camera_transform.translate(forward * -speed);
        }
        if self.input.keyboard.is_pressed(VirtualKeyCode::A) {
            self.camera_transform.translate(right * -speed);
        }
        if self.input.keyboard.is_pressed(VirtualKeyCode::D) {
            self.camera_transform.translate(right * speed);
        }
    }

    /// One `DrawCall` per visible object. That means exactly one: the cube.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        vec![DrawCall {
            model_matrix: self.cube_transform.matrix().into(),
            mesh_id: self.cube_mesh_id,
        }]
    }

    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        self.camera_transform.inverse_matrix().into()
    }

    pub fn center(&self) -> Vector2<f32> {
        self.viewport / 2.0
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = vector2!(width, height);
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
