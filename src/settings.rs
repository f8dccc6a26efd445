use serde::Deserialize;

use crate::render::camera::Projection;

#[derive(Default, Deserialize, Clone, Copy)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub renderer: RendererSettings,
}

#[derive(Deserialize, Clone, Copy)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Deserialize, Clone, Copy)]
pub struct CameraSettings {
    /// Radians of rotation per pixel of cursor movement.
    pub sensitivity: f32,
    /// World units travelled per frame while a movement key is held.
    pub move_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.001,
            move_speed: 0.005,
        }
    }
}

#[derive(Default, Deserialize, Clone, Copy)]
pub struct RendererSettings {
    pub projection: Projection,
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::render::camera::Projection;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.camera.sensitivity, 0.001);
        assert_eq!(settings.camera.move_speed, 0.005);
        assert_eq!(settings.renderer.projection, Projection::Perspective);
    }

    #[test]
    fn test_deserializes_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [window]
            width = 1280
            height = 720

            [camera]
            sensitivity = 0.002
            move_speed = 0.01

            [renderer]
            projection = "orthographic"
            "#,
        )
        .unwrap();

        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.window.height, 720);
        assert_eq!(settings.camera.sensitivity, 0.002);
        assert_eq!(settings.camera.move_speed, 0.01);
        assert_eq!(settings.renderer.projection, Projection::Orthographic);
    }
}
