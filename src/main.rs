use std::error::Error;

use glium::glutin;
use glium::glutin::dpi::{LogicalSize, PhysicalPosition};
use glium::glutin::event::{Event, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::WindowBuilder;
use log::info;

mod app;
mod input;
mod math;
mod render;
mod settings;
mod transform;

use app::App;
use render::{mesh, Renderer};
use settings::Settings;

fn read_settings(file: &str) -> Result<Settings, Box<dyn Error>> {
    let settings_str = std::fs::read_to_string(file)?;
    let settings = toml::from_str(&settings_str)?;
    Ok(settings)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = read_settings("assets/settings.toml").expect("Failed to read settings.toml");

    let event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title("spincube")
        .with_inner_size(LogicalSize::new(
            settings.window.width as f64,
            settings.window.height as f64,
        ));
    let context_builder = glutin::ContextBuilder::new();
    let display = glium::Display::new(window_builder, context_builder, &event_loop)
        .expect("Failed to create display");

    let mut renderer = Renderer::new(display).expect("Failed to create renderer");

    let cube_mesh = mesh::cube();
    renderer
        .load_mesh(&cube_mesh)
        .expect("Failed to upload cube mesh");

    let mut app = App::new(settings, cube_mesh.mesh_id);

    info!("use WASD to move and the mouse to look around");
    info!("press escape to exit");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    app.set_viewport(size.width as f32, size.height as f32)
                }
                WindowEvent::KeyboardInput { input, .. } => app.input.keyboard.process_event(input),
                WindowEvent::CursorMoved { position, .. } => {
                    app.input.mouse.process_event(position)
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                app.update();
                if app.exit_requested() {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                // Pin the cursor to the center of the window so the next
                // frame's look input is measured from a known origin.
                let center = app.center();
                renderer
                    .display()
                    .gl_window()
                    .window()
                    .set_cursor_position(PhysicalPosition::new(center.x as f64, center.y as f64))
                    .ok();
                app.input.mouse.recenter(center);

                let draw_calls = app.draw_calls();
                let view_matrix = app.view_matrix();
                renderer.render(&mut app.camera, &draw_calls, view_matrix);
            }
            _ => {}
        }
    });
}
