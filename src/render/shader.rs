use std::error::Error;
use std::fs;
use std::path::Path;

use glium::{Display, Program, ProgramCreationError};

pub const VERTEX_SHADER_SRC: &str = r#"
#version 150

in vec3 position;

out vec3 v_color;

uniform global_render_uniforms {
    mat4 view_projection_matrix;
};

uniform mat4 model_matrix;

void main() {
    v_color = position * 0.5 + vec3(0.5);
    gl_Position = view_projection_matrix * model_matrix * vec4(position, 1.0);
}
"#;

pub fn create_shader_program(
    display: &Display,
    vertex_shader_src: &str,
    fragment_shader_src: &str,
) -> Result<Program, ProgramCreationError> {
    Program::from_source(display, vertex_shader_src, fragment_shader_src, None)
}

/// Links the embedded vertex shader against a fragment shader read from
/// `fragment_path`. Both the file read and the compile/link can fail; either
/// error aborts startup.
pub fn load_shader_program<P: AsRef<Path>>(
    display: &Display,
    fragment_path: P,
) -> Result<Program, Box<dyn Error>> {
    let fragment_shader_src = fs::read_to_string(fragment_path)?;
    let program = create_shader_program(display, VERTEX_SHADER_SRC, &fragment_shader_src)?;
    Ok(program)
}
