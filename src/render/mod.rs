use std::collections::HashMap;
use std::error::Error;

use cgmath::Matrix4;
use glium::index::PrimitiveType;
use glium::uniforms::UniformBuffer;
use glium::{
    implement_uniform_block, uniform, Display, DrawParameters, Frame, IndexBuffer, Program,
    Surface, VertexBuffer,
};
use uuid::Uuid;

use self::camera::Camera;
use self::mesh::{Mesh, Vertex};

pub mod camera;
pub mod mesh;
pub mod shader;

/// Uniforms that are global across all draws of a frame.
///
/// Holds the view-projection matrix: world space into camera space, then
/// camera space into clip space, composed once per frame on the CPU.
#[derive(Copy, Clone)]
pub struct GlobalRenderUniforms {
    pub view_projection_matrix: [[f32; 4]; 4],
}
implement_uniform_block!(GlobalRenderUniforms, view_projection_matrix);

/// One mesh drawn with one world matrix.
pub struct DrawCall {
    pub model_matrix: [[f32; 4]; 4],
    pub mesh_id: Uuid,
}

/// Processes `DrawCall` structs into draw calls on the GPU.
///
/// Takes a `Display` to draw to and keeps track of the resources loaded onto
/// the GPU: the shader program, the global uniform buffer and one
/// vertex/index buffer pair per registered mesh.
pub struct Renderer {
    display: Display,
    global_uniform_buffer: UniformBuffer<GlobalRenderUniforms>,
    shader_program: Program,
    mesh_register: HashMap<Uuid, (VertexBuffer<Vertex>, IndexBuffer<u32>)>,
}

impl Renderer {
    pub fn new(display: Display) -> Result<Self, Box<dyn Error>> {
        let global_uniform_buffer: UniformBuffer<GlobalRenderUniforms> =
            UniformBuffer::empty(&display)?;

        let shader_program =
            shader::load_shader_program(&display, "assets/shaders/fragment.glsl")?;

        Ok(Self {
            display,
            global_uniform_buffer,
            shader_program,
            mesh_register: HashMap::new(),
        })
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Uploads a mesh to GPU-resident buffers. Meshes are immutable, so this
    /// happens once per mesh; the buffers live until the `Renderer` drops.
    pub fn load_mesh(&mut self, mesh: &Mesh) -> Result<(), Box<dyn Error>> {
        let vertex_buffer = VertexBuffer::new(&self.display, &mesh.vertices)?;
        let index_buffer =
            IndexBuffer::new(&self.display, PrimitiveType::TrianglesList, &mesh.indices)?;

        self.mesh_register
            .insert(mesh.mesh_id, (vertex_buffer, index_buffer));
        Ok(())
    }

    /// Draws one frame.
    ///
    /// The camera aspect ratio is refreshed from the real framebuffer
    /// dimensions, so the projection follows window resizes. Draw parameters
    /// stay at their defaults: the cube's winding is mixed, so culling must
    /// remain off, and a single convex shape needs no depth test.
    pub fn render(
        &mut self,
        camera: &mut Camera,
        draw_calls: &[DrawCall],
        view_matrix: [[f32; 4]; 4],
    ) {
        let mut target: Frame = self.display.draw();
        target.clear_color(0.0, 0.0, 0.0, 1.0);

        let (width, height) = target.get_dimensions();
        camera.aspect_ratio = width as f32 / height as f32;
        camera.calculate_projection_matrix();

        let view_projection =
            Matrix4::from(camera.projection_matrix()) * Matrix4::from(view_matrix);
        self.global_uniform_buffer.write(&GlobalRenderUniforms {
            view_projection_matrix: view_projection.into(),
        });

        for draw_call in draw_calls {
            let (vertex_buffer, index_buffer) = match self.mesh_register.get(&draw_call.mesh_id) {
                Some(buffers) => buffers,
                None => continue,
            };

            target
                .draw(
                    vertex_buffer,
                    index_buffer,
                    &self.shader_program,
                    &uniform! {
                        model_matrix: draw_call.model_matrix,
                        global_render_uniforms: &self.global_uniform_buffer,
                    },
                    &DrawParameters::default(),
                )
                .unwrap();
        }

        target.finish().unwrap();
    }
}
