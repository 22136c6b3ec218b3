//! Single-mesh forward renderer.

use ember_gl::context::{self, BlendFactor, Capability, ClearMask, DrawMode};
use ember_gl::{
    Attribute, Buffer, BufferUsage, ComparisonFunction, DataType, ShaderProgram, ShaderStage,
    VertexArray, VertexLayout,
};
use glam::{Mat4, Vec3};

use crate::camera::PerspectiveCamera;
use crate::error::Result;
use crate::gfx_info;
use crate::resource::{self, Vertex};

/// Point light uploaded to the fragment shader every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub power: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 1.0),
            color: Vec3::ONE,
            power: 0.5,
        }
    }
}

/// Forward renderer drawing one indexed mesh with one program
///
/// All GPU data is prepared in [`Renderer::new`]; [`Renderer::render`]
/// clears the frame, uploads the camera and light uniforms, and issues
/// a single indexed triangle draw. There is no batching, culling, or
/// scene management.
pub struct Renderer {
    camera: PerspectiveCamera,
    program: ShaderProgram,
    vao: VertexArray,
    // Buffers must outlive the vertex array bindings that reference them
    _vbo: Buffer,
    _ibo: Buffer,
    index_count: usize,

    light: PointLight,
    model_alpha: f32,
}

impl Renderer {
    /// Create a renderer from GLSL sources and OBJ mesh text
    ///
    /// Requires a current GL 4.6 context. Sets the fixed per-program
    /// GL state (depth test, alpha blending, clear color), compiles
    /// and links the program, loads and uploads the mesh.
    pub fn new(
        width: i32,
        height: i32,
        vertex_src: &str,
        fragment_src: &str,
        mesh_obj: &str,
    ) -> Result<Self> {
        let vertex = resource::shader_from_source(ShaderStage::Vertex, vertex_src)?;
        let fragment = resource::shader_from_source(ShaderStage::Fragment, fragment_src)?;
        let program = ShaderProgram::from_shaders(&[&vertex, &fragment])?;
        program.bind();

        let mut camera = PerspectiveCamera::default();
        camera.set_position(Vec3::new(0.0, 0.0, -5.0));
        camera.look_at(Vec3::ZERO);
        camera.set_near(0.1);
        camera.set_far(100.0);
        camera.set_fov(60.0_f32.to_radians());

        context::enable(Capability::DepthTest);
        context::depth_func(ComparisonFunction::Less);
        context::enable(Capability::Blend);
        context::blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        context::clear_color(0.15, 0.15, 0.15, 1.0);

        let (vertices, indices) = resource::obj_from_str(mesh_obj)?;

        let vao = VertexArray::new();

        let vbo = Buffer::new();
        vao.bind_vertex_buffer(&vbo, 0, Vertex::stride(), 0);
        vbo.buffer_data(&vertices, BufferUsage::StreamDraw);

        let ibo = Buffer::new();
        vao.bind_element_buffer(&ibo);
        ibo.buffer_data(&indices, BufferUsage::StreamDraw);

        vao.enable_attributes::<Vertex>(
            &[Attribute::Position, Attribute::TexCoords, Attribute::Normal],
            0,
        );

        gfx_info!(
            "ember::Renderer",
            "renderer ready: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        let mut renderer = Self {
            camera,
            program,
            vao,
            _vbo: vbo,
            _ibo: ibo,
            index_count: indices.len(),
            light: PointLight::default(),
            model_alpha: 1.0,
        };
        renderer.set_viewport(width, height);
        Ok(renderer)
    }

    /// Resize the GL viewport and the camera aspect ratio
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        context::viewport(0, 0, width, height);
        self.camera.set_aspect(width as f32 / height as f32);
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn light_mut(&mut self) -> &mut PointLight {
        &mut self.light
    }

    pub fn model_alpha(&self) -> f32 {
        self.model_alpha
    }

    pub fn set_model_alpha(&mut self, alpha: f32) {
        self.model_alpha = alpha;
    }

    /// Number of indices in the uploaded mesh
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Draw one frame
    ///
    /// Uniform locations are resolved every frame; a shader edit that
    /// drops a uniform therefore surfaces as an error here rather than
    /// as stale state.
    pub fn render(&self) -> Result<()> {
        self.program.bind();
        context::clear(ClearMask::COLOR | ClearMask::DEPTH);

        let mvp_location = self.program.uniform_location("MVP")?;
        let view_location = self.program.uniform_location("V")?;
        let model_location = self.program.uniform_location("M")?;
        let light_position_location = self.program.uniform_location("LightPosition_worldspace")?;
        let light_color_location = self.program.uniform_location("LightColor")?;
        let light_power_location = self.program.uniform_location("LightPower")?;
        let alpha_location = self.program.uniform_location("Alpha")?;

        let view_matrix = self.camera.view_matrix();
        let projection_matrix = self.camera.projection_matrix();
        let model_matrix = Mat4::IDENTITY;
        let mvp = projection_matrix * view_matrix * model_matrix;

        self.program
            .set_uniform_mat4(mvp_location, &mvp.to_cols_array());
        self.program
            .set_uniform_mat4(view_location, &view_matrix.to_cols_array());
        self.program
            .set_uniform_mat4(model_location, &model_matrix.to_cols_array());

        self.program
            .set_uniform_vec3(light_position_location, self.light.position.to_array());
        self.program
            .set_uniform_vec3(light_color_location, self.light.color.to_array());
        self.program.set_uniform_f32(light_power_location, self.light.power);
        self.program.set_uniform_f32(alpha_location, self.model_alpha);

        self.vao.bind();
        context::draw_elements(
            DrawMode::Triangles,
            self.index_count as i32,
            DataType::UnsignedInt,
        );
        Ok(())
    }
}
