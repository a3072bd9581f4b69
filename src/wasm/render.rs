use js_sys::Float32Array;
use nalgebra_glm as glm;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::error::RenderError;
use crate::geometry::{Position, Rgba};
use crate::renderer::Renderer;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 aVertexPosition;
in vec4 aVertexColor;
uniform mat4 uMVMatrix;
out vec4 vColor;

void main() {
    gl_Position = uMVMatrix * vec4(aVertexPosition, 1.0);
    vColor = aVertexColor;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec4 vColor;
out vec4 fragColor;

void main() {
    fragColor = vColor;
}
"#;

/// WebGL2 backend: one program, one position buffer, one color buffer.
pub struct WebGlRenderer {
    gl: GL,
    position_buffer: WebGlBuffer,
    color_buffer: WebGlBuffer,
    transform: WebGlUniformLocation,
}

impl WebGlRenderer {
    pub fn new(canvas: &HtmlCanvasElement, clear_color: [f32; 4]) -> Result<Self, RenderError> {
        let gl: GL = canvas
            .get_context("webgl2")
            .map_err(js_error)?
            .ok_or(RenderError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| RenderError::ContextUnavailable)?;

        let vs = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vs, &fs)?;
        gl.use_program(Some(&program));

        let transform = gl
            .get_uniform_location(&program, "uMVMatrix")
            .ok_or(RenderError::MissingUniform("uMVMatrix"))?;
        let position_buffer = attribute_buffer(&gl, &program, "aVertexPosition", 3)?;
        let color_buffer = attribute_buffer(&gl, &program, "aVertexColor", 4)?;

        let [r, g, b, a] = clear_color;
        gl.clear_color(r, g, b, a);
        log::debug!("WebGL2 program linked");

        Ok(Self {
            gl,
            position_buffer,
            color_buffer,
            transform,
        })
    }

    fn upload(&self, buffer: &WebGlBuffer, data: &[f32]) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(data),
            GL::DYNAMIC_DRAW,
        );
    }
}

impl Renderer for WebGlRenderer {
    fn upload_positions(&mut self, positions: &[Position]) -> Result<(), RenderError> {
        self.upload(&self.position_buffer, bytemuck::cast_slice(positions));
        Ok(())
    }

    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), RenderError> {
        self.upload(&self.color_buffer, bytemuck::cast_slice(colors));
        Ok(())
    }

    fn set_transform(&mut self, transform: &glm::Mat4) -> Result<(), RenderError> {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(&self.transform), false, transform.as_slice());
        Ok(())
    }

    fn draw(&mut self, triangle_count: usize) -> Result<(), RenderError> {
        let gl = &self.gl;
        gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.draw_arrays(GL::TRIANGLES, 0, (triangle_count * 3) as i32);
        Ok(())
    }
}

/// Creates a buffer and binds it to attribute `name` with `size` floats per vertex.
fn attribute_buffer(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
    size: i32,
) -> Result<WebGlBuffer, RenderError> {
    let location = u32::try_from(gl.get_attrib_location(program, name))
        .map_err(|_| RenderError::MissingAttribute(name))?;
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::Allocation("vertex buffer"))?;

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
    Ok(buffer)
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(RenderError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(RenderError::ShaderCompile(info))
    }
}

fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::Allocation("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(RenderError::ProgramLink(info))
    }
}

fn js_error(value: JsValue) -> RenderError {
    RenderError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
