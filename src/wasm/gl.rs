//! WebGL2 plumbing: context, shader program, vertex upload and draw calls.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::scene::{DrawCall, Scene, Topology, VertexLayout};

/// Every demo shares this pair. `u_rotation` is a `(cos, sin)` frame applied
/// with the glyph convention (local +y onto the frame direction); `u_scale`
/// takes surface units to clip space.
const VERTEX_SHADER: &str = r#"#version 300 es
in vec2 a_position;
in vec3 a_color;
uniform vec2 u_rotation;
uniform vec2 u_translation;
uniform vec2 u_scale;
uniform vec4 u_color;
uniform bool u_vertex_color;
out vec4 v_color;
void main() {
    vec2 rotated = vec2(
        a_position.x * u_rotation.y + a_position.y * u_rotation.x,
        a_position.y * u_rotation.y - a_position.x * u_rotation.x);
    gl_Position = vec4((rotated + u_translation) * u_scale, 0.0, 1.0);
    v_color = u_vertex_color ? vec4(a_color, 1.0) : u_color;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;
in vec4 v_color;
out vec4 fragColor;
void main() {
    fragColor = v_color;
}
"#;

const F32_SIZE: i32 = std::mem::size_of::<f32>() as i32;

pub fn js_error(value: JsValue) -> Error {
    Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    canvas
        .get_context("webgl2")
        .map_err(js_error)?
        .ok_or(Error::ContextUnavailable)?
        .dyn_into::<GL>()
        .map_err(|_| Error::ContextUnavailable)
}

fn stage_name(kind: u32) -> &'static str {
    match kind {
        GL::VERTEX_SHADER => "vertex",
        GL::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| Error::Js("unable to create shader object".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(Error::ShaderCompile {
            stage: stage_name(kind),
            log,
        })
    }
}

pub fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| Error::Js("unable to create program object".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(Error::ProgramLink(log))
    }
}

struct Uniforms {
    rotation: Option<WebGlUniformLocation>,
    translation: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    vertex_color: Option<WebGlUniformLocation>,
}

/// Owns the linked program and the single vertex buffer every draw call
/// re-uploads into.
pub struct Renderer {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    uniforms: Uniforms,
    position_attrib: u32,
    color_attrib: Option<u32>,
}

impl Renderer {
    pub fn new(gl: GL) -> Result<Self> {
        let vertex = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = match compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(Some(&vertex));
                return Err(err);
            }
        };
        let linked = link_program(&gl, &vertex, &fragment);
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));
        let program = linked?;

        let position_attrib = u32::try_from(gl.get_attrib_location(&program, "a_position"))
            .map_err(|_| Error::Js("a_position attribute missing".into()))?;
        let color_attrib = u32::try_from(gl.get_attrib_location(&program, "a_color")).ok();

        let buffer = gl
            .create_buffer()
            .ok_or_else(|| Error::Js("unable to create buffer".into()))?;
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| Error::Js("unable to create vertex array".into()))?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        gl.enable_vertex_attrib_array(position_attrib);

        let uniforms = Uniforms {
            rotation: gl.get_uniform_location(&program, "u_rotation"),
            translation: gl.get_uniform_location(&program, "u_translation"),
            scale: gl.get_uniform_location(&program, "u_scale"),
            color: gl.get_uniform_location(&program, "u_color"),
            vertex_color: gl.get_uniform_location(&program, "u_vertex_color"),
        };

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        Ok(Self {
            gl,
            program,
            vao,
            buffer,
            uniforms,
            position_attrib,
            color_attrib,
        })
    }

    pub fn draw(&self, scene: &Scene, surface: Vec2) {
        let gl = &self.gl;
        gl.viewport(0, 0, surface.x as i32, surface.y as i32);
        let [r, g, b, a] = scene.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        gl.uniform2fv_with_f32_array(
            self.uniforms.scale.as_ref(),
            &scene.clip_scale.uniform(surface),
        );

        for call in &scene.calls {
            self.draw_call(call);
        }
    }

    fn draw_call(&self, call: &DrawCall) {
        let gl = &self.gl;
        let data = js_sys::Float32Array::from(call.vertices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        let stride = call.layout.stride() as i32 * F32_SIZE;
        gl.vertex_attrib_pointer_with_i32(self.position_attrib, 2, GL::FLOAT, false, stride, 0);
        let per_vertex = call.layout == VertexLayout::PositionColor;
        if let Some(color_attrib) = self.color_attrib {
            if per_vertex {
                gl.enable_vertex_attrib_array(color_attrib);
                gl.vertex_attrib_pointer_with_i32(color_attrib, 3, GL::FLOAT, false, stride, 2 * F32_SIZE);
            } else {
                gl.disable_vertex_attrib_array(color_attrib);
            }
        }

        gl.uniform1i(self.uniforms.vertex_color.as_ref(), per_vertex as i32);
        gl.uniform4fv_with_f32_array(self.uniforms.color.as_ref(), &call.color);
        gl.uniform2fv_with_f32_array(self.uniforms.rotation.as_ref(), &call.rotation.to_uniform());
        gl.uniform2fv_with_f32_array(
            self.uniforms.translation.as_ref(),
            &[call.translation.x as f32, call.translation.y as f32],
        );

        let mode = match call.topology {
            Topology::LineStrip => GL::LINE_STRIP,
            Topology::Triangles => GL::TRIANGLES,
            Topology::TriangleFan => GL::TRIANGLE_FAN,
        };
        gl.draw_arrays(mode, 0, call.vertex_count() as i32);
    }
}
