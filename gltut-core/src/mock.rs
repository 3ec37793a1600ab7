//! A recording [`ShaderDriver`] for tests that run without a GPU.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    ffi::CStr,
};

use crate::{
    ShaderDriver, ShaderStage,
    driver::{copy_log, log_length},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateShader(ShaderStage),
    ShaderSource,
    CompileShader,
    ShaderInfoLog { buf_len: usize, reported_len: i32 },
    DeleteShader,
    CreateProgram,
    AttachShader,
    DetachShader,
    LinkProgram,
    ProgramInfoLog { buf_len: usize, reported_len: i32 },
    DeleteProgram,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, Option<String>>,
    programs: HashMap<u32, HashSet<u32>>,
    linked: HashSet<u32>,
    calls: Vec<Call>,
}

/// Accepts any shader containing `void main`, otherwise fails with a
/// GLSL-style log. Linking succeeds unless a link error was configured.
pub struct MockDriver {
    state: RefCell<State>,
    compile_log: String,
    link_log: Option<String>,
    refuse_shaders: bool,
    refuse_programs: bool,
}

impl MockDriver {
    pub const VALID_VERTEX: &'static str = "#version 410 core\n\
        layout(location = 0) in vec3 position;\n\
        void main() { gl_Position = vec4(position, 1.0); }\n";
    pub const VALID_FRAGMENT: &'static str = "#version 410 core\n\
        out vec3 color;\n\
        void main() { color = vec3(1.0, 0.0, 0.0); }\n";
    pub const BROKEN_SHADER: &'static str = "#version 410 core\nvoid mian() { oops }\n";

    pub fn new() -> Self {
        Self {
            state: RefCell::default(),
            compile_log: "0:2(13): error: syntax error, unexpected '}'\n".to_string(),
            link_log: None,
            refuse_shaders: false,
            refuse_programs: false,
        }
    }

    pub fn with_compile_log(mut self, log: &str) -> Self {
        self.compile_log = log.to_string();
        self
    }

    pub fn with_link_error(mut self, log: &str) -> Self {
        self.link_log = Some(log.to_string());
        self
    }

    pub fn refuse_shaders(mut self) -> Self {
        self.refuse_shaders = true;
        self
    }

    pub fn refuse_programs(mut self) -> Self {
        self.refuse_programs = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn attached(&self, program: u32) -> usize {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map_or(0, HashSet::len)
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn shader_log(&self, shader: u32) -> String {
        let state = self.state.borrow();
        match state.shaders.get(&shader) {
            Some(Some(code)) if !code.contains("void main") => self.compile_log.clone(),
            _ => String::new(),
        }
    }

    fn program_log(&self, program: u32) -> String {
        if self.state.borrow().linked.contains(&program) {
            String::new()
        } else {
            self.link_log.clone().unwrap_or_default()
        }
    }
}

impl ShaderDriver for MockDriver {
    type Shader = u32;
    type Program = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        if self.refuse_shaders {
            return Err("out of memory".to_string());
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.shaders.insert(id, None);
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &CStr) {
        self.record(Call::ShaderSource);
        let code = source.to_string_lossy().into_owned();
        self.state.borrow_mut().shaders.insert(shader, Some(code));
    }

    fn compile_shader(&self, _shader: u32) {
        self.record(Call::CompileShader);
    }

    fn compile_status(&self, shader: u32) -> bool {
        matches!(
            self.state.borrow().shaders.get(&shader),
            Some(Some(code)) if code.contains("void main")
        )
    }

    fn shader_info_log_length(&self, shader: u32) -> i32 {
        log_length(&self.shader_log(shader))
    }

    fn shader_info_log(&self, shader: u32, buf: &mut [u8]) -> usize {
        let log = self.shader_log(shader);
        self.record(Call::ShaderInfoLog {
            buf_len: buf.len(),
            reported_len: log_length(&log),
        });
        copy_log(&log, buf)
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader);
        let mut state = self.state.borrow_mut();
        let still_attached = state.programs.values().any(|set| set.contains(&shader));
        assert!(!still_attached, "shader {shader} deleted while attached");
        assert!(state.shaders.remove(&shader).is_some(), "double delete of shader {shader}");
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        if self.refuse_programs {
            return Err("out of memory".to_string());
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.programs.insert(id, HashSet::new());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader);
        let mut state = self.state.borrow_mut();
        assert!(state.shaders.contains_key(&shader), "attaching unknown shader {shader}");
        if let Some(set) = state.programs.get_mut(&program) {
            set.insert(shader);
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader);
        if let Some(set) = self.state.borrow_mut().programs.get_mut(&program) {
            set.remove(&shader);
        }
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram);
        if self.link_log.is_none() {
            self.state.borrow_mut().linked.insert(program);
        }
    }

    fn link_status(&self, program: u32) -> bool {
        self.state.borrow().linked.contains(&program)
    }

    fn program_info_log_length(&self, program: u32) -> i32 {
        log_length(&self.program_log(program))
    }

    fn program_info_log(&self, program: u32, buf: &mut [u8]) -> usize {
        let log = self.program_log(program);
        self.record(Call::ProgramInfoLog {
            buf_len: buf.len(),
            reported_len: log_length(&log),
        });
        copy_log(&log, buf)
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram);
        let mut state = self.state.borrow_mut();
        assert!(state.programs.remove(&program).is_some(), "double delete of program {program}");
        state.linked.remove(&program);
    }
}
