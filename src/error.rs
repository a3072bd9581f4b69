use thiserror::Error;

/// Failures raised by a [`Renderer`](crate::renderer::Renderer).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("WebGL2 not supported")]
    ContextUnavailable,
    #[error("shader compile failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
    #[error("uniform `{0}` not found in program")]
    MissingUniform(&'static str),
    #[error("could not create {0}")]
    Allocation(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid demo config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Missing or mistyped DOM pieces.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element `#{0}` not found")]
    MissingElement(String),
    #[error("element `#{id}` is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("could not attach `{0}` listener")]
    Listener(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("could not schedule frame: {0}")]
    Schedule(String),
}
