use std::error::Error;
use std::fmt;

use crate::shader::ShaderError;
use crate::window::CreationError;

/// Error that can happen while building or drawing a demo.
#[derive(Debug)]
pub enum DemoError {
    /// The window or the OpenGL context couldn't be created.
    Creation(CreationError),

    /// A shader file couldn't be read, compiled or linked.
    Shader(ShaderError),

    /// Error while uploading vertex data.
    VertexBuffer(glium::vertex::BufferCreationError),

    /// Error while uploading index data.
    IndexBuffer(glium::index::BufferCreationError),

    /// A draw command was rejected.
    Draw(glium::DrawError),

    /// The frame couldn't be presented.
    SwapBuffers(glium::SwapBuffersError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            DemoError::Creation(ref err) => write!(fmt, "Couldn't open the window: {}", err),
            DemoError::Shader(ref err) => write!(fmt, "{}", err),
            DemoError::VertexBuffer(ref err) =>
                write!(fmt, "Error while creating a vertex buffer: {}", err),
            DemoError::IndexBuffer(ref err) =>
                write!(fmt, "Error while creating an index buffer: {}", err),
            DemoError::Draw(ref err) => write!(fmt, "Error while drawing: {}", err),
            DemoError::SwapBuffers(ref err) => write!(fmt, "Error while swapping buffers: {}", err),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DemoError::Creation(ref err) => Some(err),
            DemoError::Shader(ref err) => Some(err),
            DemoError::VertexBuffer(ref err) => Some(err),
            DemoError::IndexBuffer(ref err) => Some(err),
            DemoError::Draw(ref err) => Some(err),
            DemoError::SwapBuffers(ref err) => Some(err),
        }
    }
}

impl From<CreationError> for DemoError {
    #[inline]
    fn from(err: CreationError) -> DemoError {
        DemoError::Creation(err)
    }
}

impl From<ShaderError> for DemoError {
    #[inline]
    fn from(err: ShaderError) -> DemoError {
        DemoError::Shader(err)
    }
}

impl From<glium::vertex::BufferCreationError> for DemoError {
    #[inline]
    fn from(err: glium::vertex::BufferCreationError) -> DemoError {
        DemoError::VertexBuffer(err)
    }
}

impl From<glium::index::BufferCreationError> for DemoError {
    #[inline]
    fn from(err: glium::index::BufferCreationError) -> DemoError {
        DemoError::IndexBuffer(err)
    }
}

impl From<glium::DrawError> for DemoError {
    #[inline]
    fn from(err: glium::DrawError) -> DemoError {
        DemoError::Draw(err)
    }
}

impl From<glium::SwapBuffersError> for DemoError {
    #[inline]
    fn from(err: glium::SwapBuffersError) -> DemoError {
        DemoError::SwapBuffers(err)
    }
}
