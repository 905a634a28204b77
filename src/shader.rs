/*!
Loading GLSL programs from text files.

The demos keep their shaders next to the crate in the `shaders` directory. The directory can be
moved elsewhere by pointing the `GLW_SHADER_DIR` environment variable at it.

```no_run
# fn example(display: &glium::Display<glutin::surface::WindowSurface>)
#            -> Result<(), glw::ShaderError> {
use glw::shader::{load_program, shader_path};

let program = load_program(display, shader_path("basic.vert"), shader_path("basic.frag"))?;
# Ok(())
# }
```

*/
use std::env;
use std::error::Error;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glium::backend::Facade;
use glium::program::ProgramCreationError;
use glium::Program;

/// Environment variable that overrides the directory shaders are loaded from.
pub const SHADER_DIR_VAR: &str = "GLW_SHADER_DIR";

/// Error that can happen while loading a program from disk.
#[derive(Debug)]
pub enum ShaderError {
    /// One of the shader files couldn't be read.
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The sources were read but the driver refused them.
    ///
    /// The compile or link log is carried by the inner error.
    Program(ProgramCreationError),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ShaderError::Io { path, source } =>
                write!(fmt, "Couldn't read shader file `{}`: {}", path.display(), source),
            ShaderError::Program(err) => write!(fmt, "{}", err),
        }
    }
}

impl Error for ShaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            ShaderError::Program(err) => Some(err),
        }
    }
}

impl From<ProgramCreationError> for ShaderError {
    #[inline]
    fn from(err: ProgramCreationError) -> ShaderError {
        ShaderError::Program(err)
    }
}

/// Reads a whole text file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ShaderError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ShaderError::Io { path: path.to_owned(), source })
}

/// Returns the directory shaders are loaded from.
pub fn shader_dir() -> PathBuf {
    resolve_shader_dir(env::var_os(SHADER_DIR_VAR).as_deref())
}

/// Returns the path of the shader file `name`.
pub fn shader_path(name: &str) -> PathBuf {
    shader_dir().join(name)
}

/// Picks the shader directory given the value of `GLW_SHADER_DIR`, if any.
///
/// An empty override is ignored.
pub fn resolve_shader_dir(dir_override: Option<&OsStr>) -> PathBuf {
    match dir_override {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders"),
    }
}

/// Reads a vertex and a fragment shader from disk, compiles them and links them together.
pub fn load_program<F, V, G>(facade: &F, vertex_path: V, fragment_path: G)
                             -> Result<Program, ShaderError>
    where F: Facade + ?Sized, V: AsRef<Path>, G: AsRef<Path>
{
    let vertex_path = vertex_path.as_ref();
    let fragment_path = fragment_path.as_ref();

    let vertex_source = read_file(vertex_path)?;
    let fragment_source = read_file(fragment_path)?;

    log::debug!("Linking program from `{}` and `{}`", vertex_path.display(),
                fragment_path.display());

    match Program::from_source(facade, &vertex_source, &fragment_source, None) {
        Ok(program) => Ok(program),
        Err(err) => {
            log::error!("{}", err);
            Err(err.into())
        },
    }
}
