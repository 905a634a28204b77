use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glw::shader::{read_file, resolve_shader_dir, shader_dir, ShaderError};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("glw-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn read_existing_file() {
    let path = scratch_file("basic.vert", "#version 410 core\nvoid main() {}\n");

    assert_eq!(read_file(&path).unwrap(), "#version 410 core\nvoid main() {}\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("glw-this-file-does-not-exist.frag");

    match read_file(&path) {
        Err(ShaderError::Io { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn io_error_names_the_file() {
    let err = read_file("no/such/shader.vert").unwrap_err();

    assert!(err.to_string().contains("no/such/shader.vert"));
    assert!(err.source().is_some());
}

#[test]
fn program_error_carries_the_log() {
    let err = ShaderError::from(glium::program::ProgramCreationError::LinkingError(
        "undefined symbol `main`".to_owned()));

    assert!(err.to_string().contains("undefined symbol `main`"));
}

#[test]
fn shader_dir_override() {
    assert_eq!(resolve_shader_dir(Some(OsStr::new("/opt/shaders"))),
               PathBuf::from("/opt/shaders"));
}

#[test]
fn shader_dir_defaults_to_crate() {
    let expected = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");

    assert_eq!(resolve_shader_dir(None), expected);
    assert_eq!(resolve_shader_dir(Some(OsStr::new(""))), expected);
}

#[test]
fn bundled_shaders_are_readable() {
    if std::env::var_os(glw::shader::SHADER_DIR_VAR).is_some() {
        return;
    }

    let dir = shader_dir();
    for name in ["basic.vert", "basic.frag", "cube.vert", "cube.frag", "lit.vert", "lit.frag"] {
        let source = read_file(dir.join(name)).unwrap();
        assert!(source.starts_with("#version"), "{}", name);
    }
}
