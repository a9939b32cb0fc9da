//! Purpose: Resolve which container file to read.
//! Exports: `GLB_PATH_ENV`, `resolve_source_path`, `source_path_from_env`.
//! Role: Keep CLI and library path semantics aligned from one source.
//! Invariants: Precedence is explicit path, then `GLB_PATH`, then a usage error.
//! Invariants: An empty `GLB_PATH` counts as unset.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind};

pub const GLB_PATH_ENV: &str = "GLB_PATH";

pub fn resolve_source_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(Error::new(ErrorKind::Usage)
            .with_message("no container path")
            .with_hint(format!(
                "Pass --path <FILE> or set {GLB_PATH_ENV}."
            ))),
    }
}

/// Resolves against the current process environment, read once.
pub fn source_path_from_env(explicit: Option<&Path>) -> Result<PathBuf, Error> {
    resolve_source_path(explicit, std::env::var_os(GLB_PATH_ENV))
}

#[cfg(test)]
mod tests {
    use super::resolve_source_path;
    use crate::core::error::ErrorKind;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    #[test]
    fn explicit_path_wins() {
        let path = resolve_source_path(
            Some(Path::new("a.glb")),
            Some(OsString::from("b.glb")),
        )
        .expect("path");
        assert_eq!(path, PathBuf::from("a.glb"));
    }

    #[test]
    fn env_value_is_fallback() {
        let path = resolve_source_path(None, Some(OsString::from("b.glb"))).expect("path");
        assert_eq!(path, PathBuf::from("b.glb"));
    }

    #[test]
    fn missing_both_is_usage_error() {
        let err = resolve_source_path(None, None).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(err.hint().expect("hint").contains("GLB_PATH"));

        let err = resolve_source_path(None, Some(OsString::new())).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }
}
