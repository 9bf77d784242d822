use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Validates a manifest path and returns it in normalized `a/b/c` form.
///
/// Rejects empty, absolute, and prefixed paths, and any `..` component that
/// climbs above the root.
pub fn normalize_relative(path: &str) -> Result<String, AppError> {
    let mut parts: Vec<&str> = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| AppError::PathTraversal(format!("non UTF-8 path: {}", path)))?;
                parts.push(part);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(AppError::PathTraversal(path.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(AppError::PathTraversal(path.to_string()));
            }
        }
    }

    if parts.is_empty() {
        return Err(AppError::InvalidManifest(format!("path '{}' does not name an entry", path)));
    }
    Ok(parts.join("/"))
}

/// Parent of a normalized relative path, or `None` for entries directly under the root.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

/// Number of components in a normalized relative path.
pub fn depth(path: &str) -> usize {
    path.split('/').count()
}

/// Join a normalized relative path onto a root.
pub fn join_root(root: &Path, path: &str) -> PathBuf {
    path.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
}
