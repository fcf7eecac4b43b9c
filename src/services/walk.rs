use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// How far below the directory to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Depth {
    /// Direct children only, like `dir/*.ext`.
    Shallow,
    /// Any depth, like `dir/**/*.ext`.
    Recursive,
}

/// Files under `dir` whose extension is `extension`, sorted by name per level.
///
/// A missing or unreadable directory yields an empty list.
pub(crate) fn matching_files(dir: &Path, extension: &str, depth: Depth) -> Vec<PathBuf> {
    let max_depth = match depth {
        Depth::Shallow => 1,
        Depth::Recursive => usize::MAX,
    };

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(OsStr::to_str) == Some(extension))
        .map(|entry| entry.into_path())
        .collect()
}

/// Same as [`matching_files`], keeping only the file names.
pub(crate) fn matching_names(dir: &Path, extension: &str, depth: Depth) -> Vec<String> {
    matching_files(dir, extension, depth)
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
