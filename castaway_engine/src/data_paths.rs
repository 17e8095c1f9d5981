use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    // CASTAWAY_DATA wins outright when set.
    if let Some(dir) = env::var_os("CASTAWAY_DATA") {
        return PathBuf::from(dir);
    }

    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("castaway_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        for base in dir.ancestors().take(3) {
            candidates.push(base.join("castaway_engine/data"));
            candidates.push(base.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("castaway_engine/data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_joins_onto_root() {
        let path = data_path("world.ron");
        assert!(path.ends_with("world.ron"));
        assert_eq!(path.parent(), Some(DATA_ROOT.as_path()));
    }
}
