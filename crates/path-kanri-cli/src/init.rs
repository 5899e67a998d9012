//! Route map scaffolding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// File name of the scaffolded route map.
pub const ROUTE_MAP_FILE: &str = "routes.json";

/// Contents written to a new route map.
pub const ROUTE_MAP_STUB: &str = include_str!("../stubs/routes.json");

/// Creates `dir` if needed and writes the route map stub into it.
///
/// An existing route map in `dir` is overwritten. Returns the path of the
/// written file.
pub fn init(dir: &Path) -> io::Result<PathBuf> {
    if dir.exists() {
        debug!(dir = %dir.display(), "Directory already exists");
    } else {
        fs::create_dir_all(dir)?;
        info!("Created directory: {}", dir.display());
    }

    let file = dir.join(ROUTE_MAP_FILE);
    fs::write(&file, ROUTE_MAP_STUB)?;
    info!("Created route map: {}", file.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    use path_kanri::{PathParams, RouteRegistry};

    #[test]
    fn test_init_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("pathKanri");

        let file = init(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(file, dir.join(ROUTE_MAP_FILE));
        assert_eq!(fs::read_to_string(&file).unwrap(), ROUTE_MAP_STUB);
    }

    #[test]
    fn test_init_overwrites_existing_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(ROUTE_MAP_FILE), "{}").unwrap();

        let file = init(root.path()).unwrap();
        assert_eq!(fs::read_to_string(file).unwrap(), ROUTE_MAP_STUB);
    }

    #[test]
    fn test_stub_is_a_valid_route_map() {
        let registry = RouteRegistry::from_json_str(ROUTE_MAP_STUB).unwrap();
        assert_eq!(registry.len(), 4);

        let params = PathParams::from([("exampleId", "1"), ("slug", "abc")]);
        assert_eq!(
            registry.get_path("example", Some(&params), None).unwrap(),
            "/example/1/abc"
        );
    }
}
