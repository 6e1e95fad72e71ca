//! On-disk map catalog.
//!
//! Maps live as `<name>.smm/` directories under the configured map folder,
//! each carrying a three-line `info` file: author, title, duration in
//! seconds. Malformed entries are skipped with a warning rather than failing
//! the whole scan; an unreadable map directory is the only hard error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use cadenza_ui::BrowserItem;

use crate::error::{FrontError, FrontResult};

/// Directory-name extension marking a map folder.
pub const MAP_EXTENSION: &str = "smm";
/// Metadata file expected inside every map folder.
pub const INFO_FILE_NAME: &str = "info";

/// Parsed metadata of one map folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInfo {
    /// The map folder.
    pub path: PathBuf,
    /// Song title. Empty lines in the info file become `"???"`.
    pub title: String,
    /// Song author. Same fallback as the title.
    pub author: String,
    /// Song duration in seconds.
    pub duration_secs: u32,
}

impl From<&MapInfo> for BrowserItem {
    fn from(info: &MapInfo) -> Self {
        Self {
            title: info.title.clone(),
            author: info.author.clone(),
            media_ref: info.path.display().to_string(),
        }
    }
}

/// Scanner and cache over the configured map directory.
#[derive(Debug)]
pub struct MapCatalog {
    root: PathBuf,
    maps: Vec<MapInfo>,
}

impl MapCatalog {
    /// Creates an empty catalog rooted at the given map directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), maps: Vec::new() }
    }

    /// The cached maps from the last scan, in path order.
    #[must_use]
    pub fn maps(&self) -> &[MapInfo] {
        &self.maps
    }

    /// The browser-facing view of the cached maps.
    #[must_use]
    pub fn browser_items(&self) -> Vec<BrowserItem> {
        self.maps.iter().map(BrowserItem::from).collect()
    }

    /// Scans the map directory, replacing the cache.
    ///
    /// Entries that are not `.smm` directories are ignored; map folders with
    /// a missing or corrupted info file are skipped with a warning. Results
    /// are sorted by path so the browser order is stable across runs.
    ///
    /// # Errors
    ///
    /// [`FrontError::MapDirUnreadable`] when the directory itself cannot be
    /// listed.
    pub fn load_available(&mut self) -> FrontResult<&[MapInfo]> {
        let entries = fs::read_dir(&self.root).map_err(|source| FrontError::MapDirUnreadable {
            path: self.root.clone(),
            source,
        })?;

        let mut maps = Vec::new();
        for entry in entries.flatten() {
            if let Some(map) = parse_map_info(&entry.path()) {
                maps.push(map);
            }
        }
        maps.sort_by(|a, b| a.path.cmp(&b.path));

        info!(count = maps.len(), root = ?self.root, "map catalog loaded");
        self.maps = maps;
        Ok(&self.maps)
    }
}

fn parse_map_info(path: &Path) -> Option<MapInfo> {
    let is_map = path.is_dir()
        && path.extension().is_some_and(|extension| extension == MAP_EXTENSION);
    if !is_map {
        return None;
    }

    let info_path = path.join(INFO_FILE_NAME);
    let raw = match fs::read_to_string(&info_path) {
        Ok(raw) => raw,
        Err(_) => {
            warn!(?path, "map exists, but info file is missing");
            return None;
        }
    };

    let mut lines = raw.lines();
    let field = |line: Option<&str>| {
        let value = line.map_or("", str::trim);
        if value.is_empty() { "???".to_owned() } else { value.to_owned() }
    };
    let author = field(lines.next());
    let title = field(lines.next());

    let Ok(duration_secs) = lines.next().map_or("", str::trim).parse() else {
        warn!(?path, "map exists, but info file is corrupted");
        return None;
    };

    Some(MapInfo { path: path.to_path_buf(), title, author, duration_secs })
}
