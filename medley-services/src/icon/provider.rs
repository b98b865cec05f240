//! Default icon provider backed by MIME detection and theme lookup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::filesystem::entry::FileEntry;
use crate::icon::{IconError, IconHandle, IconProvider};

/// Icon provider based on MIME type detection.
///
/// Maps an entry to a freedesktop icon name, then looks the name up in
/// the configured search paths. Results are memoized per icon name, so
/// [`IconProvider::is_available`] reports true only for names that have
/// been resolved once already; the first resolution of a name is the
/// expensive path and belongs on the background pool.
pub struct MimeIconProvider {
    search_paths: Vec<PathBuf>,
    resolved: Mutex<HashMap<String, IconHandle>>,
}

impl MimeIconProvider {
    /// Create a provider with the standard icon search paths.
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            search_paths.push(home.join(".icons"));
            search_paths.push(home.join(".local/share/icons"));
        }

        search_paths.push(PathBuf::from("/usr/share/icons"));
        search_paths.push(PathBuf::from("/usr/share/pixmaps"));

        Self::with_search_paths(search_paths)
    }

    /// Create a provider with explicit search paths.
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Icon name for an entry, from its MIME type or extension.
    pub fn icon_name_for(entry: &FileEntry) -> String {
        if entry.is_dir() {
            return "folder".to_string();
        }

        if let Some(ref mime_type) = entry.metadata.mime_type {
            return Self::mime_to_icon_name(mime_type);
        }

        if let Some(ext) = entry.extension() {
            let mime_type = mime_guess2::from_ext(ext).first_or_text_plain();
            return Self::mime_to_icon_name(mime_type.as_ref());
        }

        "text-x-generic".to_string()
    }

    /// Map MIME type to icon name.
    fn mime_to_icon_name(mime_type: &str) -> String {
        let (main_type, sub_type) = if let Some((m, s)) = mime_type.split_once('/') {
            (m, s)
        } else {
            return "unknown".to_string();
        };

        match main_type {
            "image" => "image-x-generic".to_string(),
            "video" => "video-x-generic".to_string(),
            "audio" => "audio-x-generic".to_string(),
            "text" => format!("text-x-{}", sub_type),
            "application" => match sub_type {
                "pdf" => "application-pdf".to_string(),
                "zip" | "x-zip-compressed" => "application-zip".to_string(),
                "x-tar" => "application-x-tar".to_string(),
                "x-gzip" => "application-x-gzip".to_string(),
                "x-7z-compressed" => "application-x-7z-compressed".to_string(),
                "x-rar-compressed" => "application-x-rar".to_string(),
                "x-bittorrent" => "application-x-bittorrent".to_string(),
                "x-executable" | "x-sharedlib" => "application-x-executable".to_string(),
                _ => "application-x-generic".to_string(),
            },
            "inode" => match sub_type {
                "directory" => "folder".to_string(),
                _ => "inode-generic".to_string(),
            },
            _ => format!("{}-x-generic", main_type),
        }
    }

    /// Scan the search paths for an icon file with this name.
    fn lookup_icon_file(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.search_paths {
            for ext in ["svg", "png", "xpm"] {
                let candidate = dir.join(format!("{}.{}", name, ext));
                if candidate.is_file() {
                    log::debug!("icon lookup hit: {:?}", candidate);
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl IconProvider for MimeIconProvider {
    fn is_available(&self, entry: &FileEntry) -> bool {
        let name = Self::icon_name_for(entry);
        self.resolved.lock().unwrap().contains_key(&name)
    }

    fn icon_for(&self, entry: &FileEntry) -> Result<IconHandle, IconError> {
        let name = Self::icon_name_for(entry);

        if let Some(icon) = self.resolved.lock().unwrap().get(&name) {
            return Ok(icon.clone());
        }

        let path = self.lookup_icon_file(&name);
        let icon = IconHandle {
            name: name.clone(),
            path,
        };
        self.resolved.lock().unwrap().insert(name, icon.clone());

        Ok(icon)
    }
}

impl Default for MimeIconProvider {
    fn default() -> Self {
        Self::new()
    }
}
