// Favorites persistence
//
// The favorite set is an ordered, de-duplicated list of listing links,
// persisted as a whole JSON array after every mutation. Read once at
// startup; no external invalidation.
//
// The storage backend is an explicit trait so the store is testable
// without touching the real config directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Error from favorites persistence.
#[derive(Debug)]
pub enum FavoritesError {
    /// File I/O error
    Io(String),
    /// JSON serialization error
    Serde(String),
}

impl std::fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoritesError::Io(msg) => write!(f, "I/O error: {}", msg),
            FavoritesError::Serde(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FavoritesError {}

/// Persistence seam for the favorites list.
pub trait FavoritesBackend {
    fn load(&self) -> Result<Vec<String>, FavoritesError>;
    fn save(&self, links: &[String]) -> Result<(), FavoritesError>;
}

impl<B: FavoritesBackend + ?Sized> FavoritesBackend for &B {
    fn load(&self) -> Result<Vec<String>, FavoritesError> {
        (**self).load()
    }

    fn save(&self, links: &[String]) -> Result<(), FavoritesError> {
        (**self).save(links)
    }
}

/// Whole-list JSON file, by default `~/.config/propseek/favorites.json`.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn default_path() -> PathBuf {
        crate::config_dir().join("favorites.json")
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonFileBackend {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<String>, FavoritesError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                serde_json::from_str(&json).map_err(|e| FavoritesError::Serde(e.to_string()))
            }
            // Missing file means no favorites yet, not an error
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(FavoritesError::Io(e.to_string())),
        }
    }

    fn save(&self, links: &[String]) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| FavoritesError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(links)
            .map_err(|e| FavoritesError::Serde(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| FavoritesError::Io(e.to_string()))
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryBackend {
    links: Mutex<Vec<String>>,
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<String>, FavoritesError> {
        Ok(self.links.lock().unwrap().clone())
    }

    fn save(&self, links: &[String]) -> Result<(), FavoritesError> {
        *self.links.lock().unwrap() = links.to_vec();
        Ok(())
    }
}

/// The favorite set: pure set-toggle semantics over an ordered link list.
pub struct FavoritesStore<B: FavoritesBackend> {
    links: Vec<String>,
    backend: B,
}

impl<B: FavoritesBackend> FavoritesStore<B> {
    /// Open the store, reading the persisted list once.
    pub fn open(backend: B) -> Result<Self, FavoritesError> {
        let links = backend.load()?;
        Ok(Self { links, backend })
    }

    /// Flip membership of exactly one link; persists synchronously.
    ///
    /// Returns whether the link is a favorite after the toggle.
    pub fn toggle(&mut self, link: &str) -> Result<bool, FavoritesError> {
        let now_favorite = match self.links.iter().position(|l| l == link) {
            Some(idx) => {
                self.links.remove(idx);
                false
            }
            None => {
                self.links.push(link.to_string());
                true
            }
        };
        self.backend.save(&self.links)?;
        Ok(now_favorite)
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.iter().any(|l| l == link)
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Drop all favorites; persists synchronously.
    pub fn clear(&mut self) -> Result<(), FavoritesError> {
        self.links.clear();
        self.backend.save(&self.links)
    }
}
