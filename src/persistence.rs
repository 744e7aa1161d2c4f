//! Scene persistence: a small string key-value seam (`SceneStorage`)
//! with JSON encoding on top. The storage medium stays pluggable; the
//! editor runs on eframe's own storage, tests and headless use run on
//! files or an in-memory map.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::error;
use thiserror::Error;

use crate::scene::Scene;

/// Well-known key the current scene is stored under.
pub const SCENE_KEY: &str = "neonsign:scene";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize scene: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to access storage: {0}")]
    Storage(#[from] io::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Minimal string key-value store the scene persists through.
/// Matches the shape of `eframe::Storage` so the editor's storage can
/// back it directly.
pub trait SceneStorage {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
}

pub fn encode_scene(scene: &Scene) -> PersistenceResult<String> {
    Ok(serde_json::to_string(scene)?)
}

pub fn decode_scene(json: &str) -> PersistenceResult<Scene> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize the scene under [`SCENE_KEY`].
pub fn save_scene(scene: &Scene, storage: &mut dyn SceneStorage) -> PersistenceResult<()> {
    let json = encode_scene(scene)?;
    storage.set_string(SCENE_KEY, json);
    Ok(())
}

/// Load the scene stored under [`SCENE_KEY`]. A missing key is not an
/// error; it yields `None`.
pub fn load_scene(storage: &dyn SceneStorage) -> PersistenceResult<Option<Scene>> {
    match storage.get_string(SCENE_KEY) {
        Some(json) => Ok(Some(decode_scene(&json)?)),
        None => Ok(None),
    }
}

/// File-backed storage: one JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys like "neonsign:scene" are not portable file names.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SceneStorage for FileStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set_string(&mut self, key: &str, value: String) {
        let path = self.path_for(key);
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, value));
        if let Err(err) = result {
            error!("Failed to write {}: {err}", path.display());
        }
    }
}

/// Adapter persisting through eframe's own key-value storage.
pub struct EframeStorage<'a>(pub &'a mut dyn eframe::Storage);

impl SceneStorage for EframeStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}
