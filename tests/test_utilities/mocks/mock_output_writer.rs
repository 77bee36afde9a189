use container_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock OutputWriter keeping written documents in memory
#[derive(Default, Clone)]
pub struct MockOutputWriter {
    pub writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

#[allow(dead_code)]
impl MockOutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Parsed content of the last write
    pub fn last_document(&self) -> Option<serde_json::Value> {
        self.writes
            .lock()
            .unwrap()
            .last()
            .map(|(_, content)| serde_json::from_str(content).unwrap())
    }
}

impl OutputWriter for MockOutputWriter {
    fn write_output(&self, path: &Path, content: &str) -> Result<PathBuf> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(PathBuf::from("/workspace").join(path))
    }
}
