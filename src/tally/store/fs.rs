use super::DataStore;
use crate::error::{Result, TallyError};
use crate::model::Article;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TallyError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "articles.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

fn to_pretty_json(articles: &[Article]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    articles.serialize(&mut ser).map_err(TallyError::Encode)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Article>> {
        if !self.path.exists() {
            debug!(
                "event=store_load status=missing path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TallyError::Io)?;
        let articles: Vec<Article> = serde_json::from_str(&content).map_err(TallyError::Parse)?;
        debug!(
            "event=store_load status=ok path={} count={}",
            self.path.display(),
            articles.len()
        );
        Ok(articles)
    }

    fn save(&mut self, articles: &[Article]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(articles)?;

        // Whole-document replace: write a sibling tmp file, then rename over.
        let tmp_file = self.tmp_path();
        let replaced = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &self.path));
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_file);
            return Err(TallyError::Io(e));
        }

        debug!(
            "event=store_save status=ok path={} count={}",
            self.path.display(),
            articles.len()
        );
        Ok(())
    }
}
