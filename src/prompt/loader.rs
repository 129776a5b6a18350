//! Prompt Loader - Load and cache prompt templates
//!
//! This module provides the PromptLoader struct which resolves template
//! names against a directory of .md files, caching content in memory.
//! Names with no file on disk fall back to the builtin registry, so the
//! reasoning template is always resolvable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{PromptrError, Result};
use crate::prompt::builtin;

/// Loads and caches prompt templates
pub struct PromptLoader {
    /// Base directory containing prompt template files
    templates_dir: PathBuf,
    /// In-memory cache of loaded templates
    cache: RwLock<HashMap<String, String>>,
}

impl PromptLoader {
    /// Create a new PromptLoader with the given templates directory
    pub fn new(templates_dir: impl AsRef<Path>) -> Self {
        Self {
            templates_dir: templates_dir.as_ref().to_path_buf(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a template's exact text
    ///
    /// Resolution order: in-memory cache, then `<dir>/<name>.md` on disk,
    /// then the builtin registry. Repeated loads of the same name return
    /// identical strings.
    ///
    /// # Arguments
    /// * `name` - The template name (without .md extension)
    pub fn load(&self, name: &str) -> Result<String> {
        // Check cache first
        {
            let cache = self
                .cache
                .read()
                .map_err(|e| PromptrError::Storage(format!("Failed to acquire read lock: {}", e)))?;
            if let Some(content) = cache.get(name) {
                return Ok(content.clone());
            }
        }

        let content = self.read_source(name)?;

        // Cache the loaded template
        {
            let mut cache = self
                .cache
                .write()
                .map_err(|e| PromptrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            cache.insert(name.to_string(), content.clone());
        }

        Ok(content)
    }

    /// Get a cached template without touching disk or the registry
    pub fn get(&self, name: &str) -> Option<String> {
        let cache = self.cache.read().ok()?;
        cache.get(name).cloned()
    }

    /// Check if a template is resolvable, on disk or builtin
    pub fn exists(&self, name: &str) -> bool {
        self.template_path(name).exists() || builtin::builtin(name).is_some()
    }

    /// Read template content from disk or the builtin registry
    fn read_source(&self, name: &str) -> Result<String> {
        let path = self.template_path(name);
        if path.exists() {
            return std::fs::read_to_string(&path).map_err(|e| {
                PromptrError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to load template '{}' from {:?}: {}", name, path, e),
                ))
            });
        }

        match builtin::builtin(name) {
            Some(content) => {
                tracing::debug!(name = %name, "Resolved template from builtin registry");
                Ok(content.to_string())
            }
            None => Err(PromptrError::TemplateNotFound(name.to_string())),
        }
    }

    /// Get the full path for a template by name
    fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{}.md", name))
    }

    /// List all resolvable templates: .md files in the directory plus
    /// builtins, sorted and deduplicated
    pub fn list_available(&self) -> Result<Vec<String>> {
        let mut templates: Vec<String> = builtin::builtin_names().iter().map(|n| n.to_string()).collect();

        if self.templates_dir.exists() {
            let entries = std::fs::read_dir(&self.templates_dir).map_err(|e| {
                PromptrError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to read templates directory {:?}: {}", self.templates_dir, e),
                ))
            })?;

            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "md")
                    && let Some(stem) = path.file_stem()
                    && let Some(name) = stem.to_str()
                {
                    templates.push(name.to_string());
                }
            }
        }

        templates.sort();
        templates.dedup();
        Ok(templates)
    }

    /// Preload all resolvable templates into cache
    pub fn preload_all(&self) -> Result<usize> {
        let available = self.list_available()?;
        let mut loaded = 0;
        for name in &available {
            self.load(name)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Clear the template cache
    pub fn clear_cache(&self) -> Result<()> {
        let mut cache = self
            .cache
            .write()
            .map_err(|e| PromptrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        cache.clear();
        Ok(())
    }

    /// Get the templates directory path
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}
