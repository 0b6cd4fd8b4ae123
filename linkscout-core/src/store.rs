//! Result store
//!
//! Runs the builder across every category and persists the resulting
//! catalog as indented JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::{
    Catalog, CatalogBuilder, CatalogError, RunConfig, EXPORT_EXTENSION, EXPORT_PREFIX,
};

static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Cancellation flag shared with a signal handler
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Default export location for a target at a given unix time
///
/// `osint_<name>_<ts>.json`, where `<name>` is the lower-cased target with
/// each run of non-word characters collapsed to `_`.
pub fn default_export_path(target: &str, unix_ts: i64) -> PathBuf {
    let safe_name = NON_WORD_REGEX.replace_all(&target.to_lowercase(), "_").into_owned();
    PathBuf::from(format!(
        "{}_{}_{}.{}",
        EXPORT_PREFIX, safe_name, unix_ts, EXPORT_EXTENSION
    ))
}

/// Aggregates category outputs into a catalog and exports it
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    config: RunConfig,
}

impl ResultStore {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Build every category for a target, in registry order
    pub fn run_all(&self, target: &str) -> Catalog {
        let (catalog, _) = self.populate(target, |_| false);
        catalog
    }

    /// Like [`run_all`](Self::run_all), but stops before the next category once
    /// `interrupt` is triggered. No partial catalog is returned.
    pub fn run_all_with(&self, target: &str, interrupt: &Interrupt) -> Result<Catalog, CatalogError> {
        self.run_until(target, |_| interrupt.is_triggered())
    }

    fn run_until(
        &self,
        target: &str,
        stop: impl FnMut(usize) -> bool,
    ) -> Result<Catalog, CatalogError> {
        match self.populate(target, stop) {
            (catalog, true) => Ok(catalog),
            (catalog, false) => Err(CatalogError::Interrupted {
                completed: catalog.len(),
            }),
        }
    }

    /// Fill a catalog category by category. `stop` sees the number of
    /// categories done so far; the flag is false if it cut the run short.
    fn populate(&self, target: &str, mut stop: impl FnMut(usize) -> bool) -> (Catalog, bool) {
        debug!("Run config: {:?}", self.config);

        let builder = CatalogBuilder::new(target);
        let mut catalog = Catalog::new(target);
        for category in builder.categories() {
            if stop(catalog.len()) {
                return (catalog, false);
            }
            catalog.insert(builder.build_category(category).into_entries());
        }
        info!(
            "Generated {} links across {} categories",
            catalog.entry_count(),
            catalog.len()
        );
        (catalog, true)
    }

    /// Write the catalog as JSON and return the path written
    ///
    /// Without a destination, the default file name from
    /// [`default_export_path`] is used in the working directory.
    pub fn export(&self, catalog: &Catalog, destination: Option<&Path>) -> Result<PathBuf, CatalogError> {
        match destination {
            Some(path) => {
                write_catalog(catalog, path)?;
                Ok(path.to_path_buf())
            }
            None => self.export_to_dir(catalog, Path::new("")),
        }
    }

    /// Like [`export`](Self::export), but writes nothing once `interrupt` is triggered
    pub fn export_with(
        &self,
        catalog: &Catalog,
        destination: Option<&Path>,
        interrupt: &Interrupt,
    ) -> Result<PathBuf, CatalogError> {
        if interrupt.is_triggered() {
            return Err(CatalogError::Interrupted {
                completed: catalog.len(),
            });
        }
        self.export(catalog, destination)
    }

    /// Write the catalog under `dir` using the default file name
    pub fn export_to_dir(&self, catalog: &Catalog, dir: &Path) -> Result<PathBuf, CatalogError> {
        let name = default_export_path(catalog.target(), chrono::Utc::now().timestamp());
        let path = dir.join(name);
        write_catalog(catalog, &path)?;
        Ok(path)
    }

    /// Read an exported catalog back
    pub fn load(&self, path: &Path, target: &str) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json(target, &content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serialize with 4-space indentation
pub fn to_pretty_json(catalog: &Catalog) -> Result<Vec<u8>, CatalogError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    catalog.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let json = to_pretty_json(catalog)?;
    fs::write(path, json).map_err(|source| CatalogError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported catalog to {}", path.display());
    Ok(())
}
