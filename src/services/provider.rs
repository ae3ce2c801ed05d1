//! Import aggregation: the top-level resolution pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::config::ImportConfig;
use crate::domain::{ImportError, ImportSet, Location, RealmImport};
use crate::services::checksum::checksum;
use crate::services::content_reader::{ContentReader, RawDocument};
use crate::services::decoder::decode;
use crate::services::interpolator::Interpolator;

/// Resolves the configured import path into an [`ImportSet`].
///
/// Sources are processed one at a time, synchronously; the first failure of
/// any kind aborts the run with no partial result.
#[derive(Debug)]
pub struct ImportProvider {
    config: ImportConfig,
    reader: ContentReader,
    interpolator: Option<Interpolator>,
}

impl ImportProvider {
    pub fn new(config: ImportConfig) -> Result<Self, ImportError> {
        let reader = ContentReader::new()?;
        let interpolator = Interpolator::from_config(&config);
        Ok(Self { config, reader, interpolator })
    }

    /// Resolve the configured path into a decoded, checksummed import set.
    pub fn resolve(&self) -> Result<ImportSet, ImportError> {
        match Location::resolve(self.config.path())? {
            Location::LocalFile(path) => self.read_from_file(&path),
            Location::LocalDirectory(path) => self.read_from_directory(&path),
            Location::Remote(url) => self.read_from_remote(&url),
        }
    }

    /// Import every regular file directly inside `dir`.
    ///
    /// Subdirectories are ignored, not descended into. Files are processed in
    /// name order so runs over the same directory behave identically whatever
    /// order the filesystem lists entries in. An empty directory yields an
    /// empty set.
    pub fn read_from_directory(&self, dir: &Path) -> Result<ImportSet, ImportError> {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut imports = ImportSet::new();
        for file in &files {
            let document = self.reader.read_local(file)?;
            let name = document.filename.clone();
            let import = self.read_realm_import(document)?;
            imports.insert(name, import)?;
        }

        debug!(dir = %dir.display(), count = imports.len(), "resolved directory import");
        Ok(imports)
    }

    /// Import a single local file, keyed by its file name.
    pub fn read_from_file(&self, file: &Path) -> Result<ImportSet, ImportError> {
        let document = self.reader.read_local(file)?;
        let name = document.filename.clone();
        let import = self.read_realm_import(document)?;

        let mut imports = ImportSet::new();
        imports.insert(name, import)?;
        Ok(imports)
    }

    /// Import a single remote document, keyed by the URL's terminal path
    /// segment.
    pub fn read_from_remote(&self, url: &Url) -> Result<ImportSet, ImportError> {
        let document = self.reader.read_remote(url)?;
        let name = document.filename.clone();
        let import = self.read_realm_import(document)?;

        let mut imports = ImportSet::new();
        imports.insert(name, import)?;
        Ok(imports)
    }

    /// Run one raw document through the pipeline tail: interpolate, checksum,
    /// decode, stamp.
    fn read_realm_import(&self, document: RawDocument) -> Result<RealmImport, ImportError> {
        let RawDocument { filename, content } = document;

        let format = self.config.file_type().resolve(&filename)?;
        let effective = match &self.interpolator {
            Some(interpolator) => interpolator.interpolate(&content)?,
            None => content,
        };

        let digest = checksum(effective.as_bytes());
        let representation = decode(format, &filename, &effective)?;
        debug!(%filename, realm = %representation.realm, checksum = %digest, "decoded import");

        Ok(RealmImport::new(representation, digest))
    }
}

/// Convenience entry point: build a provider for `config` and resolve it.
pub fn resolve(config: ImportConfig) -> Result<ImportSet, ImportError> {
    ImportProvider::new(config)?.resolve()
}
