// Fan-out loading of the dataset collections with an all-or-nothing join

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::{Collection, Dataset};
use crate::errors::PaddockError;

/// Where collection documents come from
pub trait CollectionSource {
    /// Fetch the raw JSON document for a collection
    fn fetch(&self, collection: Collection)
    -> impl Future<Output = Result<Vec<u8>, PaddockError>>;
}

/// Reads `<root>/<collection>.json` documents from disk
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}

impl CollectionSource for DirectorySource {
    async fn fetch(&self, collection: Collection) -> Result<Vec<u8>, PaddockError> {
        let path = self.path_for(collection);
        debug!("Reading collection {} from {:?}", collection, path);
        tokio::fs::read(&path)
            .await
            .map_err(|e| PaddockError::CollectionRead {
                collection,
                source: e,
            })
    }
}

/// In-memory documents, for embedding and tests
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: HashMap<Collection, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, collection: Collection, document: impl Into<Vec<u8>>) -> Self {
        self.insert(collection, document);
        self
    }

    pub fn insert(&mut self, collection: Collection, document: impl Into<Vec<u8>>) {
        self.documents.insert(collection, document.into());
    }
}

impl CollectionSource for MemorySource {
    async fn fetch(&self, collection: Collection) -> Result<Vec<u8>, PaddockError> {
        self.documents
            .get(&collection)
            .cloned()
            .ok_or(PaddockError::CollectionMissing { collection })
    }
}

async fn fetch_collection<S, T>(source: &S, collection: Collection) -> Result<T, PaddockError>
where
    S: CollectionSource,
    T: DeserializeOwned,
{
    let document = source.fetch(collection).await?;
    let parsed = serde_json::from_slice(&document).map_err(|e| PaddockError::CollectionParse {
        collection,
        source: e,
    })?;
    debug!(
        "Parsed collection {} ({} bytes)",
        collection,
        document.len()
    );
    Ok(parsed)
}

/// Load every collection. The first failure aborts the whole load; a partial dataset is
/// never returned.
pub async fn load<S: CollectionSource>(source: &S) -> Result<Dataset, PaddockError> {
    let (metadata, championship, constructor_dominance, grid_vs_race, circuits, pit_stops) = tokio::try_join!(
        fetch_collection(source, Collection::Metadata),
        fetch_collection(source, Collection::ChampionshipBattles),
        fetch_collection(source, Collection::ConstructorDominance),
        fetch_collection(source, Collection::GridVsRace),
        fetch_collection(source, Collection::Circuits),
        fetch_collection(source, Collection::PitStops),
    )?;

    let dataset = Dataset::from_parts(
        metadata,
        championship,
        constructor_dominance,
        grid_vs_race,
        circuits,
        pit_stops,
    );
    info!(
        "Loaded dataset with {} seasons, {} drivers, {} constructors and {} circuits",
        dataset.metadata().years.len(),
        dataset.metadata().drivers.len(),
        dataset.metadata().constructors.len(),
        dataset.metadata().circuits.len()
    );
    Ok(dataset)
}

/// Drive [`load`] to completion on a current-thread runtime
pub fn load_blocking<S: CollectionSource>(source: &S) -> Result<Dataset, PaddockError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PaddockError::RuntimeStart { source: e })?;
    runtime.block_on(load(source))
}
