use crate::model::MasterDataset;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REGIONS_FILE: &str = "regions";
pub const INSTANCES_FILE: &str = "instances";
pub const INSTANCE_TYPES_FILE: &str = "instanceTypes";
pub const IMAGES_FILE: &str = "images";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load all four collections from `<dir>/<name>.json`.
///
/// Files are read in a fixed order and the first failure stops the load, so
/// no partially populated dataset is ever returned.
pub fn load_master_dataset(dir: &Path) -> Result<MasterDataset, LoadError> {
    let regions = load_collection(dir, REGIONS_FILE)?;
    let instances = load_collection(dir, INSTANCES_FILE)?;
    let instance_types = load_collection(dir, INSTANCE_TYPES_FILE)?;
    let images = load_collection(dir, IMAGES_FILE)?;

    Ok(MasterDataset {
        regions,
        instances,
        instance_types,
        images,
    })
}

/// Same as [`load_master_dataset`], but a failure is logged and yields the
/// empty dataset so the server can still start.
pub fn load_or_empty(dir: &Path) -> MasterDataset {
    match load_master_dataset(dir) {
        Ok(dataset) => {
            let counts = dataset.counts();
            log::info!(
                "Master data loaded: {} regions, {} instances, {} instance types, {} images",
                counts.regions,
                counts.instances,
                counts.instance_types,
                counts.images
            );
            dataset
        }
        Err(e) => {
            log::error!("{}; serving empty collections", e);
            MasterDataset::default()
        }
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, LoadError> {
    let path = dir.join(format!("{}.json", name));
    let contents = std::fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse { path, source })
}
