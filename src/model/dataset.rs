use crate::model::{Image, Instance, InstanceType, Region};
use serde::Serialize;

/// All collections served by the API.
///
/// Built once at startup and never mutated afterwards; handlers only ever see
/// it behind a shared reference. `Default` is the degraded, empty snapshot
/// used when loading fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterDataset {
    pub regions: Vec<Region>,
    pub instances: Vec<Instance>,
    pub instance_types: Vec<InstanceType>,
    pub images: Vec<Image>,
}

impl MasterDataset {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.instances.is_empty()
            && self.instance_types.is_empty()
            && self.images.is_empty()
    }

    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            regions: self.regions.len(),
            instances: self.instances.len(),
            instance_types: self.instance_types.len(),
            images: self.images.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCounts {
    pub regions: usize,
    pub instances: usize,
    pub instance_types: usize,
    pub images: usize,
}

/// A borrowed row of any collection, serialized in its own record shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record<'a> {
    Region(&'a Region),
    Instance(&'a Instance),
    InstanceType(&'a InstanceType),
    Image(&'a Image),
}

impl<'a> From<&'a Region> for Record<'a> {
    fn from(region: &'a Region) -> Self {
        Record::Region(region)
    }
}

impl<'a> From<&'a Instance> for Record<'a> {
    fn from(instance: &'a Instance) -> Self {
        Record::Instance(instance)
    }
}

impl<'a> From<&'a InstanceType> for Record<'a> {
    fn from(instance_type: &'a InstanceType) -> Self {
        Record::InstanceType(instance_type)
    }
}

impl<'a> From<&'a Image> for Record<'a> {
    fn from(image: &'a Image) -> Self {
        Record::Image(image)
    }
}
