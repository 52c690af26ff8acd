use crate::model::{MasterDataset, Record, ResourceKind};

impl MasterDataset {
    /// Rows backing `kind`, in file order.
    ///
    /// `InstanceSearch` reads the instance collection; unrecognized kinds have
    /// no rows at all.
    pub fn records(&self, kind: &ResourceKind) -> Vec<Record<'_>> {
        match kind {
            ResourceKind::Regions => self.regions.iter().map(Record::from).collect(),
            ResourceKind::Images => self.images.iter().map(Record::from).collect(),
            ResourceKind::InstanceTypes => self.instance_types.iter().map(Record::from).collect(),
            ResourceKind::Instances | ResourceKind::InstanceSearch => {
                self.instances.iter().map(Record::from).collect()
            }
            ResourceKind::Unrecognized(_) => Vec::new(),
        }
    }
}
