use std::fmt;

pub const REGIONS: &str = "regions";
pub const IMAGES: &str = "images";
pub const INSTANCE_TYPES: &str = "instance_types";
pub const INSTANCES: &str = "instances";
pub const INSTANCE_SEARCH: &str = "instance_search";

/// The closed set of query targets.
///
/// Tokens outside the set are kept as `Unrecognized` so the requested name can
/// still be echoed back; they resolve to an empty dataset rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Regions,
    Images,
    InstanceTypes,
    Instances,
    InstanceSearch,
    Unrecognized(String),
}

impl ResourceKind {
    /// Every routable kind, in the order endpoints are registered
    pub const ROUTABLE: [ResourceKind; 5] = [
        ResourceKind::Images,
        ResourceKind::InstanceTypes,
        ResourceKind::Regions,
        ResourceKind::Instances,
        ResourceKind::InstanceSearch,
    ];

    pub fn parse(token: &str) -> Self {
        match token {
            REGIONS => Self::Regions,
            IMAGES => Self::Images,
            INSTANCE_TYPES => Self::InstanceTypes,
            INSTANCES => Self::Instances,
            INSTANCE_SEARCH => Self::InstanceSearch,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Regions => REGIONS,
            Self::Images => IMAGES,
            Self::InstanceTypes => INSTANCE_TYPES,
            Self::Instances => INSTANCES,
            Self::InstanceSearch => INSTANCE_SEARCH,
            Self::Unrecognized(token) => token,
        }
    }

    /// Only instance search honours the keyword
    pub fn is_searchable(&self) -> bool {
        matches!(self, Self::InstanceSearch)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
