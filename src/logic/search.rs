use crate::model::{Instance, ResourceKind};

/// Whether the keyword filter runs for this request
pub fn search_applies(kind: &ResourceKind, keyword: &str) -> bool {
    kind.is_searchable() && !keyword.is_empty()
}

/// Instances whose name contains `keyword`, case-sensitively, in input order
pub fn filter_by_name<'a>(instances: &'a [Instance], keyword: &str) -> Vec<&'a Instance> {
    instances
        .iter()
        .filter(|instance| instance.name.contains(keyword))
        .collect()
}
