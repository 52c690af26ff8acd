use crate::logic::envelope::assemble;
use crate::logic::search::{filter_by_name, search_applies};
use crate::model::{MasterDataset, QueryParams, Record, ResourceKind, ResultEnvelope};

/// Run one query against the dataset: dispatch, optional name search, paging.
pub fn execute_query<'a>(
    dataset: &'a MasterDataset,
    kind: &ResourceKind,
    params: &QueryParams,
) -> ResultEnvelope<'a> {
    let records: Vec<Record<'a>> = if search_applies(kind, &params.keyword) {
        filter_by_name(&dataset.instances, &params.keyword)
            .into_iter()
            .map(Record::from)
            .collect()
    } else {
        dataset.records(kind)
    };

    assemble(kind, params, &records)
}
