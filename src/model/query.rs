use serde::{Deserialize, Deserializer, Serialize};

/// Optional JSON body accepted by every resource endpoint.
///
/// Values here take precedence over the URL query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keyword: String,
}

/// An explicit `null` keyword means the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Raw `offset`/`limit` query string values, unparsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryStringParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl QueryStringParams {
    /// Pick `offset` and `limit` out of decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        };

        Self {
            offset: first("offset"),
            limit: first("limit"),
        }
    }
}

/// Fully resolved paging and search parameters for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub offset: i64,
    pub limit: i64,
    pub keyword: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            offset: 1,
            limit: 10,
            keyword: String::new(),
        }
    }
}

impl QueryParams {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            keyword: String::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
}
