use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compute instance as listed in `instances.json`.
///
/// Fields absent from the data file fall back to their zero value, so partially
/// filled records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub name: String,
    pub id: String,
    pub power_state: String,
    pub owner: String,
    pub region: String,
    pub instance_type: String,
    #[serde(rename = "createdOn")]
    pub created_on: String,
    pub description: String,
    /// Free-form tags, never interpreted by the query pipeline
    pub tags: Value,
}

#[cfg(test)]
impl Instance {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}
