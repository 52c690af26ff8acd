use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: String,
    pub name: String,
    pub ownership: String,
    pub owner: String,
    pub description: String,
    pub registered: String,
    pub tags: Value,
}

/// Instance type catalogue entry.
///
/// The data file uses human-readable column headers as keys, and responses
/// echo them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceType {
    #[serde(rename = "Instance type")]
    pub name: String,
    #[serde(rename = "Instance Family")]
    pub instance_family: String,
    /// Either a number or a textual range depending on the family
    #[serde(rename = "Cores")]
    pub cores: Value,
    #[serde(rename = "vCPUs")]
    pub vcpus: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_type_column_names() {
        let json = json!({
            "Instance type": "m5.large",
            "Instance Family": "General purpose",
            "Cores": 1,
            "vCPUs": 2
        });

        let instance_type: InstanceType = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(instance_type.name, "m5.large");
        assert_eq!(instance_type.instance_family, "General purpose");
        assert_eq!(instance_type.cores, json!(1));
        assert_eq!(instance_type.vcpus, 2);
        assert_eq!(serde_json::to_value(&instance_type).unwrap(), json);
    }

    #[test]
    fn test_image_opaque_tags() {
        let image: Image = serde_json::from_value(json!({
            "id": "ami-1",
            "name": "ubuntu-18.04",
            "tags": {"os": "linux"}
        }))
        .unwrap();

        assert_eq!(image.tags["os"], "linux");
        assert_eq!(image.registered, "");
    }
}
