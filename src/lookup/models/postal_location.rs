//! Post office record as returned by the postal directory.
//!
//! Every string field tolerates `null` or absence in the upstream JSON and
//! decodes to an empty string, so one sloppy record never sinks a whole
//! lookup.

use serde::{Deserialize, Deserializer, Serialize};

/// Classification of a post office derived from its branch type text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Head,
    Sub,
    Branch,
    Other,
}

/// A single post office and its administrative hierarchy
/// (circle ⊇ region ⊇ division ⊇ district ⊇ block/state)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PostalLocation {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub branch_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub delivery_status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub circle: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub district: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub division: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub block: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pincode: String,
}

impl PostalLocation {
    pub fn branch_kind(&self) -> BranchKind {
        match self.branch_type.trim().to_lowercase().as_str() {
            "head post office" => BranchKind::Head,
            "sub post office" => BranchKind::Sub,
            "branch post office" => BranchKind::Branch,
            _ => BranchKind::Other,
        }
    }

    /// Whether the office is serviced by delivery
    pub fn is_delivery(&self) -> bool {
        self.delivery_status == "Delivery"
    }

    /// Block name for display; the directory leaves it blank for some offices
    pub fn block_or_na(&self) -> &str {
        if self.block.trim().is_empty() {
            "N/A"
        } else {
            &self.block
        }
    }
}

/// Decode a nullable or absent string as empty
pub(super) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postal_location_should_decode_upstream_field_names() {
        let json = serde_json::json!({
            "Name": "Connaught Place",
            "Description": null,
            "BranchType": "Sub Post Office",
            "DeliveryStatus": "Non-Delivery",
            "Circle": "Delhi",
            "District": "Central Delhi",
            "Division": "New Delhi Central",
            "Region": "Delhi",
            "Block": "New Delhi",
            "State": "Delhi",
            "Country": "India",
            "Pincode": "110001"
        });

        let location: PostalLocation = serde_json::from_value(json).unwrap();
        assert_eq!(location.name, "Connaught Place");
        assert_eq!(location.description, None);
        assert_eq!(location.district, "Central Delhi");
        assert_eq!(location.pincode, "110001");
        assert_eq!(location.branch_kind(), BranchKind::Sub);
        assert!(!location.is_delivery());
    }

    #[test]
    fn postal_location_should_treat_null_and_missing_strings_as_empty() {
        let json = serde_json::json!({
            "Name": "Baroda House",
            "Block": null
        });

        let location: PostalLocation = serde_json::from_value(json).unwrap();
        assert_eq!(location.name, "Baroda House");
        assert_eq!(location.block, "");
        assert_eq!(location.state, "");
        assert_eq!(location.block_or_na(), "N/A");
    }

    #[test]
    fn branch_kind_should_ignore_case() {
        let mut location = PostalLocation {
            branch_type: "HEAD POST OFFICE".to_string(),
            ..Default::default()
        };
        assert_eq!(location.branch_kind(), BranchKind::Head);

        location.branch_type = "Branch Post Office".to_string();
        assert_eq!(location.branch_kind(), BranchKind::Branch);

        location.branch_type = "Mobile Unit".to_string();
        assert_eq!(location.branch_kind(), BranchKind::Other);
    }

    #[test]
    fn is_delivery_should_match_exact_status() {
        let location = PostalLocation {
            delivery_status: "Delivery".to_string(),
            ..Default::default()
        };
        assert!(location.is_delivery());
    }
}
