use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Industry taxonomy node. `parent_industry` is absent for top-level
/// categories (e.g. "Construction") and set for their children
/// (e.g. "Facades").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_industry: Option<IndustryRef>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Industry {
    /// Label for the parent column. Resolves a bare id against `all` when the
    /// backend did not populate the relation; top-level industries get "-".
    pub fn parent_label(&self, all: &[Industry]) -> String {
        let Some(parent) = &self.parent_industry else {
            return "-".to_string();
        };
        match parent {
            IndustryRef::Populated(p) => p.name.clone(),
            IndustryRef::Id(id) => all
                .iter()
                .find(|i| i.id.as_deref() == Some(id))
                .map(|i| i.name.clone())
                .unwrap_or_else(|| id.clone()),
        }
    }
}

impl AggregateRoot for Industry {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "industry"
    }

    fn element_name() -> &'static str {
        "Industry"
    }

    fn list_name() -> &'static str {
        "Industries"
    }
}

/// Industry relation as it appears on the wire: either the bare id or the
/// populated document, depending on whether the backend expanded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndustryRef {
    Id(String),
    Populated(Box<Industry>),
}

impl IndustryRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            IndustryRef::Id(id) => Some(id),
            IndustryRef::Populated(industry) => industry.id.as_deref(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create payload for an industry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryDto {
    pub name: String,
    pub icon: String,
    /// Parent industry id; empty for a top-level category.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_industry: String,
}

impl IndustryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 2 {
            return Err("Name is required".into());
        }
        if self.icon.trim().len() < 2 {
            return Err("Icon is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_ref_deserializes_from_id_or_document() {
        let bare: Industry = serde_json::from_value(serde_json::json!({
            "_id": "64aa00000000000000000002",
            "name": "Facades",
            "icon": "building",
            "parent_industry": "64aa00000000000000000001"
        }))
        .unwrap();
        assert_eq!(
            bare.parent_industry.as_ref().and_then(IndustryRef::id),
            Some("64aa00000000000000000001")
        );

        let populated: Industry = serde_json::from_value(serde_json::json!({
            "_id": "64aa00000000000000000002",
            "name": "Facades",
            "icon": "building",
            "parent_industry": {
                "_id": "64aa00000000000000000001",
                "name": "Construction",
                "icon": "hammer"
            }
        }))
        .unwrap();
        assert_eq!(populated.parent_label(&[]), "Construction");
    }

    #[test]
    fn parent_label_resolves_bare_ids_against_the_list() {
        let parent: Industry = serde_json::from_value(serde_json::json!({
            "_id": "64aa00000000000000000001",
            "name": "Construction",
            "icon": "hammer"
        }))
        .unwrap();
        let child: Industry = serde_json::from_value(serde_json::json!({
            "_id": "64aa00000000000000000002",
            "name": "Facades",
            "icon": "building",
            "parent_industry": "64aa00000000000000000001"
        }))
        .unwrap();

        let all = vec![parent.clone(), child.clone()];
        assert_eq!(child.parent_label(&all), "Construction");
        assert_eq!(parent.parent_label(&all), "-");
    }

    #[test]
    fn dto_omits_empty_parent() {
        let dto = IndustryDto {
            name: "Construction".into(),
            icon: "hammer".into(),
            parent_industry: String::new(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("parent_industry").is_none());
    }

    #[test]
    fn validation_requires_name_and_icon() {
        let mut dto = IndustryDto {
            name: "Construction".into(),
            icon: "hammer".into(),
            parent_industry: String::new(),
        };
        assert_eq!(dto.validate(), Ok(()));

        dto.icon = "x".into();
        assert!(dto.validate().is_err());
    }
}
