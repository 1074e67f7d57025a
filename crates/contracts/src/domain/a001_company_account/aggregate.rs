use serde::{Deserialize, Serialize};

use crate::domain::a002_industry::aggregate::IndustryRef;
use crate::domain::common::AggregateRoot;

// ============================================================================
// Enums
// ============================================================================

/// Account kinds known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    User,
    Company,
}

impl AccountType {
    /// Wire code as the backend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::User => "USER",
            AccountType::Company => "COMPANY",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::User => "User",
            AccountType::Company => "Company",
        }
    }

    pub fn all() -> Vec<AccountType> {
        vec![AccountType::User, AccountType::Company]
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Company
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Social profile URLs. The backend stores these as a single-element array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMediaLinks {
    pub facebook: String,
    pub instagram: String,
    pub tiktok: String,
    pub website: String,
}

/// One service a company offers. Price is free-form text ("20€/h" etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub name: String,
    pub price: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Company account as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    /// Hashed on the backend; never shown or echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub description: String,
    /// Industry relations, either bare ids or populated documents.
    #[serde(default)]
    pub industries: Vec<IndustryRef>,
    /// Serialized weekly schedule, see [`super::working_hours`].
    #[serde(default)]
    pub working_hours: Vec<String>,
    #[serde(default)]
    pub nr_of_workers: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub social_media_links: Vec<SocialMediaLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Account {
    /// Industry ids regardless of whether the backend populated the relation.
    pub fn industry_ids(&self) -> Vec<String> {
        self.industries
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect()
    }

    /// Convert to the edit-form DTO. The password is left empty, meaning
    /// "unchanged" unless the operator types a new one.
    pub fn to_dto(&self) -> AccountDto {
        AccountDto {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            password: String::new(),
            phone: self.phone.clone(),
            description: self.description.clone(),
            industries: self.industry_ids(),
            working_hours: self.working_hours.clone(),
            nr_of_workers: self.nr_of_workers,
            images: self.images.clone(),
            thumbnail: self.thumbnail.clone(),
            services: self.services.clone(),
            account_type: self.account_type,
            social_media_links: if self.social_media_links.is_empty() {
                vec![SocialMediaLinks::default()]
            } else {
                self.social_media_links.clone()
            },
            map_url: self.map_url.clone(),
        }
    }
}

impl AggregateRoot for Account {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "account"
    }

    fn element_name() -> &'static str {
        "Company"
    }

    fn list_name() -> &'static str {
        "Companies"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a company account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub email: String,
    /// Empty on edit means "keep the stored password"; omitted from the
    /// payload so the backend does not re-hash an empty string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub phone: String,
    pub description: String,
    /// Selected industry ids.
    pub industries: Vec<String>,
    pub working_hours: Vec<String>,
    pub nr_of_workers: u32,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub services: Vec<ServiceItem>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub social_media_links: Vec<SocialMediaLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl Default for AccountDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            description: String::new(),
            industries: Vec::new(),
            working_hours: Vec::new(),
            nr_of_workers: 0,
            images: Vec::new(),
            thumbnail: String::new(),
            services: Vec::new(),
            account_type: AccountType::Company,
            // The form always renders one row of social inputs.
            social_media_links: vec![SocialMediaLinks::default()],
            map_url: None,
        }
    }
}

impl AccountDto {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Form-level validation, mirroring what the backend enforces.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.len() < 5 || name.len() > 255 {
            return Err("Name must be between 5 and 255 characters".into());
        }
        if self.address.trim().is_empty() {
            return Err("Address is required".into());
        }
        let email = self.email.trim();
        if !email.contains('@') || !email.contains('.') {
            return Err("Enter a valid email address".into());
        }
        if self.is_new() {
            if self.password.len() < 6 {
                return Err("Password must be at least 6 characters".into());
            }
        } else if !self.password.is_empty() && self.password.len() < 6 {
            return Err("New password must be at least 6 characters".into());
        }
        if self.phone.trim().len() < 7 {
            return Err("Phone number is too short".into());
        }
        let description = self.description.trim();
        if description.len() < 20 || description.len() > 1000 {
            return Err("Description must be between 20 and 1000 characters".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> AccountDto {
        AccountDto {
            name: "Mjeshtri Construction".into(),
            address: "Rr. e Dibrës 12, Tirana".into(),
            email: "office@mjeshtri.al".into(),
            password: "secret1".into(),
            phone: "+355691234567".into(),
            description: "Foundations, masonry and facade work for residential buildings.".into(),
            ..AccountDto::default()
        }
    }

    #[test]
    fn valid_dto_passes() {
        assert_eq!(valid_dto().validate(), Ok(()));
    }

    #[test]
    fn short_name_is_rejected() {
        let mut dto = valid_dto();
        dto.name = "Abc".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn password_required_only_for_new_accounts() {
        let mut dto = valid_dto();
        dto.password = String::new();
        assert!(dto.validate().is_err());

        dto.id = Some("66f2a1b3c4d5e6f708091011".into());
        assert_eq!(dto.validate(), Ok(()));

        // Typing a too-short replacement is still an error.
        dto.password = "abc".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut dto = valid_dto();
        dto.description = "Too short".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_password_is_omitted_from_payload() {
        let mut dto = valid_dto();
        dto.id = Some("66f2a1b3c4d5e6f708091011".into());
        dto.password = String::new();

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["type"], "COMPANY");
    }

    #[test]
    fn account_type_wire_codes() {
        assert_eq!(
            serde_json::to_value(AccountType::Company).unwrap(),
            serde_json::json!("COMPANY")
        );
        let parsed: AccountType = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(parsed, AccountType::User);
    }

    #[test]
    fn to_dto_flattens_populated_industries() {
        let account: Account = serde_json::from_value(serde_json::json!({
            "_id": "66f2a1b3c4d5e6f708091011",
            "name": "Mjeshtri Construction",
            "email": "office@mjeshtri.al",
            "industries": [
                "64aa00000000000000000001",
                { "_id": "64aa00000000000000000002", "name": "Facades", "icon": "building" }
            ],
            "working_hours": ["Monday: 09:00 - 17:00"],
            "type": "COMPANY"
        }))
        .unwrap();

        let dto = account.to_dto();
        assert_eq!(
            dto.industries,
            vec![
                "64aa00000000000000000001".to_string(),
                "64aa00000000000000000002".to_string(),
            ]
        );
        assert!(dto.password.is_empty());
        assert_eq!(dto.working_hours, vec!["Monday: 09:00 - 17:00".to_string()]);
        // One editable row even when the backend sent none.
        assert_eq!(dto.social_media_links.len(), 1);
    }
}
