//! Read-only DTOs for the social-media ad library.
//!
//! The backend proxies a listing of the storage service's `ads/` tree: one
//! folder per company, images inside. Uploads and storage configuration live
//! on the backend; this projection only browses.

use serde::{Deserialize, Serialize};

/// One company folder under `ads/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdFolder {
    /// Folder name, `<company>-<account id>`.
    pub name: String,
    /// Full storage path, used to list the folder's images.
    pub path: String,
}

impl AdFolder {
    /// Company part of the folder name, without the account-id suffix.
    pub fn display_name(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// One ad asset inside a company folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdImage {
    pub public_id: String,
    pub secure_url: String,
    pub format: String,
}

impl AdImage {
    /// Suggested filename for downloads.
    pub fn download_name(&self) -> String {
        // public_id may contain the folder path; keep only the last segment.
        let base = self.public_id.rsplit('/').next().unwrap_or(&self.public_id);
        format!("{}.{}", base, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_display_name_strips_the_id_suffix() {
        let folder = AdFolder {
            name: "Mjeshtri-66f2a1b3c4d5e6f708091011".into(),
            path: "ads/Mjeshtri-66f2a1b3c4d5e6f708091011".into(),
        };
        assert_eq!(folder.display_name(), "Mjeshtri");

        let plain = AdFolder {
            name: "Mjeshtri".into(),
            path: "ads/Mjeshtri".into(),
        };
        assert_eq!(plain.display_name(), "Mjeshtri");
    }

    #[test]
    fn download_name_uses_the_last_path_segment() {
        let img = AdImage {
            public_id: "ads/Mjeshtri-66f2/summer_campaign".into(),
            secure_url: "https://res.example.com/ads/summer_campaign.png".into(),
            format: "png".into(),
        };
        assert_eq!(img.download_name(), "summer_campaign.png");
    }
}
