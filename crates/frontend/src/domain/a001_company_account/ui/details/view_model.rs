use std::rc::Rc;

use contracts::domain::a001_company_account::aggregate::{AccountDto, ServiceItem};
use contracts::domain::a002_industry::aggregate::Industry;
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::toast::ToastService;

use super::model;

/// One editable service row. The key is local-only, used for list rendering.
#[derive(Clone, Debug)]
pub struct ServiceRow {
    pub key: Uuid,
    pub name: String,
    pub price: String,
}

impl ServiceRow {
    fn empty() -> Self {
        Self {
            key: Uuid::new_v4(),
            name: String::new(),
            price: String::new(),
        }
    }

    fn from_item(item: &ServiceItem) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: item.name.clone(),
            price: item.price.clone(),
        }
    }
}

/// Reactive state behind the company details form.
#[derive(Clone, Copy)]
pub struct CompanyDetailsViewModel {
    pub form: RwSignal<AccountDto>,
    pub services: RwSignal<Vec<ServiceRow>>,
    pub industries: RwSignal<Vec<Industry>>,
    pub industry_search: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CompanyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AccountDto::default()),
            services: RwSignal::new(Vec::new()),
            industries: RwSignal::new(Vec::new()),
            industry_search: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Load the industry list and, for edits, the account itself.
    pub fn load(self, id: Option<String>) {
        self.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_industries().await {
                Ok(list) => self.industries.set(list),
                Err(e) => log::warn!("failed to load industries: {}", e),
            }

            if let Some(id) = id {
                match model::fetch_company(&id).await {
                    Ok(account) => {
                        let dto = account.to_dto();
                        self.services.set(
                            dto.services.iter().map(ServiceRow::from_item).collect(),
                        );
                        self.form.set(dto);
                    }
                    Err(e) => self.error.set(Some(e)),
                }
            }
            self.loading.set(false);
        });
    }

    pub fn toggle_industry(self, id: String) {
        self.form.update(|f| {
            if let Some(pos) = f.industries.iter().position(|i| *i == id) {
                f.industries.remove(pos);
            } else {
                f.industries.push(id);
            }
        });
    }

    pub fn add_service(self) {
        self.services.update(|rows| rows.push(ServiceRow::empty()));
    }

    pub fn remove_service(self, key: Uuid) {
        self.services.update(|rows| rows.retain(|r| r.key != key));
    }

    pub fn set_service_name(self, key: Uuid, name: String) {
        self.services.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.key == key) {
                row.name = name;
            }
        });
    }

    pub fn set_service_price(self, key: Uuid, price: String) {
        self.services.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.key == key) {
                row.price = price;
            }
        });
    }

    /// Upload the chosen logo right away and store the returned URL.
    pub fn upload_logo(self, file: web_sys::File, toasts: ToastService) {
        wasm_bindgen_futures::spawn_local(async move {
            match model::upload_file(file, "thumbnails").await {
                Ok(uploaded) => {
                    self.form.update(|f| f.thumbnail = uploaded.url);
                    toasts.success("Logo uploaded");
                }
                Err(e) => toasts.error(format!("Logo upload failed: {}", e)),
            }
        });
    }

    /// Upload gallery images and append their URLs to the form.
    pub fn upload_images(self, files: Vec<web_sys::File>, toasts: ToastService) {
        if files.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match model::upload_files(files, "images").await {
                Ok(uploaded) => {
                    let count = uploaded.len();
                    self.form
                        .update(|f| f.images.extend(uploaded.into_iter().map(|u| u.url)));
                    toasts.success(format!("Uploaded {} images", count));
                }
                Err(e) => toasts.error(format!("Image upload failed: {}", e)),
            }
        });
    }

    pub fn remove_image(self, url: String) {
        self.form.update(|f| f.images.retain(|i| *i != url));
    }

    /// Validate and persist, then hand control back to the caller.
    pub fn save_command(self, toasts: ToastService, on_saved: Rc<dyn Fn(())>) {
        let mut dto = self.form.get_untracked();
        dto.services = self
            .services
            .get_untracked()
            .iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(|r| ServiceItem {
                name: r.name.trim().to_string(),
                price: r.price.trim().to_string(),
            })
            .collect();

        if let Err(e) = dto.validate() {
            self.error.set(Some(e.clone()));
            toasts.error(e);
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(json) = serde_json::to_string_pretty(&dto) {
                log::debug!("saving company: {}", json);
            }

            let result = match dto.id.as_deref() {
                Some(id) => model::update_company(id, &dto).await,
                None => model::create_company(&dto).await,
            };

            self.saving.set(false);
            match result {
                Ok(saved) => {
                    toasts.success(format!("Saved {}", saved.name));
                    on_saved(());
                }
                Err(e) => {
                    self.error.set(Some(e.clone()));
                    toasts.error(e);
                }
            }
        });
    }
}
