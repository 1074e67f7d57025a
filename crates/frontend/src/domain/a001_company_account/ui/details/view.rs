use std::rc::Rc;

use contracts::domain::a001_company_account::aggregate::AccountType;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

use super::view_model::CompanyDetailsViewModel;
use super::working_hours_editor::WorkingHoursEditor;

/// Pull the selected files out of a file input and clear it so picking the
/// same file twice still fires `change`.
fn take_files(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    let mut out = Vec::new();
    if let Some(files) = input.files() {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                out.push(file);
            }
        }
    }
    input.set_value("");
    out
}

#[component]
pub fn CompanyDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CompanyDetailsViewModel::new();
    let toasts = ToastService::expect();
    let is_edit = id.is_some();
    vm.load(id);

    view! {
        <div class="details-container company-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit company" } else { "New company" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || vm.loading.get().then(|| view! { <div class="loading">"Loading…"</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Company name (5-255 characters)"
                        maxlength="255"
                    />
                </div>

                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || vm.form.get().address
                        on:input=move |ev| {
                            vm.form.update(|f| f.address = event_target_value(&ev));
                        }
                        placeholder="Street, city"
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| {
                            vm.form.update(|f| f.email = event_target_value(&ev));
                        }
                        placeholder="office@example.com"
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || vm.form.get().password
                        on:input=move |ev| {
                            vm.form.update(|f| f.password = event_target_value(&ev));
                        }
                        placeholder=if is_edit {
                            "Leave empty to keep the current password"
                        } else {
                            "At least 6 characters"
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=move || vm.form.get().phone
                        on:input=move |ev| {
                            vm.form.update(|f| f.phone = event_target_value(&ev));
                        }
                        placeholder="+355 69 123 4567"
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="What the company does (20-1000 characters)"
                        rows="4"
                        maxlength="1000"
                    />
                    <span class="form-group__hint">
                        {move || format!("{}/1000", vm.form.get().description.len())}
                    </span>
                </div>

                <div class="form-group">
                    <label for="account_type">{"Account type"}</label>
                    <select
                        id="account_type"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(t) =
                                AccountType::all().into_iter().find(|t| t.as_str() == value)
                            {
                                vm.form.update(|f| f.account_type = t);
                            }
                        }
                    >
                        {move || {
                            let current = vm.form.get().account_type;
                            AccountType::all()
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <option value=t.as_str() selected=t == current>
                                            {t.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="nr_of_workers">{"Number of workers"}</label>
                    <input
                        type="number"
                        id="nr_of_workers"
                        min="0"
                        prop:value=move || vm.form.get().nr_of_workers.to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            vm.form.update(|f| f.nr_of_workers = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="map_url">{"Map URL"}</label>
                    <input
                        type="text"
                        id="map_url"
                        prop:value=move || vm.form.get().map_url.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.map_url = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Google Maps embed link (optional)"
                    />
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Logo"}</h4>
                    {move || {
                        let thumbnail = vm.form.get().thumbnail;
                        (!thumbnail.is_empty()).then(|| view! {
                            <img class="company-details__thumbnail" src=thumbnail alt="Logo" />
                        })
                    }}
                    <label class="button button--secondary">
                        {icon("upload")}
                        {"Upload logo"}
                        <input
                            type="file"
                            accept="image/*"
                            style="display: none"
                            on:change=move |ev| {
                                if let Some(file) = take_files(&ev).into_iter().next() {
                                    vm.upload_logo(file, toasts);
                                }
                            }
                        />
                    </label>
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Social media"}</h4>
                    <div class="form-group">
                        <label for="facebook">{"Facebook"}</label>
                        <input
                            type="text"
                            id="facebook"
                            prop:value=move || {
                                vm.form
                                    .get()
                                    .social_media_links
                                    .first()
                                    .map(|s| s.facebook.clone())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    if let Some(row) = f.social_media_links.first_mut() {
                                        row.facebook = value;
                                    }
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="instagram">{"Instagram"}</label>
                        <input
                            type="text"
                            id="instagram"
                            prop:value=move || {
                                vm.form
                                    .get()
                                    .social_media_links
                                    .first()
                                    .map(|s| s.instagram.clone())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    if let Some(row) = f.social_media_links.first_mut() {
                                        row.instagram = value;
                                    }
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="tiktok">{"TikTok"}</label>
                        <input
                            type="text"
                            id="tiktok"
                            prop:value=move || {
                                vm.form
                                    .get()
                                    .social_media_links
                                    .first()
                                    .map(|s| s.tiktok.clone())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    if let Some(row) = f.social_media_links.first_mut() {
                                        row.tiktok = value;
                                    }
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="website">{"Website"}</label>
                        <input
                            type="text"
                            id="website"
                            prop:value=move || {
                                vm.form
                                    .get()
                                    .social_media_links
                                    .first()
                                    .map(|s| s.website.clone())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    if let Some(row) = f.social_media_links.first_mut() {
                                        row.website = value;
                                    }
                                });
                            }
                        />
                    </div>
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Industries"}</h4>
                    <input
                        type="text"
                        class="form-section__search"
                        prop:value=move || vm.industry_search.get()
                        on:input=move |ev| vm.industry_search.set(event_target_value(&ev))
                        placeholder="Filter industries"
                    />
                    <div class="industry-picker">
                        {move || {
                            let needle = vm.industry_search.get().to_lowercase();
                            let selected = vm.form.get().industries;
                            vm.industries
                                .get()
                                .into_iter()
                                .filter(|i| {
                                    needle.is_empty() || i.name.to_lowercase().contains(&needle)
                                })
                                .filter_map(|industry| {
                                    let id = industry.id.clone()?;
                                    let checked = selected.contains(&id);
                                    Some((industry, id, checked))
                                })
                                .map(|(industry, id, checked)| {
                                    view! {
                                        <label class="industry-picker__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| vm.toggle_industry(id.clone())
                                            />
                                            <span>{industry.name}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <span class="form-group__hint">
                        {move || format!("{} selected", vm.form.get().industries.len())}
                    </span>
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Services"}</h4>
                    <For
                        each=move || vm.services.get()
                        key=|row| row.key
                        children=move |row| {
                            let key = row.key;
                            view! {
                                <div class="service-row">
                                    <input
                                        type="text"
                                        class="service-row__name"
                                        prop:value=row.name
                                        on:input=move |ev| {
                                            vm.set_service_name(key, event_target_value(&ev));
                                        }
                                        placeholder="Service"
                                    />
                                    <input
                                        type="text"
                                        class="service-row__price"
                                        prop:value=row.price
                                        on:input=move |ev| {
                                            vm.set_service_price(key, event_target_value(&ev));
                                        }
                                        placeholder="Price"
                                    />
                                    <button
                                        class="btn btn-icon"
                                        on:click=move |_| vm.remove_service(key)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button class="button button--secondary" on:click=move |_| vm.add_service()>
                        {icon("plus")}
                        {"Add service"}
                    </button>
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Working hours"}</h4>
                    <WorkingHoursEditor
                        hours=Signal::derive(move || vm.form.get().working_hours)
                        on_change=Callback::new(move |next: Vec<String>| {
                            vm.form.update(|f| f.working_hours = next);
                        })
                    />
                </div>

                <div class="form-section">
                    <h4 class="form-section__title">{"Images"}</h4>
                    <div class="image-gallery">
                        {move || {
                            vm.form
                                .get()
                                .images
                                .into_iter()
                                .map(|url| {
                                    let remove_url = url.clone();
                                    view! {
                                        <div class="image-gallery__item">
                                            <img src=url alt="Company image" />
                                            <button
                                                class="btn btn-icon image-gallery__remove"
                                                on:click=move |_| {
                                                    vm.remove_image(remove_url.clone())
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <label class="button button--secondary">
                        {icon("upload")}
                        {"Upload images"}
                        <input
                            type="file"
                            accept="image/*"
                            multiple
                            style="display: none"
                            on:change=move |ev| {
                                vm.upload_images(take_files(&ev), toasts);
                            }
                        />
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(toasts, on_saved.clone())
                    }
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || {
                        if vm.saving.get() {
                            "Saving…"
                        } else if is_edit {
                            "Save"
                        } else {
                            "Create"
                        }
                    }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
