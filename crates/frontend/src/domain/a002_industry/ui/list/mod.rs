use crate::shared::api;
use crate::shared::date_utils::format_optional_timestamp;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a002_industry::aggregate::{Industry, IndustryDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::ApiData;
use leptos::prelude::*;

#[component]
pub fn IndustriesPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Industry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let toasts = ToastService::expect();

    // Create form state
    let name = RwSignal::new(String::new());
    let icon_name = RwSignal::new(String::new());
    let parent = RwSignal::new(String::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_industries().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let create = move || {
        let dto = IndustryDto {
            name: name.get_untracked().trim().to_string(),
            icon: icon_name.get_untracked().trim().to_string(),
            parent_industry: parent.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            toasts.error(e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match create_industry(&dto).await {
                Ok(created) => {
                    toasts.success(format!("Created {}", created.name));
                    name.set(String::new());
                    icon_name.set(String::new());
                    parent.set(String::new());
                    match fetch_industries().await {
                        Ok(v) => set_items.set(v),
                        Err(e) => set_error.set(Some(e)),
                    }
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let delete = move |id: String, industry_name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete industry \"{}\"?", industry_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_industry(&id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", industry_name));
                    match fetch_industries().await {
                        Ok(v) => set_items.set(v),
                        Err(e) => set_error.set(Some(e)),
                    }
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Industry::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card industry-form">
                <h3 class="card__title">{"New industry"}</h3>
                <div class="industry-form__fields">
                    <div class="form-group">
                        <label for="industry_name">{"Name"}</label>
                        <input
                            type="text"
                            id="industry_name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            placeholder="Construction"
                        />
                    </div>
                    <div class="form-group">
                        <label for="industry_icon">{"Icon"}</label>
                        <input
                            type="text"
                            id="industry_icon"
                            prop:value=move || icon_name.get()
                            on:input=move |ev| icon_name.set(event_target_value(&ev))
                            placeholder="hammer"
                        />
                    </div>
                    <div class="form-group">
                        <label for="industry_parent">{"Parent industry"}</label>
                        <select
                            id="industry_parent"
                            on:change=move |ev| parent.set(event_target_value(&ev))
                        >
                            {move || {
                                let current = parent.get();
                                let mut options = vec![view! {
                                    <option value=String::new() selected=current.is_empty()>
                                        {"None (top level)".to_string()}
                                    </option>
                                }];
                                options.extend(items.get().into_iter().filter_map(|i| {
                                    let id = i.id?;
                                    let selected = id == current;
                                    Some(view! {
                                        <option value=id selected=selected>{i.name}</option>
                                    })
                                }));
                                options.into_iter().collect_view()
                            }}
                        </select>
                    </div>
                    <button class="button button--primary" on:click=move |_| create()>
                        {icon("plus")}
                        {"Create"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Icon"}</th>
                            <th class="table__header-cell">{"Parent"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                            <th class="table__header-cell">{""}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let all = items.get();
                            all.clone()
                                .into_iter()
                                .map(|industry| {
                                    let parent_label = industry.parent_label(&all);
                                    let created = format_optional_timestamp(&industry.created_at);
                                    let id = industry.id.clone().unwrap_or_default();
                                    let delete_name = industry.name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{industry.name}</td>
                                            <td class="table__cell">{industry.icon}</td>
                                            <td class="table__cell">{parent_label}</td>
                                            <td class="table__cell">{created}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="btn btn-icon"
                                                    on:click=move |_| {
                                                        delete(id.clone(), delete_name.clone())
                                                    }
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_industries() -> Result<Vec<Industry>, String> {
    let resp: ApiData<Vec<Industry>> =
        api::get_json(&format!("/{}/", Industry::collection_name())).await?;
    Ok(resp.data)
}

async fn create_industry(dto: &IndustryDto) -> Result<Industry, String> {
    let resp: ApiData<Industry> = api::post_json(
        &format!("/{}/create", Industry::collection_name()),
        &ApiData::new(dto),
    )
    .await?;
    Ok(resp.data)
}

async fn delete_industry(id: &str) -> Result<(), String> {
    api::delete(&format!("/{}/{}", Industry::collection_name(), id)).await
}
