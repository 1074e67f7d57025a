use crate::shared::api;
use crate::shared::date_utils::format_optional_timestamp;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a001_company_account::aggregate::{Account, AccountType};
use contracts::domain::common::AggregateRoot;
use contracts::shared::ApiData;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct CompanyRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub account_type: &'static str,
    pub nr_of_workers: u32,
    pub industries: usize,
    pub created_at: String,
}

impl From<Account> for CompanyRow {
    fn from(a: Account) -> Self {
        Self {
            id: a.id.clone().unwrap_or_default(),
            name: a.name,
            email: a.email,
            phone: a.phone,
            account_type: a.account_type.display_name(),
            nr_of_workers: a.nr_of_workers,
            industries: a.industries.len(),
            created_at: format_optional_timestamp(&a.created_at),
        }
    }
}

#[component]
pub fn CompanyList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CompanyRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let toasts = ToastService::expect();
    let navigate = use_navigate();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_companies().await {
                Ok(v) => {
                    let rows: Vec<CompanyRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        // Simple confirm dialog via browser
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete {} selected companies?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let mut failed = 0usize;
            for id in &ids {
                if delete_company(id).await.is_err() {
                    failed += 1;
                }
            }
            if failed == 0 {
                toasts.success(format!("Deleted {} companies", ids.len()));
            } else {
                toasts.error(format!("Failed to delete {} of {} companies", failed, ids.len()));
            }
            set_selected.set(HashSet::new());
            match fetch_companies().await {
                Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    let navigate_new = navigate.clone();

    view! {
        <div class="page">
            // Page header with title and action buttons
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Account::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate_new("/companies/new", Default::default())
                    >
                        {icon("plus")}
                        {"New company"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("delete")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        if checked {
                                            let all: HashSet<String> = items
                                                .get()
                                                .iter()
                                                .map(|item| item.id.clone())
                                                .collect();
                                            set_selected.set(all);
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Workers"}</th>
                            <th class="table__header-cell">{"Industries"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let navigate = navigate.clone();
                            items.get().into_iter().map(|row| {
                                let id = row.id.clone();
                                let id_for_click = id.clone();
                                let id_for_checkbox = id.clone();
                                let id_for_toggle = id.clone();
                                let navigate = navigate.clone();
                                let is_selected = selected.get().contains(&id);
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=is_selected
                                        on:click=move |_| {
                                            navigate(
                                                &format!("/companies/{}", id_for_click),
                                                Default::default(),
                                            )
                                        }
                                    >
                                        <td
                                            class="table__cell table__cell--checkbox"
                                            on:click=|e| e.stop_propagation()
                                        >
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=selected.get().contains(&id_for_checkbox)
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    toggle_select(id_for_toggle.clone(), checked);
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.email}</td>
                                        <td class="table__cell">{row.phone}</td>
                                        <td class="table__cell">{row.account_type}</td>
                                        <td class="table__cell">{row.nr_of_workers}</td>
                                        <td class="table__cell">{row.industries}</td>
                                        <td class="table__cell">{row.created_at}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Serialize)]
struct AccountsQuery {
    #[serde(rename = "type")]
    account_type: AccountType,
}

async fn fetch_companies() -> Result<Vec<Account>, String> {
    let query = serde_qs::to_string(&AccountsQuery {
        account_type: AccountType::Company,
    })
    .map_err(|e| e.to_string())?;
    let resp: ApiData<Vec<Account>> = api::get_json(&format!(
        "/{}/accounts?{}",
        Account::collection_name(),
        query
    ))
    .await?;
    Ok(resp.data)
}

async fn delete_company(id: &str) -> Result<(), String> {
    api::delete(&format!("/{}/delete/{}", Account::collection_name(), id)).await
}
