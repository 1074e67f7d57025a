//! Sidebar navigation.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a001_company_account::aggregate::Account;
use contracts::domain::a002_industry::aggregate::Industry;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            path: "/",
            label: Account::list_name(),
            icon: "companies",
        },
        MenuItem {
            path: "/industries",
            label: Industry::list_name(),
            icon: "industries",
        },
        MenuItem {
            path: "/ads",
            label: "Ad Library",
            icon: "images",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="sidebar">
                <ul class="sidebar__menu">
                    {menu_items()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="sidebar__item">
                                    <A href=item.path attr:class="sidebar__link">
                                        {icon(item.icon)}
                                        <span class="sidebar__label">{item.label}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
