use crate::domain::a001_company_account::ui::details::CompanyDetails;
use crate::domain::a001_company_account::ui::list::CompanyList;
use crate::domain::a002_industry::ui::list::IndustriesPage;
use crate::layout::Shell;
use crate::projections::p900_ad_library::ui::AdLibraryPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::path;
use std::rc::Rc;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=CompanyList />
                    <Route path=path!("/companies/new") view=CompanyCreateRoute />
                    <Route path=path!("/companies/:id") view=CompanyEditRoute />
                    <Route path=path!("/industries") view=IndustriesPage />
                    <Route path=path!("/ads") view=AdLibraryPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn CompanyCreateRoute() -> impl IntoView {
    let navigate = use_navigate();
    let on_done: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/", Default::default()));

    view! { <CompanyDetails id=None on_saved=on_done.clone() on_cancel=on_done /> }
}

#[component]
fn CompanyEditRoute() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));
    let navigate = use_navigate();
    let on_done: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/", Default::default()));

    view! { <CompanyDetails id=id on_saved=on_done.clone() on_cancel=on_done /> }
}
