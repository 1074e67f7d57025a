use crate::shared::api;
use crate::shared::download::download_url;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::projections::p900_ad_library::dto::{AdFolder, AdImage};
use leptos::prelude::*;
use serde::Serialize;

/// Which level of the library is on screen.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LibraryView {
    Folders,
    Gallery,
}

#[component]
pub fn AdLibraryPage() -> impl IntoView {
    let (view_mode, set_view_mode) = signal(LibraryView::Folders);
    let (folders, set_folders) = signal::<Vec<AdFolder>>(Vec::new());
    let (images, set_images) = signal::<Vec<AdImage>>(Vec::new());
    let (current_folder, set_current_folder) = signal::<Option<AdFolder>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let toasts = ToastService::expect();

    let load_folders = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_folders().await {
                Ok(v) => {
                    set_folders.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let open_folder = move |folder: AdFolder| {
        let path = folder.path.clone();
        set_current_folder.set(Some(folder));
        set_view_mode.set(LibraryView::Gallery);
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_images(&path).await {
                Ok(v) => {
                    set_images.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let back_to_folders = move || {
        set_view_mode.set(LibraryView::Folders);
        set_current_folder.set(None);
        set_images.set(Vec::new());
    };

    let download = move |image: AdImage| {
        wasm_bindgen_futures::spawn_local(async move {
            let filename = image.download_name();
            match download_url(&image.secure_url, &filename).await {
                Ok(()) => toasts.success(format!("Downloaded {}", filename)),
                Err(e) => toasts.error(format!("Download failed: {}", e)),
            }
        });
    };

    load_folders();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || match current_folder.get() {
                            Some(folder) => format!("Ad Library / {}", folder.display_name()),
                            None => "Ad Library".to_string(),
                        }}
                    </h1>
                </div>
                <div class="header__actions">
                    <Show when=move || view_mode.get() == LibraryView::Gallery>
                        <button
                            class="button button--secondary"
                            on:click=move |_| back_to_folders()
                        >
                            {icon("back")}
                            {"All folders"}
                        </button>
                    </Show>
                    <button class="button button--secondary" on:click=move |_| load_folders()>
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

            {move || loading.get().then(|| view! { <div class="loading">"Loading…"</div> })}

            {move || match view_mode.get() {
                LibraryView::Folders => view! {
                    <div class="ad-library__folders">
                        {move || {
                            let list = folders.get();
                            if list.is_empty() && !loading.get() {
                                view! {
                                    <div class="empty-state">{"No ad folders yet"}</div>
                                }
                                .into_any()
                            } else {
                                list.into_iter()
                                    .map(|folder| {
                                        let label = folder.display_name().to_string();
                                        view! {
                                            <button
                                                class="ad-library__folder"
                                                on:click=move |_| open_folder(folder.clone())
                                            >
                                                {icon("folder")}
                                                <span class="ad-library__folder-name">
                                                    {label}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                }
                .into_any(),
                LibraryView::Gallery => view! {
                    <div class="ad-library__gallery">
                        {move || {
                            let list = images.get();
                            if list.is_empty() && !loading.get() {
                                view! {
                                    <div class="empty-state">{"This folder is empty"}</div>
                                }
                                .into_any()
                            } else {
                                list.into_iter()
                                    .map(|image| {
                                        let src = image.secure_url.clone();
                                        let alt = image.public_id.clone();
                                        view! {
                                            <div class="ad-library__image">
                                                <img src=src alt=alt />
                                                <button
                                                    class="btn btn-icon ad-library__download"
                                                    on:click=move |_| download(image.clone())
                                                >
                                                    {icon("download")}
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[derive(Serialize)]
struct FoldersQuery<'a> {
    parent: &'a str,
}

#[derive(Serialize)]
struct ImagesQuery<'a> {
    folder: &'a str,
}

async fn fetch_folders() -> Result<Vec<AdFolder>, String> {
    let query = serde_qs::to_string(&FoldersQuery { parent: "ads" }).map_err(|e| e.to_string())?;
    // The social-media endpoints return bare arrays, no envelope.
    api::get_json(&format!("/social-media/folders?{}", query)).await
}

async fn fetch_images(folder: &str) -> Result<Vec<AdImage>, String> {
    let query = serde_qs::to_string(&ImagesQuery { folder }).map_err(|e| e.to_string())?;
    api::get_json(&format!("/social-media/images?{}", query)).await
}
