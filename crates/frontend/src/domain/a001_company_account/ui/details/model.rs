use crate::shared::api;
use contracts::domain::a001_company_account::aggregate::{Account, AccountDto};
use contracts::domain::a002_industry::aggregate::Industry;
use contracts::domain::common::AggregateRoot;
use contracts::shared::{ApiData, UploadedFile};

pub async fn fetch_company(id: &str) -> Result<Account, String> {
    // Single-company endpoint returns the document without an envelope.
    api::get_json(&format!("/{}/company/{}", Account::collection_name(), id)).await
}

pub async fn fetch_industries() -> Result<Vec<Industry>, String> {
    let resp: ApiData<Vec<Industry>> =
        api::get_json(&format!("/{}/", Industry::collection_name())).await?;
    Ok(resp.data)
}

pub async fn create_company(dto: &AccountDto) -> Result<Account, String> {
    let resp: ApiData<Account> = api::post_json(
        &format!("/{}/create-company-account", Account::collection_name()),
        &ApiData::new(dto),
    )
    .await?;
    Ok(resp.data)
}

pub async fn update_company(id: &str, dto: &AccountDto) -> Result<Account, String> {
    let resp: ApiData<Account> = api::patch_json(
        &format!("/{}/edit/{}", Account::collection_name(), id),
        dto,
    )
    .await?;
    Ok(resp.data)
}

pub async fn upload_file(file: web_sys::File, folder: &str) -> Result<UploadedFile, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "failed to append file".to_string())?;
    form.append_with_str("folder", folder)
        .map_err(|_| "failed to append folder".to_string())?;
    let resp: ApiData<UploadedFile> =
        api::post_form(&format!("/{}/upload", Account::collection_name()), form).await?;
    Ok(resp.data)
}

pub async fn upload_files(
    files: Vec<web_sys::File>,
    folder: &str,
) -> Result<Vec<UploadedFile>, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_string())?;
    for file in &files {
        form.append_with_blob("files", file)
            .map_err(|_| "failed to append file".to_string())?;
    }
    form.append_with_str("folder", folder)
        .map_err(|_| "failed to append folder".to_string())?;
    let resp: ApiData<Vec<UploadedFile>> = api::post_form(
        &format!("/{}/upload-multiple", Account::collection_name()),
        form,
    )
    .await?;
    Ok(resp.data)
}
