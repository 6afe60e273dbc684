//! Route handlers
//!
//! Implements the HTTP surface: login and logout, directory browsing,
//! mutations, direct file download, and zip download. Non-admin mutation
//! attempts and missing paths redirect silently to the home page; mutation
//! failures are logged and answered with a redirect back to the referring
//! page.

use axum::Form;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use log::{error, info, warn};
use serde::Deserialize;
use std::fs;

use crate::archive;
use crate::auth::Role;
use crate::error::{StorageError, VaultError};
use crate::server::core::AppState;
use crate::server::templates;
use crate::storage::validation::resolve_path;
use crate::storage::{self, Section, UploadedFile};

pub const SESSION_COOKIE: &str = "vault_session";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MutationForm {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Home page: section links plus the login form.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let role = current_role(&state, &jar).await;
    templates::render_index(role)
}

/// Credential check: a matching (role, password) pair opens a session and
/// sets the session cookie; anything else re-renders the login page with
/// no session issued.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, VaultError> {
    let role_raw = require_field(form.role, "role")?;
    let password = require_field(form.password, "password")?;

    let Ok(role) = role_raw.parse::<Role>() else {
        warn!("Login attempt with unknown role");
        return Ok(templates::render_index(None).into_response());
    };

    if !state.credentials.verify(role, &password) {
        warn!("Failed login attempt for role {}", role);
        return Ok(templates::render_index(None).into_response());
    }

    let token = state.sessions.login(role).await;
    info!("Session opened for role {}", role);

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();
    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

/// Clears the session and its cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.logout(cookie.value()).await;
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Redirect::to("/"))
}

/// Lists a section root.
pub async fn browse_root(
    State(state): State<AppState>,
    UrlPath(section): UrlPath<String>,
    jar: CookieJar,
) -> Response {
    browse_directory(&state, &section, String::new(), &jar).await
}

/// Lists a directory inside a section.
pub async fn browse(
    State(state): State<AppState>,
    UrlPath((section, path)): UrlPath<(String, String)>,
    jar: CookieJar,
) -> Response {
    browse_directory(&state, &section, path, &jar).await
}

async fn browse_directory(
    state: &AppState,
    section_raw: &str,
    path: String,
    jar: &CookieJar,
) -> Response {
    let Ok(section) = section_raw.parse::<Section>() else {
        return Redirect::to("/").into_response();
    };

    match storage::list_directory(&state.storage_root, section, &path) {
        Ok(entries) => {
            let role = current_role(state, jar).await;
            let parent = storage::parent_path(&path);
            templates::render_browse(role, section, &path, &parent, &entries).into_response()
        }
        Err(StorageError::NotFound(_)) => Redirect::to("/").into_response(),
        Err(e @ StorageError::PathTraversal(_)) => VaultError::from(e).into_response(),
        Err(e) => {
            error!("Failed to list {}/{}: {}", section, path, e);
            Redirect::to("/").into_response()
        }
    }
}

/// Creates a directory. Admin only.
pub async fn create_folder(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<MutationForm>,
) -> Result<Response, VaultError> {
    if !is_admin(&state, &jar).await {
        return Ok(Redirect::to("/").into_response());
    }

    let section = require_section(form.section)?;
    let path = form.path.unwrap_or_default();
    let name = require_field(form.name, "name")?;

    match storage::create_folder(&state.storage_root, section, &path, &name) {
        Ok(()) => {}
        Err(e @ StorageError::PathTraversal(_)) => return Err(e.into()),
        Err(e) => error!("Failed to create folder {}/{}/{}: {}", section, path, name, e),
    }

    Ok(redirect_back(&headers).into_response())
}

/// Removes a file or directory recursively. Admin only.
pub async fn delete_entry(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<MutationForm>,
) -> Result<Response, VaultError> {
    if !is_admin(&state, &jar).await {
        return Ok(Redirect::to("/").into_response());
    }

    let section = require_section(form.section)?;
    let path = form.path.unwrap_or_default();
    let name = require_field(form.name, "name")?;

    match storage::delete_entry(&state.storage_root, section, &path, &name) {
        Ok(()) => {}
        Err(e @ StorageError::PathTraversal(_)) => return Err(e.into()),
        Err(e) => error!("Failed to delete {}/{}/{}: {}", section, path, name, e),
    }

    Ok(redirect_back(&headers).into_response())
}

/// Saves one uploaded file. Admin only.
pub async fn upload_file(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, VaultError> {
    if !is_admin(&state, &jar).await {
        return Ok(Redirect::to("/").into_response());
    }

    let mut section_raw: Option<String> = None;
    let mut path = String::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = next_field(&mut multipart).await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "section" => section_raw = Some(read_text(field).await?),
            "path" => path = read_text(field).await?,
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = read_bytes(field).await?;
                file = Some((filename, content));
            }
            _ => {}
        }
    }

    let section = require_section(section_raw)?;
    let (filename, content) =
        file.ok_or_else(|| VaultError::MalformedInput("missing form field: file".to_string()))?;

    // A file input submitted empty carries no filename; nothing to store.
    if filename.is_empty() {
        return Ok(redirect_back(&headers).into_response());
    }

    match storage::save_file(&state.storage_root, section, &path, &filename, &content) {
        Ok(()) => {}
        Err(e @ StorageError::PathTraversal(_)) => return Err(e.into()),
        Err(e) => error!("Failed to save {}/{}/{}: {}", section, path, filename, e),
    }

    Ok(redirect_back(&headers).into_response())
}

/// Saves a batch of uploaded files preserving their relative structure.
/// Admin only.
pub async fn upload_folder(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, VaultError> {
    if !is_admin(&state, &jar).await {
        return Ok(Redirect::to("/").into_response());
    }

    let mut section_raw: Option<String> = None;
    let mut base_path = String::new();
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = next_field(&mut multipart).await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "section" => section_raw = Some(read_text(field).await?),
            "path" => base_path = read_text(field).await?,
            "files" => {
                let relative_path = field.file_name().unwrap_or_default().to_string();
                let content = read_bytes(field).await?;
                files.push(UploadedFile {
                    relative_path,
                    content,
                });
            }
            _ => {}
        }
    }

    let section = require_section(section_raw)?;

    match storage::save_folder(&state.storage_root, section, &base_path, &files) {
        Ok(_) => {}
        Err(e @ StorageError::PathTraversal(_)) => return Err(e.into()),
        Err(e) => error!("Failed to save folder under {}/{}: {}", section, base_path, e),
    }

    Ok(redirect_back(&headers).into_response())
}

/// Serves a single file's bytes.
pub async fn download_file(
    State(state): State<AppState>,
    UrlPath((section_raw, path)): UrlPath<(String, String)>,
) -> Result<Response, VaultError> {
    let section = section_raw.parse::<Section>().map_err(VaultError::from)?;
    let real_path = resolve_path(&state.storage_root, section, &path).map_err(VaultError::from)?;

    if !real_path.is_file() {
        return Err(StorageError::NotFound(format!("{}/{}", section, path)).into());
    }

    let content = fs::read(&real_path).map_err(StorageError::from)?;
    let mime = mime_guess::from_path(&real_path).first_or_octet_stream();

    info!("Serving file {}/{} ({} bytes)", section, path, content.len());

    Ok(([(header::CONTENT_TYPE, mime.to_string())], content).into_response())
}

/// Downloads a zip of a section root.
pub async fn download_zip_root(
    State(state): State<AppState>,
    UrlPath(section): UrlPath<String>,
) -> Result<Response, VaultError> {
    zip_response(&state, &section, String::new())
}

/// Downloads a zip of the subtree at `section/path`.
pub async fn download_zip(
    State(state): State<AppState>,
    UrlPath((section, path)): UrlPath<(String, String)>,
) -> Result<Response, VaultError> {
    zip_response(&state, &section, path)
}

fn zip_response(state: &AppState, section_raw: &str, path: String) -> Result<Response, VaultError> {
    let section = section_raw.parse::<Section>().map_err(VaultError::from)?;
    let bytes = archive::build_zip(&state.storage_root, section, &path)?;

    let archive_name = path
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(section.as_str());

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.zip\"", archive_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

async fn current_role(state: &AppState, jar: &CookieJar) -> Option<Role> {
    let cookie = jar.get(SESSION_COOKIE)?;
    state.sessions.role_for(cookie.value()).await
}

async fn is_admin(state: &AppState, jar: &CookieJar) -> bool {
    current_role(state, jar).await.is_some_and(|r| r.is_admin())
}

fn require_field(value: Option<String>, name: &str) -> Result<String, VaultError> {
    value.ok_or_else(|| VaultError::MalformedInput(format!("missing form field: {}", name)))
}

fn require_section(value: Option<String>) -> Result<Section, VaultError> {
    require_field(value, "section")?
        .parse::<Section>()
        .map_err(VaultError::from)
}

fn redirect_back(headers: &HeaderMap) -> Redirect {
    match headers.get(header::REFERER).and_then(|v| v.to_str().ok()) {
        Some(referer) => Redirect::to(referer),
        None => Redirect::to("/"),
    }
}

async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>, VaultError> {
    multipart
        .next_field()
        .await
        .map_err(|e| VaultError::MalformedInput(e.to_string()))
}

async fn read_text(field: Field<'_>) -> Result<String, VaultError> {
    field
        .text()
        .await
        .map_err(|e| VaultError::MalformedInput(e.to_string()))
}

async fn read_bytes(field: Field<'_>) -> Result<Vec<u8>, VaultError> {
    Ok(field
        .bytes()
        .await
        .map_err(|e| VaultError::MalformedInput(e.to_string()))?
        .to_vec())
}
