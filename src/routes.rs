//! HTTP surface: locale-prefixed pages plus a few JSON endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::cms::{self, CmsClient, ImageUrlBuilder};
use crate::config::Config;
use crate::contact::{ContactForm, ContactInput, FormState, WebhookClient};
use crate::error::ApiError;
use crate::filter::{CategoryFilter, FilteredProjects};
use crate::i18n::Locale;
use crate::render::{self, PageContext};
use crate::security::{authorize_revalidate, RevalidateAccess};

/// Shared handles, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cms: CmsClient,
    pub webhook: WebhookClient,
    pub images: Option<ImageUrlBuilder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cms = CmsClient::new(config.cms.clone());
        let images = ImageUrlBuilder::from_settings(&config.cms);
        let webhook = WebhookClient::new(config.contact_webhook_url.clone());

        Self {
            config: Arc::new(config),
            cms,
            webhook,
            images,
        }
    }

    fn page<'a>(&'a self, locale: Locale, path: &'a str) -> PageContext<'a> {
        PageContext::new(&self.config, self.images.as_ref(), locale, path)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .route("/api/contact", post(api_contact))
        .route("/api/revalidate", post(api_revalidate))
        .route("/:locale", get(home))
        .route("/:locale/about", get(about))
        .route("/:locale/services", get(services))
        .route("/:locale/projects", get(projects))
        .route("/:locale/projects/:slug", get(project_detail))
        .route("/:locale/contact", get(contact).post(contact_submit))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Health ====================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    cms_configured: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cms_configured: state.cms.is_configured(),
    })
}

// ==================== Pages ====================

async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::default_locale().code()))
}

/// `/{segment}`: a locale's home page, or a redirect of a bare page name
/// to the same page under the default locale.
async fn home(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let locale = match Locale::from_code(&segment) {
        Ok(locale) => locale,
        Err(_) if is_page_segment(&segment) => {
            let target = format!("/{}/{}", Locale::default_locale().code(), segment);
            return Redirect::temporary(&target).into_response();
        }
        Err(_) => return not_found_response(&state, Locale::default_locale(), None),
    };

    let featured = cms::get_featured_projects(&state.cms).await;
    render::home_page(
        &state.page(locale, ""),
        &featured,
        state.config.show_placeholder_projects,
    )
    .into_response()
}

async fn about(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let locale = Locale::resolve(Some(&segment));
    render::about_page(&state.page(locale, "/about")).into_response()
}

async fn services(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let locale = Locale::resolve(Some(&segment));
    render::services_page(&state.page(locale, "/services")).into_response()
}

#[derive(Debug, Deserialize)]
struct ProjectsQuery {
    category: Option<String>,
}

async fn projects(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let locale = Locale::resolve(Some(&segment));
    let projects = cms::get_all_projects(&state.cms).await;
    let filtered = FilteredProjects::new(
        &projects,
        CategoryFilter::from_param(query.category.as_deref()),
    );

    render::projects_page(&state.page(locale, "/projects"), &filtered, projects.len())
        .into_response()
}

async fn project_detail(
    State(state): State<AppState>,
    Path((segment, slug)): Path<(String, String)>,
) -> Response {
    let locale = Locale::resolve(Some(&segment));

    match cms::get_project_by_slug(&state.cms, &slug).await {
        Some(project) => {
            let path = format!("/projects/{}", project.slug.current);
            render::project_detail_page(&state.page(locale, &path), &project).into_response()
        }
        None => not_found_response(
            &state,
            locale,
            Some(locale.messages().meta.project_not_found_title),
        ),
    }
}

async fn contact(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let locale = Locale::resolve(Some(&segment));
    render::contact_page(&state.page(locale, "/contact"), &ContactForm::new()).into_response()
}

/// HTML form post. The page is re-rendered in whatever state the
/// submission ended in.
async fn contact_submit(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Form(input): Form<ContactInput>,
) -> Response {
    let locale = Locale::resolve(Some(&segment));
    let mut form = ContactForm::new();

    if let Err(e) = form.submit(input, &state.webhook).await {
        warn!(error = %e, "Contact form submission rejected");
    }

    render::contact_page(&state.page(locale, "/contact"), &form).into_response()
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = Locale::resolve(uri.path().split('/').nth(1));
    not_found_response(&state, locale, None)
}

fn not_found_response(state: &AppState, locale: Locale, title: Option<&str>) -> Response {
    let t = locale.messages();
    let title = title.unwrap_or(t.not_found.title);
    (
        StatusCode::NOT_FOUND,
        render::not_found_page(&state.page(locale, ""), title),
    )
        .into_response()
}

/// A bare path segment that may name a page (`about`, `projects`), as
/// opposed to a file name or anything that is not safe to echo back in a
/// `Location` header.
fn is_page_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// ==================== JSON API ====================

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

/// JSON contact endpoint. Field errors are localized via `?locale=`.
async fn api_contact(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let locale = Locale::resolve(query.locale.as_deref());

    let mut form = ContactForm::new();
    match form.submit(input, &state.webhook).await? {
        FormState::Success => Ok(Json(json!({ "status": "sent" }))),
        FormState::Error => Err(ApiError::Upstream {
            phone: state.config.contact_phone.clone(),
        }),
        FormState::Idle | FormState::Submitting => {
            Err(ApiError::validation(form.errors(), locale.messages()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct RevalidateRequest {
    #[serde(default)]
    tags: Vec<String>,
}

/// Tag used when a revalidation request names no tags.
const DEFAULT_REVALIDATE_TAG: &str = "project";

async fn api_revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RevalidateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    match authorize_revalidate(state.config.revalidate_secret.as_deref(), &headers) {
        RevalidateAccess::Disabled => return Err(ApiError::NotFound),
        RevalidateAccess::Denied => {
            warn!("Rejected revalidation request with invalid secret");
            return Err(ApiError::Unauthorized);
        }
        RevalidateAccess::Granted => {}
    }

    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let tags = if request.tags.is_empty() {
        vec![DEFAULT_REVALIDATE_TAG.to_string()]
    } else {
        request.tags
    };

    let evicted: usize = tags.iter().map(|tag| state.cms.invalidate_tag(tag)).sum();
    info!(tags = ?tags, evicted, "Revalidated content cache");

    Ok(Json(json!({
        "revalidated": true,
        "tags": tags,
        "evicted": evicted,
    })))
}
