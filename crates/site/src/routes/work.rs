//! Work gallery: customer reviews that came with photos.
//!
//! Search, service and location filters are query parameters, so every
//! link on the page carries them. Opening a project is `?review={id}`,
//! stepping through its photos `&photo={index}`.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use pnm_gardeners_core::Review;
use serde::Deserialize;
use tracing::instrument;
use url::form_urlencoded;

use crate::content;
use crate::filters;
use crate::listing::{ALL, WorkFilter, location_options, service_options, wrap_next, wrap_previous};
use crate::state::AppState;

use super::home::ReviewView;

/// Work gallery query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkQuery {
    pub q: String,
    pub service: String,
    pub location: String,
    /// Open project.
    pub review: Option<String>,
    /// Photo within the open project, 0-indexed.
    #[serde(deserialize_with = "super::lenient_index")]
    pub photo: Option<usize>,
}

/// A filter choice in a select.
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A project card.
pub struct ProjectView {
    pub review: ReviewView,
    pub cover: String,
    /// Photos beyond the cover.
    pub more_photos: usize,
    pub href: String,
}

/// The open project with its photo viewer.
pub struct ProjectDetailView {
    pub review: ReviewView,
    pub photo: String,
    /// 1-indexed position for display.
    pub position: usize,
    pub total: usize,
    pub previous_href: String,
    pub next_href: String,
    pub close_href: String,
}

/// Work gallery template.
#[derive(Template, WebTemplate)]
#[template(path = "work.html")]
pub struct WorkTemplate {
    pub q: String,
    pub services: Vec<OptionView>,
    pub locations: Vec<OptionView>,
    pub projects: Vec<ProjectView>,
    /// Projects with photos before filtering.
    pub total: usize,
    pub filtered: bool,
    pub detail: Option<ProjectDetailView>,
    pub notice: Option<String>,
}

/// `/work` with the filter and the given project and photo.
fn work_href(filter: &WorkFilter, review: Option<&str>, photo: Option<usize>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !filter.q.trim().is_empty() {
        query.append_pair("q", &filter.q);
    }
    for (key, value) in [("service", &filter.service), ("location", &filter.location)] {
        if !value.is_empty() && value != ALL {
            query.append_pair(key, value);
        }
    }
    if let Some(review) = review {
        query.append_pair("review", review);
    }
    if let Some(photo) = photo {
        query.append_pair("photo", &photo.to_string());
    }
    let query = query.finish();
    if query.is_empty() {
        "/work".to_string()
    } else {
        format!("/work?{query}")
    }
}

fn options(values: Vec<&str>, current: &str) -> Vec<OptionView> {
    std::iter::once(OptionView {
        value: ALL.to_string(),
        label: "All".to_string(),
        selected: current.is_empty() || current == ALL,
    })
    .chain(values.into_iter().map(|value| OptionView {
        value: value.to_string(),
        label: value.to_string(),
        selected: value == current,
    }))
    .collect()
}

fn open_project(review: &Review, filter: &WorkFilter, photo: usize) -> Option<ProjectDetailView> {
    let total = review.images.len();
    let index = photo.checked_rem(total)?;
    let id = review.id.as_str();
    Some(ProjectDetailView {
        review: ReviewView::from(review),
        photo: review.images.get(index)?.clone(),
        position: index + 1,
        total,
        previous_href: work_href(filter, Some(id), Some(wrap_previous(index, total))),
        next_href: work_href(filter, Some(id), Some(wrap_next(index, total))),
        close_href: work_href(filter, None, None),
    })
}

/// Display the work gallery.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<WorkQuery>,
) -> WorkTemplate {
    let loaded = content::reviews(state.backend()).await;
    let with_photos: Vec<Review> = loaded
        .records
        .iter()
        .filter(|r| !r.images.is_empty())
        .cloned()
        .collect();

    let filter = &WorkFilter {
        q: query.q,
        service: query.service,
        location: query.location,
    };
    let projects = filter
        .apply(&with_photos)
        .into_iter()
        .filter_map(|review| {
            let cover = review.images.first()?.clone();
            Some(ProjectView {
                cover,
                more_photos: review.images.len() - 1,
                href: work_href(filter, Some(review.id.as_str()), None),
                review: ReviewView::from(review),
            })
        })
        .collect();

    let detail = query.review.as_deref().and_then(|id| {
        with_photos
            .iter()
            .find(|r| r.id.as_str() == id)
            .and_then(|review| open_project(review, filter, query.photo.unwrap_or(0)))
    });

    WorkTemplate {
        q: filter.q.clone(),
        services: options(service_options(&with_photos), &filter.service),
        locations: options(location_options(&with_photos), &filter.location),
        projects,
        total: with_photos.len(),
        filtered: filter.is_active(),
        detail,
        notice: loaded.notice(),
    }
}
