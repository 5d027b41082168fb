//! Service category pages (`/build`, `/maintain`).

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use pnm_gardeners_core::Service;
use tracing::instrument;

use crate::content;
use crate::filters;
use crate::gallery::catalog;
use crate::state::AppState;

/// A group of services with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Build,
    Maintain,
}

impl ServiceCategory {
    /// Service ids on this page, in display order.
    #[must_use]
    pub const fn service_ids(self) -> &'static [&'static str] {
        match self {
            Self::Build => &["hard-landscaping", "soft-landscaping", "garden-design"],
            Self::Maintain => &[
                "garden-maintenance",
                "garden-clearance",
                "hedge-trimming",
                "turfing",
            ],
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Build => "Build Services",
            Self::Maintain => "Maintenance Services",
        }
    }

    #[must_use]
    pub const fn intro(self) -> &'static str {
        match self {
            Self::Build => {
                "Bringing bespoke designs to life with precision and quality craftsmanship. From soft planting to hard landscaping, we create beautiful, functional outdoor spaces."
            }
            Self::Maintain => {
                "Ongoing expert gardening to keep your outdoor space perfect year-round. Regular maintenance to ensure your garden always looks its best."
            }
        }
    }

    #[must_use]
    pub const fn cta_heading(self) -> &'static str {
        match self {
            Self::Build => "Ready to Build Your Dream Garden?",
            Self::Maintain => "Keep Your Garden Perfect Year-Round",
        }
    }

    #[must_use]
    pub const fn cta_text(self) -> &'static str {
        match self {
            Self::Build => "Get expert construction and landscaping services with professional results",
            Self::Maintain => {
                "Professional maintenance services to keep your garden healthy and beautiful"
            }
        }
    }

    /// Services in this category, in the category's order.
    #[must_use]
    pub fn select(self, services: &[Service]) -> Vec<Service> {
        self.service_ids()
            .iter()
            .filter_map(|id| services.iter().find(|s| s.id.as_str() == *id))
            .cloned()
            .collect()
    }
}

/// A service card with its gallery link.
pub struct ServiceCard {
    pub service: Service,
    /// `/gallery/{id}` when the service has a gallery.
    pub gallery_href: Option<String>,
}

/// Service category page template.
#[derive(Template, WebTemplate)]
#[template(path = "services/category.html")]
pub struct CategoryTemplate {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cta_heading: &'static str,
    pub cta_text: &'static str,
    pub cards: Vec<ServiceCard>,
    pub notice: Option<String>,
}

async fn page(state: &AppState, category: ServiceCategory) -> CategoryTemplate {
    let services = content::services(state.backend()).await;
    let cards = category
        .select(&services.records)
        .into_iter()
        .map(|service| ServiceCard {
            gallery_href: catalog::find(service.id.as_str()).map(|g| format!("/gallery/{}", g.id)),
            service,
        })
        .collect();

    CategoryTemplate {
        heading: category.heading(),
        intro: category.intro(),
        cta_heading: category.cta_heading(),
        cta_text: category.cta_text(),
        cards,
        notice: services.notice(),
    }
}

/// Display the build services page.
#[instrument(skip(state))]
pub async fn build(State(state): State<AppState>) -> CategoryTemplate {
    page(&state, ServiceCategory::Build).await
}

/// Display the maintenance services page.
#[instrument(skip(state))]
pub async fn maintain(State(state): State<AppState>) -> CategoryTemplate {
    page(&state, ServiceCategory::Maintain).await
}

#[cfg(test)]
mod tests {
    use pnm_gardeners_core::content as seed;

    use super::*;

    #[test]
    fn test_select_keeps_category_order() {
        let services = seed::services();
        let build: Vec<_> = ServiceCategory::Build
            .select(&services)
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(build, ["hard-landscaping", "soft-landscaping", "garden-design"]);
        assert_eq!(ServiceCategory::Maintain.select(&services).len(), 4);
    }

    #[test]
    fn test_missing_services_are_skipped() {
        assert!(ServiceCategory::Build.select(&[]).is_empty());
    }
}
