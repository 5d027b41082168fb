//! Per-service galleries.
//!
//! Each service the business offers has a gallery page at
//! `/gallery/{service_id}` showing the photos of the album it maps to.

use pnm_gardeners_core::{Album, Photo, PhotoId, content::PLACEHOLDER_IMAGE};

/// Group a service gallery is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryGroup {
    Design,
    Build,
    Maintain,
}

impl GalleryGroup {
    pub const ALL: [Self; 3] = [Self::Design, Self::Build, Self::Maintain];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Design => "DESIGN",
            Self::Build => "BUILD",
            Self::Maintain => "MAINTAIN",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Design => "Innovative garden design concepts and visualizations",
            Self::Build => "Construction and landscaping projects brought to life",
            Self::Maintain => "Ongoing maintenance and garden care projects",
        }
    }

    /// Galleries in this group, in display order.
    pub fn galleries(self) -> impl Iterator<Item = &'static ServiceGallery> {
        GALLERIES.iter().filter(move |g| g.group == self)
    }
}

/// A service gallery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceGallery {
    pub id: &'static str,
    pub name: &'static str,
    pub group: GalleryGroup,
    pub title: &'static str,
    pub description: &'static str,
    /// Album in the album document holding this service's photos.
    pub album: &'static str,
}

const fn gallery(
    id: &'static str,
    name: &'static str,
    group: GalleryGroup,
    title: &'static str,
    description: &'static str,
    album: &'static str,
) -> ServiceGallery {
    ServiceGallery {
        id,
        name,
        group,
        title,
        description,
        album,
    }
}

const GALLERIES: &[ServiceGallery] = &[
    gallery(
        "garden-design-planning",
        "Garden Design Planning",
        GalleryGroup::Design,
        "Garden Design Planning Gallery",
        "Explore our portfolio of comprehensive garden design projects, from initial concepts to detailed implementation plans.",
        "Planting",
    ),
    gallery(
        "3d-visualization",
        "3D Visualization",
        GalleryGroup::Design,
        "3D Visualization Gallery",
        "View our stunning 3D renders and visualizations that bring garden designs to life before construction begins.",
        "Planting",
    ),
    gallery(
        "planting-schemes",
        "Planting Schemes",
        GalleryGroup::Design,
        "Planting Schemes Gallery",
        "Discover our expertly designed planting schemes featuring year-round interest and beautiful color combinations.",
        "Planting",
    ),
    gallery(
        "outdoor-lighting-design",
        "Outdoor Lighting Design",
        GalleryGroup::Design,
        "Outdoor Lighting Design Gallery",
        "See how professional lighting design transforms gardens into stunning nighttime landscapes.",
        "Planting",
    ),
    gallery(
        "hard-landscaping",
        "Hard Landscaping",
        GalleryGroup::Build,
        "Hard Landscaping Gallery",
        "Browse our portfolio of patios, pathways, walls, and structural garden features built to last.",
        "Patio",
    ),
    gallery(
        "soft-landscaping",
        "Soft Landscaping",
        GalleryGroup::Build,
        "Soft Landscaping Gallery",
        "View our expert planting work including trees, shrubs, and borders that bring gardens to life.",
        "Planting",
    ),
    gallery(
        "fencing-decking-trellis",
        "Fences, Decking & Trellis",
        GalleryGroup::Build,
        "Fences, Decking & Trellis Gallery",
        "Explore our quality carpentry work including fencing, decking, and custom trellis installations.",
        "Trellis",
    ),
    gallery(
        "garden-maintenance",
        "Garden Maintenance",
        GalleryGroup::Maintain,
        "Garden Maintenance Gallery",
        "See the results of our comprehensive garden maintenance services keeping gardens pristine year-round.",
        "Garden Maintenance",
    ),
    gallery(
        "garden-clearance",
        "Garden Clearance",
        GalleryGroup::Maintain,
        "Garden Clearance Gallery",
        "Dramatic before and after transformations from our professional garden clearance services.",
        "Garden Clearance",
    ),
    gallery(
        "hedge-trimming",
        "Hedge Trimming & Removal",
        GalleryGroup::Maintain,
        "Hedge Trimming & Removal Gallery",
        "Professional hedge trimming and removal work showcasing our expertise in hedge care.",
        "Hedge Trimming",
    ),
    gallery(
        "turfing",
        "Turfing",
        GalleryGroup::Maintain,
        "Turfing Gallery",
        "Beautiful lawn transformations from our professional turf laying services.",
        "Turfing",
    ),
];

/// Heading for an unknown service id.
pub const UNKNOWN_TITLE: &str = "Service Gallery";
/// Description for an unknown service id.
pub const UNKNOWN_DESCRIPTION: &str = "View our portfolio of completed projects.";

/// Every service gallery.
#[must_use]
pub const fn all() -> &'static [ServiceGallery] {
    GALLERIES
}

/// Gallery for `id`, if the business offers that service.
#[must_use]
pub fn find(id: &str) -> Option<&'static ServiceGallery> {
    GALLERIES.iter().find(|g| g.id == id)
}

/// Photos to show for a service gallery.
///
/// Falls back to a single placeholder photo when the album is missing or
/// has no photos.
#[must_use]
pub fn photos_for(album: Option<&Album>) -> Vec<Photo> {
    match album {
        Some(album) if !album.photos.is_empty() => album.photos.clone(),
        _ => vec![placeholder_photo()],
    }
}

fn placeholder_photo() -> Photo {
    Photo {
        id: PhotoId::new("placeholder"),
        name: "placeholder.jpg".to_string(),
        url: PLACEHOLDER_IMAGE.to_string(),
        thumbnail_url: None,
        service: String::new(),
        description: "Sample project - More photos coming soon".to_string(),
    }
}
