//! Static content.
//!
//! The API seeds its store from these arrays at startup, and the site renders
//! them whole when the API is unreachable. They are never merged with partial
//! server data.

use crate::models::{Faq, GalleryImage, Review, Service};
use crate::types::{FaqId, GalleryImageId, Rating, ReviewId, ServiceId};

/// Business contact details shown in the footer and used by notifications.
pub mod business {
    pub const NAME: &str = "PNM Gardeners";
    pub const PHONE: &str = "07748 853590";
    pub const EMAIL: &str = "gardeningpnm@gmail.com";
    pub const CHECKATRADE_URL: &str = "https://www.checkatrade.com/trades/pnmgardeners";
}

/// Image used wherever a photo is missing or fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1558904541-efa843a96f01?w=800";

const ASSETS: &str = "https://customer-assets.emergentagent.com/job_balham-gardening-hub/artifacts";
const MEDIA: &str = "https://storage.googleapis.com/core-media-service-production/user-media";

fn service(id: &str, title: &str, description: &str, image: &str, features: &[&str]) -> Service {
    Service {
        id: ServiceId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
    }
}

/// All services, in listing order.
#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        service(
            "garden-maintenance",
            "Garden Maintenance",
            "Comprehensive garden maintenance including lawn mowing, hedge trimming, weeding, and general upkeep. Professional service to keep your garden looking its best all year round.",
            &format!("{ASSETS}/iavpo09s_Garden%20Maintenance.jpeg"),
            &["Lawn Mowing", "Hedge Trimming", "Weeding", "General Upkeep", "Seasonal Maintenance"],
        ),
        service(
            "garden-clearance",
            "Garden Clearance",
            "Complete garden clearance services including removal of overgrown vegetation, waste disposal, and site preparation. Fast and efficient clearance with professional waste removal.",
            &format!("{ASSETS}/tu9u2wbq_Garden%20Clearance.jpeg"),
            &["Overgrown Garden Clearance", "Waste Removal", "Site Preparation", "Ivy Removal", "Thorny Bush Disposal"],
        ),
        service(
            "hedge-trimming",
            "Hedge Trimming & Removal",
            "Professional hedge trimming and removal services. Expert maintenance to keep your hedges neat and healthy, or complete removal when needed.",
            &format!("{ASSETS}/ccw4wf98_Hedge%20Trimming.jpeg"),
            &["Hedge Trimming", "Hedge Removal", "Hedge Shaping", "Pruning", "Cleanup Service"],
        ),
        service(
            "turfing",
            "Turfing",
            "Professional turf laying services to create beautiful, lush lawns. From ground preparation to final installation of premium quality turf.",
            &format!("{ASSETS}/p467qw39_Turfing.jpeg"),
            &["Ground Preparation", "Turf Installation", "Lawn Creation", "Soil Treatment", "Aftercare Advice"],
        ),
        service(
            "lawn-care",
            "Lawn Care",
            "Professional lawn care services including mowing, edging, weed treatment, and overseeding. Keep your lawn healthy and beautiful throughout the year.",
            &format!("{ASSETS}/84y7gk19_Lawn%20Care.jpeg"),
            &["Lawn Mowing", "Edging", "Weed Treatment", "Overseeding", "Lawn Health Assessment"],
        ),
        service(
            "garden-design",
            "Garden Design",
            "Professional garden design services to create bespoke, beautiful outdoor spaces. Our experts work with you from concept to final plan to ensure a functional and stunning garden tailored to your needs.",
            "https://customer-assets.emergentagent.com/job_london-garden-site/artifacts/cd0pqfuk_d3cd6acf-e8b9-4065-b1a3-5ef9c58a007c.jpeg",
            &["Site Survey & Analysis", "Concept Development", "2D & 3D Visuals", "Planting Plans", "Lighting & Irrigation Design"],
        ),
        service(
            "soft-landscaping",
            "Soft Landscaping",
            "Expert soft landscaping services focusing on the living elements of your garden, including the supply and installation of healthy plants, trees, and shrubs to bring your design to life.",
            "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800",
            &["Plant Supply & Installation", "Tree & Shrub Planting", "Border Preparation", "Mulching & Soil Conditioning", "Feature Planting"],
        ),
        service(
            "hard-landscaping",
            "Hard Landscaping",
            "Skilled hard landscaping services for all structural elements of your outdoor space. From laying patios and pathways to building walls and fences, we create the durable framework for your perfect garden.",
            "https://customer-assets.emergentagent.com/job_london-garden-site/artifacts/a0ilni2y_9f5ef68c-f757-4b28-bb9b-a8f9cc5cd9ce.jpeg",
            &["Patio & Paving Installation", "Decking Construction", "Retaining Wall Building", "Fence Installation & Repair", "Shed & Outbuilding Bases"],
        ),
        service(
            "planting-services",
            "Planting Services",
            "Expert planting schemes to suit your space and style. Professional plant selection, installation, and ongoing care to create beautiful garden displays.",
            &format!("{ASSETS}/1eq1wuxc_Planting.jpeg"),
            &["Plant Selection", "Flower Bed Design", "Seasonal Planting", "Bulb Planting", "Plant Care Advice"],
        ),
        service(
            "patio-services",
            "Patio Services",
            "Professional patio installation, repair, and maintenance. From new patio construction to pressure washing and restoration of existing patios.",
            &format!("{ASSETS}/m5ax1zd3_Patio.jpeg"),
            &["Patio Installation", "Patio Repair", "Pressure Washing", "Stone & Block Paving", "Patio Design"],
        ),
        service(
            "pruning",
            "Pruning",
            "Expert pruning services for trees, shrubs, and plants. Professional techniques to promote healthy growth and maintain the shape and size of your plants.",
            &format!("{ASSETS}/gwwh93vr_Pruning.jpeg"),
            &["Tree Pruning", "Shrub Pruning", "Seasonal Pruning", "Health Assessment", "Shape Maintenance"],
        ),
        service(
            "trellis-fencing",
            "Trellis & Fencing",
            "Professional trellis installation and fencing services. Custom solutions for privacy, plant support, and garden structure. Quality materials and expert installation.",
            &format!("{ASSETS}/mt1mal3e_Trellis.jpeg"),
            &["Trellis Installation", "Garden Fencing", "Privacy Screens", "Plant Support Systems", "Custom Design"],
        ),
    ]
}

struct ReviewSeed {
    id: &'static str,
    points: f64,
    date: &'static str,
    text: &'static str,
    service: &'static str,
    postcode: &'static str,
    lat: f64,
    lng: f64,
    images: &'static [&'static str],
}

const REVIEWS: &[ReviewSeed] = &[
    ReviewSeed {
        id: "1",
        points: 10.0,
        date: "07 Aug 2025",
        text: "Great communication from start to finish. Computerised drawing was provided so we could visualise the end result. The team arrived when they said they would, worked fast and efficiently. Delighted with the end result.",
        service: "Complete garden clearance and removal of waste, laying of lawn, jet washing patio",
        postcode: "SW19",
        lat: 51.4214,
        lng: -0.1878,
        images: &[
            "01K20D7JF9PAXZC50HKQXKWQ2N.8A587B8F-ECA9-4B62-A048-F173619539FA.thumb.jpeg",
            "01K20D7JTQNTDA7ZV9RF88CCQD.36BE73D4-47B7-4FFD-A13C-072AB930D37F.thumb.jpeg",
        ],
    },
    ReviewSeed {
        id: "2",
        points: 10.0,
        date: "07 Aug 2025",
        text: "Really great experience, the guys were friendly, helpful, informed and efficient. Cleared a really heavily congested garden with no issue and were very dilligent about it. Absolutely would recommend and go with again.",
        service: "Garden Clearance",
        postcode: "SW16",
        lat: 51.4325,
        lng: -0.1221,
        images: &[
            "01K1Z59GTJSEAYJ1C52M16ZVX8.WhatsApp%20Image%202025-08-05%20at%2018.20.28_08e28d1a.thumb.jpg",
            "01K1Z59H44TRPFVJQSX8BA1GP4.WhatsApp%20Image%202025-08-05%20at%2018.20.26_8984b8ef.thumb.jpg",
        ],
    },
    ReviewSeed {
        id: "3",
        points: 10.0,
        date: "06 Aug 2025",
        text: "Booked on day of posting and completed within 2 hours of booking",
        service: "Dispose of thorny bush",
        postcode: "SW16",
        lat: 51.4352,
        lng: -0.1205,
        images: &[],
    },
    ReviewSeed {
        id: "4",
        points: 9.0,
        date: "05 Aug 2025",
        text: "PNM gardening were quick to quote from a photo and easy to communicate with. The two gardeners did a great job and cleared an overgrown garden really quickly and left no mess. Would recommend",
        service: "Small garden clearance",
        postcode: "SW12",
        lat: 51.4648,
        lng: -0.1731,
        images: &[],
    },
    ReviewSeed {
        id: "5",
        points: 10.0,
        date: "05 Aug 2025",
        text: "Very good job, good communication and would use again.",
        service: "Ivy Removal",
        postcode: "SW10",
        lat: 51.4892,
        lng: -0.1934,
        images: &[],
    },
    ReviewSeed {
        id: "6",
        points: 9.3,
        date: "01 Aug 2025",
        text: "Paolo and his team arrived promptly and worked hard to sort out our and our neighbour's front hedges. They were friendly and courteous and cleaned up well afterwards. The only negative was that their ladders were not quite tall enough to really trim the tops to perfection.",
        service: "Good hedge trimming",
        postcode: "SW4",
        lat: 51.4822,
        lng: -0.1448,
        images: &[],
    },
];

/// Approved reviews, newest first.
#[must_use]
pub fn reviews() -> Vec<Review> {
    REVIEWS
        .iter()
        .map(|seed| Review {
            id: ReviewId::new(seed.id),
            name: "Verified Customer".to_owned(),
            rating: Rating::from_ten_point(seed.points).unwrap_or_default(),
            date: seed.date.to_owned(),
            text: seed.text.to_owned(),
            service: seed.service.to_owned(),
            postcode: Some(seed.postcode.to_owned()),
            lat: Some(seed.lat),
            lng: Some(seed.lng),
            images: seed.images.iter().map(|img| format!("{MEDIA}/{img}")).collect(),
            approved: true,
        })
        .collect()
}

const FAQS: &[(&str, &str)] = &[
    (
        "How can I get a quote?",
        "You can get a free quote by filling out our contact form, calling us on 07748 853590, or emailing us at gardeningpnm@gmail.com. We provide fast and competitive quotes for all our services.",
    ),
    (
        "Do you provide all the tools and equipment?",
        "Yes, we come fully equipped with all the professional tools and equipment needed for any gardening task. You don't need to provide anything - we even have our own power source!",
    ),
    (
        "Are you fully insured?",
        "Absolutely. We hold comprehensive Public Liability Insurance, so you can have complete peace of mind when we work on your property, whether residential or commercial.",
    ),
    (
        "Do you take away all the garden waste?",
        "Yes, we include free disposal of green waste with all our services. We remove all garden waste from your property and dispose of it responsibly at licensed facilities.",
    ),
    (
        "What payment methods do you accept?",
        "We accept cash, all major credit cards (Visa, MasterCard, American Express), and bank transfers (BACS). Payment is typically due upon completion of work.",
    ),
    (
        "Can you supply plants, soil, and materials?",
        "Yes, if you let us know your requirements when booking, we can supply plants, soil, compost, and other materials. We work with premium suppliers in London to ensure quality.",
    ),
    (
        "Do I need to provide power for your tools?",
        "No, you don't need to provide power for our tools. We come fully equipped with battery-powered and petrol-powered equipment, so no mains electricity is required. The only exception is our jet wash, which may need access to a garden tap in some cases.",
    ),
];

/// Frequently asked questions, in display order.
#[must_use]
pub fn faqs() -> Vec<Faq> {
    FAQS.iter()
        .zip(1..)
        .map(|(&(question, answer), n)| Faq {
            id: FaqId::new(n.to_string()),
            question: question.to_owned(),
            answer: answer.to_owned(),
        })
        .collect()
}

/// Areas served.
pub const AREAS_SERVED: &[&str] = &[
    "Balham",
    "Tooting",
    "Wandsworth",
    "Clapham",
    "Streatham",
    "Mitcham",
    "Wimbledon",
    "Colliers Wood",
    "South Wimbledon",
    "Raynes Park",
    "New Malden",
    "Kingston upon Thames",
    "Putney",
    "Barnes",
    "Roehampton",
    "Earlsfield",
    "Southfields",
    "East Sheen",
    "Richmond",
    "Mortlake",
    "Chelsea",
    "Fulham",
    "Battersea",
    "Brixton",
    "Stockwell",
    "Vauxhall",
];

const GALLERY: &[(&str, &str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1597201278257-3687be27d954?w=1200",
        "Beautiful Flower Garden",
        "Garden Design",
    ),
    (
        "https://images.pexels.com/photos/5905352/pexels-photo-5905352.jpeg",
        "Professional Garden Work",
        "Maintenance",
    ),
    (
        "https://images.pexels.com/photos/1301856/pexels-photo-1301856.jpeg",
        "Tree Surgery",
        "Tree Care",
    ),
    (
        "https://images.unsplash.com/photo-1458245201577-fc8a130b8829?w=1200",
        "Lawn Maintenance",
        "Lawn Care",
    ),
];

/// General gallery images.
#[must_use]
pub fn gallery_images() -> Vec<GalleryImage> {
    GALLERY
        .iter()
        .zip(1..)
        .map(|(&(src, title, category), n)| GalleryImage {
            id: GalleryImageId::new(n.to_string()),
            src: src.to_owned(),
            thumbnail: None,
            title: title.to_owned(),
            category: category.to_owned(),
            created_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_unique() {
        let services = services();
        let ids: HashSet<_> = services.iter().map(|s| &s.id).collect();
        assert_eq!(ids.len(), services.len());

        let reviews = reviews();
        let ids: HashSet<_> = reviews.iter().map(|r| &r.id).collect();
        assert_eq!(ids.len(), reviews.len());
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(services().len(), 12);
        assert_eq!(reviews().len(), 6);
        assert_eq!(faqs().len(), 7);
        assert_eq!(AREAS_SERVED.len(), 26);
        assert_eq!(gallery_images().len(), 4);
    }

    #[test]
    fn test_seed_reviews_are_mappable_and_rated() {
        for review in reviews() {
            assert!(review.has_coordinates(), "review {} has no coordinates", review.id);
            assert!(review.rating.as_stars() >= 4.5);
        }
    }
}
