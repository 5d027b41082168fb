//! Service listings.

use serde::{Deserialize, Serialize};

use crate::types::ServiceId;

/// A service the business offers, e.g. lawn care or patio laying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    /// Hero image URL.
    pub image: String,
    /// Bullet points in display order.
    #[serde(default)]
    pub features: Vec<String>,
}
