//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use crate::types::FaqId;

/// A question and answer shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}
