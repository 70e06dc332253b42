//! Common types and data structures

use serde::{Deserialize, Serialize};

/// One pricing tier. Presentation data only; `featured` changes how the card
/// looks and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub featured: bool,
}

impl Plan {
    pub fn new(name: &str, price: &str, features: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            price: price.to_owned(),
            features: features.iter().map(|f| (*f).to_owned()).collect(),
            featured: false,
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// The built-in plans shown on the pricing view, in display order
    pub fn catalog() -> Vec<Plan> {
        vec![
            Plan::new(
                "Standard",
                "$100",
                &["50,000 Requests", "4 contributors", "Up to 3 GB storage space"],
            ),
            Plan::new(
                "Pro",
                "$200",
                &["100,000 Requests", "7 contributors", "Up to 6 GB storage space"],
            )
            .featured(),
            Plan::new(
                "Expert",
                "$500",
                &["200,000 Requests", "11 contributors", "Up to 10 GB storage space"],
            ),
        ]
    }
}

/// Lifecycle of one dashboard widget instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcState {
    Idle,
    Pending,
    Resolved(f64),
    Abandoned,
}

/// Top-level view selected in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Pricing,
    Dashboard,
}

impl View {
    pub const ALL: [View; 2] = [View::Pricing, View::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            View::Pricing => "Pricing",
            View::Dashboard => "Dashboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Pricing => egui_phosphor::regular::TAG,
            View::Dashboard => egui_phosphor::regular::CALCULATOR,
        }
    }
}
