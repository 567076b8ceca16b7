//! Condition rating types shared by bridges, listings and the dashboard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::condition;

/// The four component ratings of a bridge, each optional and nominally 1-5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionRatings {
    pub deck: Option<i32>,
    pub girders: Option<i32>,
    pub piers: Option<i32>,
    pub abutment: Option<i32>,
}

impl ConditionRatings {
    pub fn new(
        deck: Option<i32>,
        girders: Option<i32>,
        piers: Option<i32>,
        abutment: Option<i32>,
    ) -> Self {
        ConditionRatings {
            deck,
            girders,
            piers,
            abutment,
        }
    }

    /// Ratings that are set, in deck/girders/piers/abutment order.
    pub fn present(&self) -> impl Iterator<Item = i32> {
        [self.deck, self.girders, self.piers, self.abutment]
            .into_iter()
            .flatten()
    }
}

/// Named condition band derived from the average rating.
///
/// Variants are declared worst to best so that `Ord` follows condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Unknown,
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl ConditionCategory {
    /// The five categories tallied on the dashboard, best first.
    pub const RATED: [ConditionCategory; 5] = [
        Self::Excellent,
        Self::VeryGood,
        Self::Good,
        Self::Fair,
        Self::Poor,
    ];

    /// Key used in JSON and in the list filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::VeryGood => "very_good",
            Self::Excellent => "excellent",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Parse a filter key. Accepts `very_good`, `VERY_GOOD` and `Very Good`.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace(' ', "_");
        Self::RATED
            .into_iter()
            .chain([Self::Unknown])
            .find(|category| category.as_str() == key)
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived condition view of a bridge. Computed on read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConditionSummary {
    /// Mean of the set ratings, one decimal place; absent when none are set
    pub average_rating: Option<Decimal>,
    pub category: ConditionCategory,
    pub category_label: &'static str,
    /// Bridge Condition Index, 0-100
    pub bci_percentage: i32,
}

impl ConditionSummary {
    pub fn from_ratings(ratings: &ConditionRatings) -> Self {
        let average_rating = condition::average_rating(ratings);
        let category = condition::condition_category(average_rating);
        ConditionSummary {
            average_rating,
            category,
            category_label: category.label(),
            bci_percentage: condition::bci_percentage(average_rating),
        }
    }
}
