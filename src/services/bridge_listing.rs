//! Search, condition filtering and paging of the bridge list.
//!
//! The condition category is derived on read, so filtering happens over
//! the fetched rows rather than in SQL.

use crate::entity::bridge;
use crate::error::{AppError, AppResult};
use crate::models::{ConditionCategory, ConditionSummary, Pagination, PaginationParams};

/// Parsed list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeFilter {
    /// Lowercased search term
    pub search: Option<String>,
    pub condition: Option<ConditionCategory>,
}

impl BridgeFilter {
    /// Build a filter from raw query values. Blank values are ignored.
    pub fn parse(search: Option<&str>, condition: Option<&str>) -> AppResult<Self> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let condition = match condition.map(str::trim).filter(|c| !c.is_empty()) {
            Some(raw) => Some(ConditionCategory::parse(raw).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown condition filter '{}'", raw))
            })?),
            None => None,
        };

        Ok(BridgeFilter { search, condition })
    }

    pub fn matches(&self, bridge: &bridge::Model) -> bool {
        if let Some(ref term) = self.search
            && !bridge.name.to_lowercase().contains(term)
            && !bridge.route.to_lowercase().contains(term)
        {
            return false;
        }

        if let Some(condition) = self.condition
            && ConditionSummary::from_ratings(&bridge.ratings()).category != condition
        {
            return false;
        }

        true
    }
}

/// Apply the filter and return the requested page with its metadata.
pub fn filter_and_paginate(
    bridges: Vec<bridge::Model>,
    filter: &BridgeFilter,
    params: &PaginationParams,
) -> (Vec<bridge::Model>, Pagination) {
    let matching: Vec<bridge::Model> = bridges.into_iter().filter(|b| filter.matches(b)).collect();

    let limit = params.clamped_limit();
    let pagination = Pagination::new(params.page(), limit, matching.len() as u64);

    let page = matching
        .into_iter()
        .skip(params.offset() as usize)
        .take(limit as usize)
        .collect();

    (page, pagination)
}
