//! Results assembly
//!
//! Pairs each row's selected values with their descriptors and resolves the
//! asset paths shown next to every match. When nothing can be shown a single
//! fallback entry takes the place of the rows.

use serde::Serialize;
use utoipa::ToSchema;

use crate::data::types::ResultRow;

pub const IMAGE_DIR: &str = "static/all_pokemon_images";
pub const CHART_DIR: &str = "static/radar_plots";
pub const CHART_PREFIX: &str = "radar_chart_";
pub const FALLBACK_IMAGE: &str = "static/all_pokemon_images/sadPikachu.png";
pub const NO_EXTRA_STATS: &str = "No Additional Stats Requested";

/// Why no rows are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    NoCriteria,
    MinGreaterThanMax,
    NoMatches,
}

impl Fallback {
    pub fn title(&self) -> &'static str {
        match self {
            Fallback::NoCriteria => "No Search Criteria Input",
            Fallback::MinGreaterThanMax => {
                "There are no Pokemon that meet the specified criteria; you input a minumum value greater than a maximum value you input"
            }
            Fallback::NoMatches => "There are no Pokemon that meet the specified criteria",
        }
    }

    pub fn stat(&self) -> &'static str {
        match self {
            Fallback::NoCriteria => "No Search Criteria Input",
            Fallback::MinGreaterThanMax | Fallback::NoMatches => "No Search Results",
        }
    }
}

/// Search results as rendered by the client
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResultsView {
    pub names: Vec<String>,
    pub image_paths: Vec<String>,
    pub chart_paths: Vec<String>,
    /// One list of `"<descriptor><value>"` entries per name
    pub stats: Vec<Vec<String>>,
    /// Number of entries in every list above
    pub count: usize,
    /// True when the store query failed and a fallback is shown instead
    pub failed: bool,
}

impl ResultsView {
    /// Assemble matched rows; `descriptors` align with each row's values
    pub fn from_rows(rows: &[ResultRow], descriptors: &[&str]) -> Self {
        let mut view = Self::with_capacity(rows.len());

        for row in rows {
            view.names.push(row.name.clone());
            view.image_paths.push(image_path(&row.image));
            view.chart_paths.push(chart_path(&row.image));
            view.stats.push(stats_for(row, descriptors));
        }

        view.count = rows.len();
        view
    }

    /// Single placeholder entry explaining the empty result
    pub fn fallback(reason: Fallback) -> Self {
        Self {
            names: vec![reason.title().to_string()],
            image_paths: vec![FALLBACK_IMAGE.to_string()],
            chart_paths: vec![FALLBACK_IMAGE.to_string()],
            stats: vec![vec![reason.stat().to_string()]],
            count: 1,
            failed: false,
        }
    }

    pub fn mark_failed(mut self) -> Self {
        self.failed = true;
        self
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            names: Vec::with_capacity(n),
            image_paths: Vec::with_capacity(n),
            chart_paths: Vec::with_capacity(n),
            stats: Vec::with_capacity(n),
            count: 0,
            failed: false,
        }
    }
}

pub fn image_path(image: &str) -> String {
    format!("{}/{}", IMAGE_DIR, image)
}

pub fn chart_path(image: &str) -> String {
    format!("{}/{}{}", CHART_DIR, CHART_PREFIX, image)
}

fn stats_for(row: &ResultRow, descriptors: &[&str]) -> Vec<String> {
    if row.values.is_empty() {
        return vec![NO_EXTRA_STATS.to_string()];
    }
    row.values
        .iter()
        .zip(descriptors)
        .map(|(value, descriptor)| format!("{}{}", descriptor, value))
        .collect()
}
