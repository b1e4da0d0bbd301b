use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived values for one bar. `None` means "not yet available" (warm-up).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub timestamp: DateTime<Utc>,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Indicator values aligned index-for-index with a price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSeries {
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn new(points: Vec<IndicatorPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&IndicatorPoint> {
        self.points.get(index)
    }

    pub fn latest(&self) -> Option<&IndicatorPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorPoint> {
        self.points.iter()
    }

    /// One column of the series, e.g. `series.column(|p| p.sma20)`.
    pub fn column<F>(&self, select: F) -> Vec<Option<f64>>
    where
        F: Fn(&IndicatorPoint) -> Option<f64>,
    {
        self.points.iter().map(select).collect()
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a IndicatorPoint;
    type IntoIter = std::slice::Iter<'a, IndicatorPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
