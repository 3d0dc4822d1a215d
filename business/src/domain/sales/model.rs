use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};

use crate::domain::shared::value_objects::ProductId;

/// Aggregation window of the best-sellers report. The carousel ranks by the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Month,
}

impl ReportPeriod {
    /// First day of the period that contains `today`.
    pub fn period_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            ReportPeriod::Month => today.with_day(1).unwrap_or(today),
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPeriod::Month => write!(f, "month"),
        }
    }
}

/// One row of the best-sellers report.
#[derive(Debug, Clone)]
pub struct BestSeller {
    pub product_id: ProductId,
    pub product_name: String,
    pub qty_ordered: BigDecimal,
    /// 1-based rank inside the period.
    pub rating_pos: i32,
}
