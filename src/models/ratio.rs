use std::fmt;

use serde::Serialize;

/// A named financial formula with a fixed set of inputs and one numeric output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioDefinition {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Human-readable form of the formula
    pub formula: &'static str,
    pub category: RatioCategory,
    pub importance: Importance,
    /// Accent color used when displaying the ratio
    pub color: &'static str,
    /// Input names in entry order
    pub inputs: &'static [&'static str],
    pub unit: ResultUnit,
}

impl RatioDefinition {
    /// Label used when a result is saved onto a property
    pub fn result_label(&self) -> String {
        format!("{} Result", self.title)
    }

    /// Inputs that take a comma-separated series rather than a single number
    pub fn is_series_input(&self, name: &str) -> bool {
        name == "cashFlows"
    }

    /// Case-insensitive match against title, description and category
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) ||
            self.description.to_lowercase().contains(&query) ||
            self.category.as_str().to_lowercase().contains(&query)
    }

    pub fn format_result(&self, value: f64) -> String {
        self.unit.format(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatioCategory {
    Returns,
    Valuation,
    Income,
    Expenses,
    Financing,
    Occupancy,
}

impl RatioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioCategory::Returns => "Returns",
            RatioCategory::Valuation => "Valuation",
            RatioCategory::Income => "Income",
            RatioCategory::Expenses => "Expenses",
            RatioCategory::Financing => "Financing",
            RatioCategory::Occupancy => "Occupancy",
        }
    }
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Importance {
    Critical,
    High,
    Medium,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Importance::Critical => write!(f, "Critical"),
            Importance::High => write!(f, "High"),
            Importance::Medium => write!(f, "Medium"),
        }
    }
}

/// How a computed result is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultUnit {
    Percent,
    Plain,
    Currency,
}

impl ResultUnit {
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "N/A".to_string();
        }
        match self {
            ResultUnit::Percent => format!("{:.2}%", value),
            ResultUnit::Plain => format!("{:.2}", value),
            ResultUnit::Currency => format!("${:.2}", value),
        }
    }
}

/// Qualitative judgement of a computed result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRating {
    Good,
    Average,
    NeedsImprovement,
    /// No benchmark exists for this ratio
    Calculated,
}

impl ResultRating {
    /// Rate `value` against the benchmark for `ratio_id`, if one exists
    pub fn for_result(ratio_id: u32, value: f64) -> Self {
        if value.is_nan() {
            return ResultRating::Calculated;
        }
        // (good, average, higher_is_better)
        let (good, average, higher_is_better) = match ratio_id {
            1 => (6.0, 4.0, true),
            2 => (4.0, 2.0, true),
            7 => (35.0, 50.0, false),
            8 => (6.0, 4.0, true),
            9 => (8.0, 5.0, true),
            10 => (75.0, 85.0, false),
            11 => (1.25, 1.0, true),
            _ => {
                return ResultRating::Calculated;
            }
        };

        if higher_is_better {
            if value >= good {
                ResultRating::Good
            } else if value >= average {
                ResultRating::Average
            } else {
                ResultRating::NeedsImprovement
            }
        } else if value <= good {
            ResultRating::Good
        } else if value <= average {
            ResultRating::Average
        } else {
            ResultRating::NeedsImprovement
        }
    }
}

impl fmt::Display for ResultRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultRating::Good => write!(f, "Good"),
            ResultRating::Average => write!(f, "Average"),
            ResultRating::NeedsImprovement => write!(f, "Needs improvement"),
            ResultRating::Calculated => write!(f, "Calculated"),
        }
    }
}
