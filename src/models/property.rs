use std::fmt;
use std::str::FromStr;

use chrono::{ DateTime, NaiveDate };
use serde::{ Deserialize, Serialize };

use crate::errors::{ CalcEstateError, CalcResult };

/// Accent colors offered when creating a property. The first entry is the default.
pub const COLOR_PALETTE: [&str; 8] = [
    "#6366F1",
    "#EF4444",
    "#F59E0B",
    "#10B981",
    "#8B5CF6",
    "#EC4899",
    "#06B6D4",
    "#F97316",
];

pub const DEFAULT_COLOR: &str = COLOR_PALETTE[0];

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// A user-created record for a tracked real-estate asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    /// Hex color, `#RRGGBB`
    pub color: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Display order is insertion order
    pub data_fields: Vec<DataField>,
}

impl Property {
    pub fn field(&self, field_id: &str) -> Option<&DataField> {
        self.data_fields.iter().find(|f| f.id == field_id)
    }

    /// Relative age label such as "Today" or "3w ago"
    pub fn time_ago(&self, now_millis: i64) -> String {
        let days = (now_millis - self.created_at).div_euclid(MILLIS_PER_DAY);
        match days {
            d if d <= 0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            d if d < 7 => format!("{} days ago", d),
            d => format!("{}w ago", d / 7),
        }
    }
}

/// A single labeled value attached to a property. Values are always stored as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataField {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl DataField {
    /// Short display form of the value, by type
    pub fn preview(&self) -> String {
        match self.field_type {
            FieldType::Date =>
                match parse_date(&self.value) {
                    Some(date) => date.format("%b %-d").to_string(),
                    None => "Invalid Date".to_string(),
                }
            FieldType::Boolean => {
                if self.value == "true" { "Yes".to_string() } else { "No".to_string() }
            }
            FieldType::Number =>
                match self.value.trim().parse::<f64>() {
                    Ok(n) => group_thousands(n),
                    Err(_) => "NaN".to_string(),
                }
            FieldType::Text => {
                if self.value.chars().count() > 20 {
                    let head: String = self.value.chars().take(20).collect();
                    format!("{}...", head)
                } else {
                    self.value.clone()
                }
            }
        }
    }
}

/// Declared type of a data field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
        }
    }

    /// Check that `value` can be rendered as this type
    pub fn validate(&self, value: &str) -> CalcResult<()> {
        let ok = match self {
            FieldType::Text => true,
            FieldType::Number => {
                value
                    .trim()
                    .parse::<f64>()
                    .map(|n| n.is_finite())
                    .unwrap_or(false)
            }
            FieldType::Date => parse_date(value).is_some(),
            FieldType::Boolean => value == "true" || value == "false",
        };
        if ok {
            Ok(())
        } else {
            Err(CalcEstateError::InvalidFieldValue {
                value: value.to_string(),
                field_type: self.as_str().to_string(),
            })
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CalcEstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            _ => Err(CalcEstateError::InvalidInput(format!("Unknown field type: {}", s))),
        }
    }
}

/// Check that `color` is a `#RRGGBB` hex string
pub fn validate_color(color: &str) -> CalcResult<()> {
    let valid =
        color.len() == 7 &&
        color.starts_with('#') &&
        color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(CalcEstateError::InvalidInput(format!("Color must be #RRGGBB, got {:?}", color)))
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

// en-US style: comma grouping, at most three fraction digits
fn group_thousands(n: f64) -> String {
    if !n.is_finite() {
        return if n.is_nan() { "NaN".to_string() } else if n > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    let rendered = format!("{:.3}", n.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if n < 0.0 && (int_part != "0" || !frac.is_empty()) { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}
