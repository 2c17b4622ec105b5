use std::collections::HashMap;

use crate::errors::{ CalcEstateError, CalcResult };

/// A single calculator input
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Number(f64),
    Series(Vec<f64>),
}

/// Named inputs handed to the formula evaluator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioInputs {
    values: HashMap<String, InputValue>,
}

impl RatioInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a numeric input
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set_number(name, value);
        self
    }

    /// Builder-style insert of a series input
    pub fn with_series(mut self, name: &str, values: Vec<f64>) -> Self {
        self.values.insert(name.to_string(), InputValue::Series(values));
        self
    }

    pub fn set_number(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), InputValue::Number(value));
    }

    pub fn set(&mut self, name: &str, value: InputValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Numeric value of `name`; missing or non-numeric inputs are NaN
    pub fn number(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(InputValue::Number(n)) => *n,
            _ => f64::NAN,
        }
    }

    /// Series value of `name`. A single number reads as a one-element series.
    pub fn series(&self, name: &str) -> Option<Vec<f64>> {
        match self.values.get(name)? {
            InputValue::Series(values) => Some(values.clone()),
            InputValue::Number(n) => Some(vec![*n]),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse calculator text: empty is 0, otherwise the leading float prefix, else NaN
pub fn parse_number_input(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    parse_float_prefix(text)
}

/// Parse a comma-separated series; each element follows `parse_number_input`
pub fn parse_series_input(text: &str) -> Vec<f64> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(|part| parse_number_input(part.trim()))
        .collect()
}

/// Split a `name=value` argument into its parts
pub fn parse_assignment(arg: &str) -> CalcResult<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CalcEstateError::InvalidInput(format!("Expected name=value, got {:?}", arg))),
    }
}

/// Longest numeric prefix of `text`, after leading whitespace. NaN when there is none.
pub fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
