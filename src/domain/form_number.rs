use crate::error::ValidationError;

/// Parses a required numeric form field. `inf` and `NaN` are rejected.
pub fn parse_required(field: &'static str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingField(field))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Parses a harvested quantity. Blank, unparseable or non-finite input counts as `0.0`.
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
