//! typed accessors over the properties of survey features. the survey files
//! are not consistent about numeric types, so numbers are also accepted when
//! written as strings.
use super::InputError;
use geojson::Feature;
use serde_json::Value;

/// label used to refer to a feature in error messages.
pub fn feature_label(feature: &Feature) -> String {
    match (&feature.id, feature.property("id")) {
        (Some(geojson::feature::Id::String(s)), _) => s.to_string(),
        (Some(geojson::feature::Id::Number(n)), _) => n.to_string(),
        (None, Some(Value::String(s))) => s.to_string(),
        (None, Some(Value::Number(n))) => n.to_string(),
        _ => String::from("<no id>"),
    }
}

/// a present, non-null property value.
pub fn get_property<'a>(feature: &'a Feature, name: &str) -> Result<&'a Value, InputError> {
    match feature.property(name) {
        None | Some(Value::Null) => Err(InputError::MissingProperty {
            feature: feature_label(feature),
            property: name.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

pub fn get_i64(feature: &Feature, name: &str) -> Result<i64, InputError> {
    let value = get_property(feature, name)?;
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    };
    parsed.ok_or_else(|| invalid(feature, name, format!("expected an integer, found '{value}'")))
}

pub fn get_f64(feature: &Feature, name: &str) -> Result<f64, InputError> {
    let value = get_property(feature, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(invalid(
            feature,
            name,
            format!("expected a number, found '{value}'"),
        )),
    }
}

/// a text property. numeric values are accepted, since line names are
/// often plain numbers.
pub fn get_string(feature: &Feature, name: &str) -> Result<String, InputError> {
    let value = get_property(feature, name)?;
    as_text(value).ok_or_else(|| invalid(feature, name, format!("expected text, found '{value}'")))
}

pub fn get_optional_string(feature: &Feature, name: &str) -> Result<Option<String>, InputError> {
    match feature.property(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_text(value)
            .map(Some)
            .ok_or_else(|| invalid(feature, name, format!("expected text, found '{value}'"))),
    }
}

/// an opaque property value, carried through without interpretation.
pub fn get_optional_value(feature: &Feature, name: &str) -> Option<Value> {
    match feature.property(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn invalid(feature: &Feature, name: &str, message: String) -> InputError {
    InputError::InvalidProperty {
        feature: feature_label(feature),
        property: name.to_string(),
        message,
    }
}
