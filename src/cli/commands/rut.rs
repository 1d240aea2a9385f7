//! Validate a RUT

use tourgate::core::models::{Field, Rut};
use tourgate::output::{FieldResult, OutputMode};

/// Validate a RUT and print its display form
pub fn rut(value: &str, mode: OutputMode) -> anyhow::Result<bool> {
    let parsed = Rut::parse(value);
    log::debug!("rut {value:?} -> {parsed:?}");

    let valid = parsed.is_ok();
    let (formatted, message) = match parsed {
        Ok(rut) => (Some(rut.to_string()), None),
        Err(err) => (None, Some(err.to_string())),
    };

    let result = FieldResult {
        field: Field::NationalId.to_string(),
        input: Some(value.to_string()),
        valid,
        formatted,
        message,
    };
    result.render(mode);

    Ok(valid)
}
