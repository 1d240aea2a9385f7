//! Validate a single traveler field

use tourgate::adapters::MemoryNotifier;
use tourgate::core::models::{Field, Policy};
use tourgate::core::services::{Gate, format_national_id};
use tourgate::output::{FieldResult, OutputMode};

use super::resolve_today;

/// Validate one field value
pub fn field(
    field: Field,
    value: Option<&str>,
    today: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let today = resolve_today(today)?;
    let notifier = MemoryNotifier::new();
    let gate = Gate::new(&notifier, Policy::default());

    let valid = gate.check_field(field, value, today);
    log::debug!("{field} {value:?} valid={valid}");

    let formatted = match (field, value) {
        (Field::NationalId, Some(v)) => format_national_id(v),
        _ => None,
    };

    let result = FieldResult {
        field: field.to_string(),
        input: value.map(str::to_string),
        valid,
        formatted,
        message: notifier.take().into_iter().next().map(|notice| notice.message),
    };
    result.render(mode);

    Ok(valid)
}
