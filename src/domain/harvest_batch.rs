use super::form_number::{parse_quantity, parse_required};
use super::{NewHarvestEntry, Weekday};
use crate::error::ValidationError;

/// A worker batch as submitted by `POST /guardar_recolectores`, one entry per form line.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestBatch {
    pub entries: Vec<NewHarvestEntry>,
}

impl HarvestBatch {
    /// Builds a batch from url-encoded `(key, value)` pairs.
    ///
    /// The row arrays (`nombre[]`, `apellido[]`, `dia[]`, `cantidad_recolectada[]`) are zipped by
    /// position and must all have the same length. Unit prices are checked first, so a bad price
    /// rejects the batch regardless of its rows.
    pub fn from_form_fields(fields: &[(String, String)]) -> Result<Self, ValidationError> {
        let scalar = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        let list = |key: &str| {
            fields
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
        };

        let food_price = parse_required("precio_alimentacion", scalar("precio_alimentacion"))?;
        let non_food_price =
            parse_required("precio_no_alimentacion", scalar("precio_no_alimentacion"))?;

        let names = list("nombre[]");
        let last_names = list("apellido[]");
        let days = list("dia[]");
        let quantities = list("cantidad_recolectada[]");

        let rows = names.len();
        if last_names.len() != rows || days.len() != rows || quantities.len() != rows {
            return Err(ValidationError::MismatchedRows {
                names: rows,
                last_names: last_names.len(),
                days: days.len(),
                quantities: quantities.len(),
            });
        }

        let entries = names
            .into_iter()
            .zip(last_names)
            .zip(days)
            .zip(quantities)
            .map(|(((name, last_name), day), quantity)| -> Result<_, ValidationError> {
                Ok(NewHarvestEntry::new(
                    name,
                    last_name,
                    Weekday::parse_or_default(day)?,
                    parse_quantity(quantity),
                    food_price,
                    non_food_price,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }
}
