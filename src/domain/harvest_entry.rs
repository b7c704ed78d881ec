use super::Weekday;
use chrono::NaiveDateTime;

/// A stored harvest row. Supplement totals are fixed at save time.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct HarvestEntry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub day: Weekday,
    /// Kilograms collected.
    pub quantity_collected: f64,
    pub food_supplement_total: f64,
    pub non_food_supplement_total: f64,
    /// When the batch containing this row was saved (UTC).
    pub recorded_at: NaiveDateTime,
}

impl HarvestEntry {
    /// `"first last"`, trimmed. Workers without a name share the empty key.
    pub fn worker_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
