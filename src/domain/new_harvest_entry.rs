use super::Weekday;

/// A harvest row ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHarvestEntry {
    pub first_name: String,
    pub last_name: String,
    pub day: Weekday,
    pub quantity_collected: f64,
    pub food_supplement_total: f64,
    pub non_food_supplement_total: f64,
}

impl NewHarvestEntry {
    /// Derives both supplement totals from the collected quantity.
    pub fn new(
        first_name: &str,
        last_name: &str,
        day: Weekday,
        quantity_collected: f64,
        food_price: f64,
        non_food_price: f64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            day,
            quantity_collected,
            food_supplement_total: quantity_collected * food_price,
            non_food_supplement_total: quantity_collected * non_food_price,
        }
    }
}
