use super::{HarvestEntry, Weekday};
use std::collections::{BTreeMap, HashMap};
use std::ops::AddAssign;

/// Quantity and supplement amounts summed over one or more entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HarvestTotals {
    pub quantity: f64,
    pub food_supplement: f64,
    pub non_food_supplement: f64,
}

impl AddAssign<&HarvestEntry> for HarvestTotals {
    fn add_assign(&mut self, entry: &HarvestEntry) {
        self.quantity += entry.quantity_collected;
        self.food_supplement += entry.food_supplement_total;
        self.non_food_supplement += entry.non_food_supplement_total;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerSummary {
    /// Only days with at least one entry are present.
    pub days: HashMap<Weekday, HarvestTotals>,
    pub weekly: HarvestTotals,
}

impl WorkerSummary {
    /// Per-day totals in Monday..Sunday order, `None` where the worker has no entry.
    pub fn days_in_order(&self) -> impl Iterator<Item = (Weekday, Option<&HarvestTotals>)> {
        Weekday::ALL
            .into_iter()
            .map(|day| (day, self.days.get(&day)))
    }
}

/// Entries grouped by worker and day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarvestReport {
    /// Keyed by `"first last"`, see [`HarvestEntry::worker_name`].
    pub workers: BTreeMap<String, WorkerSummary>,
    pub total_food_supplement: f64,
    pub total_non_food_supplement: f64,
}

impl HarvestReport {
    pub fn from_entries(entries: &[HarvestEntry]) -> Self {
        let mut report = Self::default();

        for entry in entries {
            let worker = report.workers.entry(entry.worker_name()).or_default();
            *worker.days.entry(entry.day).or_default() += entry;
            worker.weekly += entry;

            report.total_food_supplement += entry.food_supplement_total;
            report.total_non_food_supplement += entry.non_food_supplement_total;
        }

        report
    }
}
