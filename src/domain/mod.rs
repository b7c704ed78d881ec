mod coffee_cargo;
mod form_number;
mod harvest_batch;
mod harvest_entry;
mod harvest_report;
mod new_harvest_entry;
mod weekday;

pub use coffee_cargo::{CoffeeCargo, CoffeeCargoForm, PriceBreakdown};
pub use harvest_batch::HarvestBatch;
pub use harvest_entry::HarvestEntry;
pub use harvest_report::{HarvestReport, HarvestTotals, WorkerSummary};
pub use new_harvest_entry::NewHarvestEntry;
pub use weekday::Weekday;
