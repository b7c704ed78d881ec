use crate::domain::{HarvestEntry, Weekday};
use crate::routes::common::filters::format_two_decimals;
use crate::routes::common::{Notice, NoticeQuery};
use crate::store::HarvestStore;
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};

struct DayOption {
    label: &'static str,
    selected: bool,
}

/// One editable line of the batch form.
struct EntryRow {
    first_name: String,
    last_name: String,
    days: Vec<DayOption>,
    quantity: String,
    food_supplement: String,
    non_food_supplement: String,
}

impl EntryRow {
    fn blank() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            days: day_options(Weekday::default()),
            quantity: String::new(),
            food_supplement: String::new(),
            non_food_supplement: String::new(),
        }
    }
}

impl From<&HarvestEntry> for EntryRow {
    fn from(entry: &HarvestEntry) -> Self {
        Self {
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            days: day_options(entry.day),
            quantity: entry.quantity_collected.to_string(),
            food_supplement: format_two_decimals(entry.food_supplement_total),
            non_food_supplement: format_two_decimals(entry.non_food_supplement_total),
        }
    }
}

fn day_options(selected: Weekday) -> Vec<DayOption> {
    Weekday::ALL
        .into_iter()
        .map(|day| DayOption {
            label: day.label(),
            selected: day == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "harvest_table.html")]
struct HarvestTableHtml {
    notice: Option<Notice>,
    rows: Vec<EntryRow>,
    recorded_at: Option<String>,
}

pub async fn show_harvest_table(
    store: web::Data<HarvestStore>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let entries = match store.list_all().await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to list harvest entries: {}", e);
            return HttpResponse::InternalServerError().body("Error reading harvest entries.");
        }
    };

    let recorded_at = entries
        .iter()
        .map(|entry| entry.recorded_at)
        .max()
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string());

    let mut rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    if rows.is_empty() {
        rows.push(EntryRow::blank());
    }

    HarvestTableHtml {
        notice: query.notice(),
        rows,
        recorded_at,
    }
    .to_response()
}
