use crate::domain::{HarvestReport, HarvestTotals, Weekday};
use crate::routes::common::filters;
use crate::routes::common::{Notice, NoticeQuery};
use crate::store::HarvestStore;
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};

struct WorkerRow {
    name: String,
    /// Monday..Sunday
    days: Vec<Option<HarvestTotals>>,
    weekly: HarvestTotals,
}

#[derive(Template)]
#[template(path = "harvest_report.html")]
struct HarvestReportHtml {
    notice: Option<Notice>,
    day_labels: Vec<&'static str>,
    workers: Vec<WorkerRow>,
    total_food_supplement: f64,
    total_non_food_supplement: f64,
}

impl From<HarvestReport> for HarvestReportHtml {
    fn from(report: HarvestReport) -> Self {
        let workers = report
            .workers
            .iter()
            .map(|(name, summary)| WorkerRow {
                name: name.clone(),
                days: summary
                    .days_in_order()
                    .map(|(_, totals)| totals.copied())
                    .collect(),
                weekly: summary.weekly,
            })
            .collect();

        Self {
            notice: None,
            day_labels: Weekday::ALL.into_iter().map(Weekday::label).collect(),
            workers,
            total_food_supplement: report.total_food_supplement,
            total_non_food_supplement: report.total_non_food_supplement,
        }
    }
}

pub async fn show_harvest_report(
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

    let mut html = HarvestReportHtml::from(HarvestReport::from_entries(&entries));
    html.notice = query.notice();
    html.to_response()
}
