use crate::domain::{CoffeeCargo, CoffeeCargoForm, PriceBreakdown};
use crate::routes::common::filters;
use crate::routes::common::{Notice, redirect_with_notice};
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "price_breakdown.html")]
struct PriceBreakdownHtml {
    notice: Option<Notice>,
    cargo: CoffeeCargo,
    breakdown: PriceBreakdown,
}

pub async fn calculate_price(
    form: Result<web::Form<CoffeeCargoForm>, actix_web::Error>,
) -> HttpResponse {
    let cargo = match form
        .map_err(|e| e.to_string())
        .and_then(|form| CoffeeCargo::try_from(form.into_inner()).map_err(|e| e.to_string()))
    {
        Ok(cargo) => cargo,
        Err(e) => {
            tracing::warn!("Rejected price calculation: {}", e);
            return redirect_with_notice("/", Notice::InvalidData);
        }
    };

    let breakdown = cargo.price();
    tracing::debug!(total = breakdown.price_total, "Calculated cargo price");

    PriceBreakdownHtml {
        notice: None,
        cargo,
        breakdown,
    }
    .to_response()
}
