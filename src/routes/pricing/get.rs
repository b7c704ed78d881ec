use crate::routes::common::{Notice, NoticeQuery};
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "index.html")]
struct PriceFormHtml {
    notice: Option<Notice>,
}

pub async fn show_price_form(query: web::Query<NoticeQuery>) -> HttpResponse {
    PriceFormHtml {
        notice: query.notice(),
    }
    .to_response()
}
