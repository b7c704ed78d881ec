use crate::routes::common::{Notice, redirect_with_notice};
use crate::store::HarvestStore;
use actix_web::{HttpResponse, web};

pub async fn clear_harvest_entries(store: web::Data<HarvestStore>) -> HttpResponse {
    match store.clear_all().await {
        Ok(removed) => {
            tracing::info!(rows = removed, "Cleared harvest entries");
            redirect_with_notice("/ver_registros", Notice::Cleared)
        }
        Err(e) => {
            tracing::error!("Failed to clear harvest entries: {}", e);
            redirect_with_notice("/ver_registros", Notice::ClearFailed)
        }
    }
}
