use crate::domain::HarvestBatch;
use crate::error::SaveError;
use crate::routes::common::{Notice, redirect_with_notice};
use crate::store::HarvestStore;
use actix_web::{HttpResponse, web};

const HARVEST_TABLE: &str = "/tabla_recolectores";

/// Validates the submitted lines and replaces the stored batch with them.
pub async fn save_batch(
    store: &HarvestStore,
    fields: &[(String, String)],
) -> Result<usize, SaveError> {
    let batch = HarvestBatch::from_form_fields(fields)?;
    let saved = store.replace_all(&batch.entries).await?;
    Ok(saved)
}

pub async fn save_harvest_batch(
    store: web::Data<HarvestStore>,
    form: Result<web::Form<Vec<(String, String)>>, actix_web::Error>,
) -> HttpResponse {
    let fields = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            tracing::warn!("Unreadable worker batch form: {}", e);
            return redirect_with_notice(HARVEST_TABLE, Notice::InvalidData);
        }
    };

    match save_batch(&store, &fields).await {
        Ok(saved) => {
            tracing::info!(rows = saved, "Saved worker batch");
            redirect_with_notice(HARVEST_TABLE, Notice::Saved)
        }
        Err(SaveError::Validation(e)) => {
            tracing::warn!("Rejected worker batch: {}", e);
            redirect_with_notice(HARVEST_TABLE, Notice::InvalidData)
        }
        Err(SaveError::Store(e)) => {
            tracing::error!("Failed to store worker batch: {}", e);
            redirect_with_notice(HARVEST_TABLE, Notice::SaveFailed)
        }
    }
}
