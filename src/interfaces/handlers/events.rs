use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    entities::{event::EventCreatedResponse, upload::SpreadsheetUpload},
    errors::AppError,
    ingest::cell::ImportRow,
    spreadsheet::{is_excel_file, read_rows},
    use_cases::extractors::AdminClaims,
    AppState,
};

#[post("/upload-excel")]
pub async fn upload_events(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<SpreadsheetUpload>,
) -> Result<HttpResponse, AppError> {
    let filename = form.file.file_name.clone().unwrap_or_default();
    if !is_excel_file(&filename) {
        return Err(AppError::InvalidInput("Only Excel files are allowed".to_string()));
    }

    let rows = read_rows(form.file.file.path())?;
    let count = state.event_handler.import(rows).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Events uploaded successfully",
        "totalEvents": count,
        "insertedEvents": count
    })))
}

#[post("")]
pub async fn create_event(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<ImportRow>,
) -> Result<HttpResponse, AppError> {
    let id = state.event_handler.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(EventCreatedResponse {
        message: "Event created successfully".to_string(),
        event_id: id,
    }))
}

#[get("")]
pub async fn get_all_events(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let events = state.event_handler.list().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[get("/{id}")]
pub async fn get_event_by_id(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let event = state.event_handler.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

#[put("/{id}")]
pub async fn update_event(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<ImportRow>,
) -> Result<HttpResponse, AppError> {
    state
        .event_handler
        .update(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Event updated successfully"})))
}

#[delete("/{id}")]
pub async fn delete_event(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.event_handler.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Event deleted successfully"})))
}
