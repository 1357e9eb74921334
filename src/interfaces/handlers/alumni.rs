use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    entities::{alumni::AlumniCreatedResponse, upload::SpreadsheetUpload},
    errors::AppError,
    ingest::cell::ImportRow,
    spreadsheet::{is_excel_file, read_rows},
    use_cases::extractors::AdminClaims,
    AppState,
};

#[post("/upload-excel")]
pub async fn upload_alumni(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<SpreadsheetUpload>,
) -> Result<HttpResponse, AppError> {
    let filename = form.file.file_name.clone().unwrap_or_default();
    if !is_excel_file(&filename) {
        return Err(AppError::InvalidInput("Only Excel files are allowed".to_string()));
    }

    let rows = read_rows(form.file.file.path())?;
    let count = state.alumni_handler.import(rows).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": format!("Successfully uploaded {} alumni records", count),
        "uploadedCount": count
    })))
}

#[post("")]
pub async fn create_alumni(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<ImportRow>,
) -> Result<HttpResponse, AppError> {
    let id = state.alumni_handler.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(AlumniCreatedResponse {
        message: "Alumni added successfully".to_string(),
        alumni_id: id,
    }))
}

#[get("")]
pub async fn get_all_alumni(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let alumni = state.alumni_handler.list().await?;
    Ok(HttpResponse::Ok().json(alumni))
}

#[get("/{id}")]
pub async fn get_alumni_by_id(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let alumni = state.alumni_handler.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(alumni))
}

#[put("/{id}")]
pub async fn update_alumni(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<ImportRow>,
) -> Result<HttpResponse, AppError> {
    state
        .alumni_handler
        .update(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Alumni updated successfully"})))
}

#[delete("/{id}")]
pub async fn delete_alumni(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.alumni_handler.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Alumni deleted successfully"})))
}
