use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use common::types::Message;
use service::records::{Attendance, Customer, DateRange, MessagePair, NewRecord, Record, RecordPatch, Stats};
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath},
    routes::ServerState,
};

const RECORD_NOT_FOUND: &str = "Record not found";

#[utoipa::path(
    get, path = "/api/records", tag = "records",
    responses(
        (status = 200, description = "All records in stored order", body = [Record]),
        (status = 500, description = "Failed to fetch records")
    )
)]
pub async fn list_records(State(state): State<ServerState>) -> Result<Json<Vec<Record>>, JsonApiError> {
    state
        .records
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::internal(e, "Failed to fetch records"))
}

#[utoipa::path(
    get, path = "/api/records/{id}", tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record", body = Record),
        (status = 400, description = "Invalid path parameter"),
        (status = 404, description = "Record not found"),
        (status = 500, description = "Failed to fetch record")
    )
)]
pub async fn get_record(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Record>, JsonApiError> {
    state
        .records
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, RECORD_NOT_FOUND, "Failed to fetch record"))
}

#[utoipa::path(
    post, path = "/api/records", tag = "records",
    request_body = NewRecord,
    responses(
        (status = 201, description = "Created", body = Record),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Failed to create record")
    )
)]
pub async fn create_record(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<NewRecord>,
) -> Result<(StatusCode, Json<Record>), JsonApiError> {
    let rec = state
        .records
        .create(input)
        .await
        .map_err(|e| JsonApiError::internal(e, "Failed to create record"))?;
    Ok((StatusCode::CREATED, Json(rec)))
}

#[utoipa::path(
    put, path = "/api/records/{id}", tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    request_body = RecordPatch,
    responses(
        (status = 200, description = "Updated", body = Record),
        (status = 422, description = "Invalid request body"),
        (status = 400, description = "Invalid path parameter"),
        (status = 404, description = "Record not found"),
        (status = 500, description = "Failed to update record")
    )
)]
pub async fn update_record(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patch): ApiJson<RecordPatch>,
) -> Result<Json<Record>, JsonApiError> {
    state
        .records
        .update(id, patch)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, RECORD_NOT_FOUND, "Failed to update record"))
}

#[utoipa::path(
    delete, path = "/api/records/{id}", tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Deleted (also when the id did not exist or is not a number)"),
        (status = 500, description = "Failed to delete record")
    )
)]
pub async fn delete_record(
    State(state): State<ServerState>,
    ApiPath(raw_id): ApiPath<String>,
) -> Result<Json<Message>, JsonApiError> {
    // a non-numeric id matches no record
    if let Ok(id) = raw_id.parse::<i64>() {
        state
            .records
            .delete(id)
            .await
            .map_err(|e| JsonApiError::internal(e, "Failed to delete record"))?;
    }
    Ok(Json(Message::new("Record deleted successfully")))
}

#[utoipa::path(
    get, path = "/api/stats", tag = "reports",
    params(DateRange),
    responses(
        (status = 200, description = "Aggregate statistics", body = Stats),
        (status = 500, description = "Failed to fetch statistics")
    )
)]
pub async fn stats(
    State(state): State<ServerState>,
    Query(range): Query<DateRange>,
) -> Result<Json<Stats>, JsonApiError> {
    state
        .records
        .stats(&range)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::internal(e, "Failed to fetch statistics"))
}

#[utoipa::path(
    get, path = "/api/attendance/{phone}", tag = "reports",
    params(("phone" = String, Path, description = "Customer phone")),
    responses(
        (status = 200, description = "Attendance summary", body = Attendance),
        (status = 404, description = "No records found for this customer"),
        (status = 500, description = "Failed to fetch attendance")
    )
)]
pub async fn attendance(
    State(state): State<ServerState>,
    ApiPath(phone): ApiPath<String>,
) -> Result<Json<Attendance>, JsonApiError> {
    state
        .records
        .attendance(&phone)
        .await
        .map(Json)
        .map_err(|e| {
            JsonApiError::from_service(e, "No records found for this customer", "Failed to fetch attendance")
        })
}

#[utoipa::path(
    get, path = "/api/customers", tag = "reports",
    responses(
        (status = 200, description = "Customers in first-seen order", body = [Customer]),
        (status = 500, description = "Failed to fetch customers")
    )
)]
pub async fn customers(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, JsonApiError> {
    state
        .records
        .customers()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::internal(e, "Failed to fetch customers"))
}

#[utoipa::path(
    get, path = "/api/export/csv", tag = "reports",
    responses(
        (status = 200, description = "CSV download", body = String, content_type = "text/csv"),
        (status = 500, description = "Failed to export CSV")
    )
)]
pub async fn export_csv(State(state): State<ServerState>) -> Result<impl IntoResponse, JsonApiError> {
    let export = state
        .records
        .export_csv()
        .await
        .map_err(|e| JsonApiError::internal(e, "Failed to export CSV"))?;
    info!(bytes = export.content.len(), "csv export");
    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    ))
}

#[utoipa::path(
    get, path = "/api/message/{id}", tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "English and Tamil notification text", body = MessagePair),
        (status = 400, description = "Invalid path parameter"),
        (status = 404, description = "Record not found"),
        (status = 500, description = "Failed to generate message")
    )
)]
pub async fn message(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessagePair>, JsonApiError> {
    state
        .records
        .message(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, RECORD_NOT_FOUND, "Failed to generate message"))
}
