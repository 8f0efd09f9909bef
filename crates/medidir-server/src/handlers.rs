use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use medidir_api::{ApiError, CreateDoctorRequest, DoctorListQuery, UpdateDoctorRequest};
use serde_json::json;

use crate::server::AppState;

pub async fn root() -> &'static str {
    "Doctor Directory API is running"
}

pub async fn list_doctors(
    State(state): State<AppState>,
    Query(params): Query<DoctorListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.into_query();
    let doctors = state
        .storage
        .search(&query)
        .await
        .map_err(|e| ApiError::from_storage("Error fetching doctors", e))?;
    Ok((StatusCode::OK, Json(json!({ "doctors": doctors }))))
}

pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let found = state
        .storage
        .fetch(&id)
        .await
        .map_err(|e| ApiError::from_storage("Error fetching doctor", e))?;
    let doctor = found.ok_or_else(|| ApiError::doctor_not_found(id))?;
    Ok((StatusCode::OK, Json(doctor)))
}

pub async fn create_doctor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let doctor = payload.into_doctor()?;
    let created = state
        .storage
        .insert(doctor)
        .await
        .map_err(|e| ApiError::from_storage("Error creating doctor", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDoctorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let found = state
        .storage
        .fetch(&id)
        .await
        .map_err(|e| ApiError::from_storage("Error updating doctor", e))?;
    let mut doctor = found.ok_or_else(|| ApiError::doctor_not_found(id))?;

    payload.apply(&mut doctor);

    let updated = state
        .storage
        .update(doctor)
        .await
        .map_err(|e| ApiError::from_storage("Error updating doctor", e))?;
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .storage
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_storage("Error deleting doctor", e))?;
    if !removed {
        return Err(ApiError::doctor_not_found(id));
    }
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Doctor deleted successfully" })),
    ))
}

pub async fn seed_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .storage
        .delete_all()
        .await
        .map_err(|e| ApiError::from_storage("Error seeding doctors", e))?;
    let inserted = state
        .storage
        .insert_many(medidir_core::seed_doctors())
        .await
        .map_err(|e| ApiError::from_storage("Error seeding doctors", e))?;
    tracing::info!(removed, inserted, "doctor collection reseeded");
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Doctors seeded successfully" })),
    ))
}
