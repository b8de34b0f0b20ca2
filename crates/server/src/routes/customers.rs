use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Deserializer};
use service::customer::Customer;
use tracing::{info, warn};

use crate::{
    errors::ApiError,
    response::{generate_response, message_only, ApiResponse},
    state::ServerState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub user_id: Option<i64>,
}

/// `?userId=` means no filter, same as leaving the parameter out.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `id` is only checked for collisions; the store picks the real id.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCustomerInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateCustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Customer with id {id} not found"))
}

#[utoipa::path(
    get, path = "/api/v1/customer", tag = "customer",
    params(("userId" = Option<i64>, Query, description = "Only return the customer with this id")),
    responses(
        (status = 200, description = "Customers found", body = Vec<crate::openapi::CustomerDoc>),
        (status = 204, description = "There are no customers"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Customer>>, ApiError> {
    let Query(q) = query?;
    let found = state.customers.list_all(q.user_id).await.map_err(ApiError::internal)?;
    if found.is_empty() {
        return Ok(generate_response(Some("No customers found".into()), StatusCode::NO_CONTENT, None));
    }
    Ok(generate_response(None, StatusCode::OK, Some(found)))
}

#[utoipa::path(
    get, path = "/api/v1/customer/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer successfully retrieved by id", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let Path(id) = path?;
    match state.customers.get_by_id(id).await.map_err(ApiError::internal)? {
        Some(c) => Ok(generate_response(None, StatusCode::OK, Some(c))),
        None => Err(not_found(id)),
    }
}

#[utoipa::path(
    post, path = "/api/v1/customer", tag = "customer",
    request_body = CreateCustomerInput,
    responses(
        (status = 201, description = "Customer created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateCustomerInput>, JsonRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let Json(input) = body?;
    if let Some(id) = input.id {
        if state.customers.get_by_id(id).await?.is_some() {
            warn!(id, "create rejected, id already taken");
            return Err(ApiError::BadRequest(format!("Customer with id {id} already exists")));
        }
    }
    let name = required(input.name, "name")?;
    let email = required(input.email, "email")?;

    let created = state.customers.create(&name, &email).await?;
    info!(id = created.id, "created customer");
    Ok(generate_response(Some("Customer created".into()), StatusCode::CREATED, Some(created)))
}

#[utoipa::path(
    put, path = "/api/v1/customer/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = UpdateCustomerInput,
    responses(
        (status = 200, description = "Customer updated successfully", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateCustomerInput>, JsonRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    let Some(mut existing) = state.customers.get_by_id(id).await? else {
        return Err(not_found(id));
    };
    existing.name = required(input.name, "name")?;
    existing.email = required(input.email, "email")?;

    let saved = state.customers.save(existing).await?;
    info!(id = saved.id, "updated customer");
    Ok(generate_response(Some("Customer updated successfully".into()), StatusCode::OK, Some(saved)))
}

#[utoipa::path(
    delete, path = "/api/v1/customer/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted successfully"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let Path(id) = path?;
    if state.customers.get_by_id(id).await.map_err(ApiError::internal)?.is_none() {
        return Err(not_found(id));
    }
    // a concurrent delete can still win between the lookup and here
    state.customers.delete_by_id(id).await.map_err(|e| match e {
        service::errors::ServiceError::NotFound(_) => not_found(id),
        other => ApiError::internal(other),
    })?;
    info!(id, "deleted customer");
    Ok(message_only("Customer deleted successfully", StatusCode::NO_CONTENT))
}

#[utoipa::path(
    get, path = "/api/v1/customer/email", tag = "customer",
    params(("email" = String, Query, description = "Email to look up")),
    responses(
        (status = 200, description = "Customer successfully retrieved by email", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Missing email"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get_by_email(
    State(state): State<ServerState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let Query(q) = query?;
    let email = q
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("email query parameter is required".into()))?;
    match state.customers.get_by_email(&email).await.map_err(ApiError::internal)? {
        Some(c) => Ok(generate_response(None, StatusCode::OK, Some(c))),
        None => Err(ApiError::NotFound(format!("Customer with email {email} not found"))),
    }
}
