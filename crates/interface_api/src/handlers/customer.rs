//! Customer handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use core_kernel::CustomerId;

use crate::dto::customer::*;
use crate::extract::{ApiJson, ApiPath};
use crate::{error::ApiError, AppState};

/// Lists all customers
#[instrument(skip(state))]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.service.get_all_customers().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Gets a customer by ID
#[instrument(skip(state), fields(customer_id = %id))]
pub async fn get_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.service.get_customer(id).await?;
    Ok(Json(customer.into()))
}

/// Registers a new customer
#[instrument(skip(state, request))]
pub async fn register_customer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let customer = state.service.add_customer(request.into()).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Applies a partial update to a customer
#[instrument(skip(state, request), fields(customer_id = %id))]
pub async fn update_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
    ApiJson(request): ApiJson<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.service.update_customer(id, request.into()).await?;
    Ok(Json(customer.into()))
}

/// Deletes a customer
#[instrument(skip(state), fields(customer_id = %id))]
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_customer_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
