//! Hotel Handlers

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::application::dto::{HotelDetailResponse, HotelResponse};
use crate::application::services::HotelError;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Helper to convert HotelError to AppError
fn map_hotel_error(e: HotelError) -> AppError {
    match e {
        HotelError::NotFound => AppError::NotFound("No result for this search!".into()),
        HotelError::PaymentRequired(reason) => AppError::PaymentRequired(reason.to_string()),
        HotelError::Internal(msg) => AppError::Internal(msg),
    }
}

/// List all hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<HotelResponse>>, AppError> {
    let hotels = state
        .hotel_service
        .list_hotels(auth.user_id)
        .await
        .map_err(map_hotel_error)?;

    Ok(Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

/// Get a hotel with its rooms
pub async fn get_hotel(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelDetailResponse>, AppError> {
    // An id that is not an i32 cannot match a hotel, but eligibility
    // errors still take precedence over the 404.
    let Ok(hotel_id) = hotel_id.parse::<i32>() else {
        state
            .hotel_service
            .check_eligibility(auth.user_id)
            .await
            .map_err(map_hotel_error)?;
        return Err(map_hotel_error(HotelError::NotFound));
    };

    let hotel = state
        .hotel_service
        .get_hotel(auth.user_id, hotel_id)
        .await
        .map_err(map_hotel_error)?;

    Ok(Json(HotelDetailResponse::from(hotel)))
}
