//! Wire DTOs — the collaborator JSON shapes, verbatim.
//!
//! Field names follow the collaborator contract (`car_id`, `distance_km`,
//! `highlight_car_id`, …); conversions into `ride-core` types happen here
//! and nowhere else.

use serde::{Deserialize, Serialize};

use ride_core::{CarId, GeoPoint, RoutePath, Vehicle};
use ride_session::ChatOutcome;

/// One entry of `GET /api/cars/nearby`, sorted ascending by `distance_km`.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyCarDto {
    pub car_id: String,
    pub lat: f64,
    pub lng: f64,
    pub heading: f64,
    pub distance_km: f64,
}

impl From<NearbyCarDto> for Vehicle {
    fn from(dto: NearbyCarDto) -> Self {
        Vehicle {
            id: CarId(dto.car_id),
            position: GeoPoint::new(dto.lat, dto.lng),
            heading_deg: dto.heading,
            distance_km: dto.distance_km,
        }
    }
}

/// `GET /api/route` — coordinates in `[lng, lat]` order, distance in
/// metres, duration in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub coordinates: Vec<[f64; 2]>,
    pub distance: f64,
    pub duration: f64,
}

impl From<RouteDto> for RoutePath {
    fn from(dto: RouteDto) -> Self {
        RoutePath::new(dto.coordinates, dto.distance, dto.duration)
    }
}

/// `GET /api/route/car-to-user`.
#[derive(Debug, Clone, Deserialize)]
pub struct CarToUserRouteDto {
    pub car_id: String,
    pub user_lat: f64,
    pub user_lng: f64,
    pub coordinates: Vec<[f64; 2]>,
    pub distance: f64,
    pub duration: f64,
}

impl From<CarToUserRouteDto> for RoutePath {
    fn from(dto: CarToUserRouteDto) -> Self {
        RoutePath::new(dto.coordinates, dto.distance, dto.duration)
    }
}

/// `POST /api/chat` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequestDto {
    pub message: String,
    pub user_lat: f64,
    pub user_lng: f64,
}

/// `POST /api/chat` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseDto {
    pub reply: String,
    #[serde(default)]
    pub cars: Vec<NearbyCarDto>,
    #[serde(default)]
    pub highlight_car_id: Option<String>,
}

impl From<ChatResponseDto> for ChatOutcome {
    fn from(dto: ChatResponseDto) -> Self {
        ChatOutcome {
            reply: dto.reply,
            vehicles: dto.cars.into_iter().map(Vehicle::from).collect(),
            highlight: dto.highlight_car_id.map(CarId),
        }
    }
}

/// `POST /api/spawn-car` request body (fleet-sim control).
#[derive(Debug, Clone, Serialize)]
pub struct SpawnCarDto {
    pub start_lng: f64,
    pub start_lat: f64,
    pub end_lng: f64,
    pub end_lat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}
