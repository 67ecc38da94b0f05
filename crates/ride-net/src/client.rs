//! HTTP clients for the external collaborators.

use ride_core::{CarId, GeoPoint, RoutePath, Vehicle};
use ride_session::ChatOutcome;

use crate::wire::{
    CarToUserRouteDto, ChatRequestDto, ChatResponseDto, NearbyCarDto, RouteDto, SpawnCarDto,
};
use crate::{NetConfig, NetResult};

/// One client for all collaborator endpoints.
///
/// Cheap to clone (shares the underlying connection pool); the runtime
/// hands clones to its request tasks.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &NetConfig) -> NetResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    // ── Fleet ─────────────────────────────────────────────────────────────

    /// Vehicles around `center`, sorted ascending by distance from it.
    pub async fn nearby_vehicles(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> NetResult<Vec<Vehicle>> {
        let dtos: Vec<NearbyCarDto> = self
            .http
            .get(format!("{}/api/cars/nearby", self.base))
            .query(&[
                ("user_lat", center.lat),
                ("user_lng", center.lng),
                ("radius_km", radius_km),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dtos.into_iter().map(Vehicle::from).collect())
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Route between two points.  Fails when no path exists.
    pub async fn route(&self, start: GeoPoint, end: GeoPoint) -> NetResult<RoutePath> {
        let dto: RouteDto = self
            .http
            .get(format!("{}/api/route", self.base))
            .query(&[
                ("start_lng", start.lng),
                ("start_lat", start.lat),
                ("end_lng", end.lng),
                ("end_lat", end.lat),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dto.into())
    }

    /// Route from `car` to the rider's reference point.
    pub async fn car_to_user_route(&self, car: &CarId, user: GeoPoint) -> NetResult<RoutePath> {
        let dto: CarToUserRouteDto = self
            .http
            .get(format!("{}/api/route/car-to-user", self.base))
            .query(&[("car_id", car.as_str())])
            .query(&[("user_lat", user.lat), ("user_lng", user.lng)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dto.into())
    }

    // ── Chat ──────────────────────────────────────────────────────────────

    /// Forward a free-text command to the interpreter.
    pub async fn chat(&self, message: &str, origin: GeoPoint) -> NetResult<ChatOutcome> {
        let dto: ChatResponseDto = self
            .http
            .post(format!("{}/api/chat", self.base))
            .json(&ChatRequestDto {
                message: message.to_owned(),
                user_lat: origin.lat,
                user_lng: origin.lng,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dto.into())
    }

    // ── Fleet-sim control (peripheral) ────────────────────────────────────

    /// Spawn a simulated vehicle travelling `start` → `end`.
    pub async fn spawn_car(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        speed: Option<f64>,
    ) -> NetResult<()> {
        self.http
            .post(format!("{}/api/spawn-car", self.base))
            .json(&SpawnCarDto {
                start_lng: start.lng,
                start_lat: start.lat,
                end_lng: end.lng,
                end_lat: end.lat,
                speed,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Reset the fleet simulation.
    pub async fn reset_simulation(&self) -> NetResult<()> {
        self.http
            .post(format!("{}/api/reset", self.base))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
