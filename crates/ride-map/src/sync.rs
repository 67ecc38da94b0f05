//! The reconciliation pass.

use std::collections::{HashMap, HashSet};

use ride_core::{CarId, GeoPoint};
use ride_session::SceneSnapshot;

use crate::{Bounds, MapSurface, PointKind};

/// Visual state of one vehicle marker, as last pushed to the surface.
#[derive(Clone, Debug, PartialEq)]
struct VehicleVisual {
    position: GeoPoint,
    heading_deg: f64,
    selected: bool,
}

/// Reconciles the retained map surface against session snapshots.
///
/// Owns the id-indexed marker table and the last *applied* snapshot — the
/// baseline for every diff.  Applying the same snapshot twice performs zero
/// surface operations the second time: the diff is snapshot-equality-aware,
/// not event-count-aware.
pub struct MapSync<S: MapSurface> {
    surface: S,
    /// `true` once the user marker exists; it is never removed while the
    /// session runs.
    user_placed: bool,
    /// Marker table: exactly one entry per vehicle id on the surface.
    markers: HashMap<CarId, VehicleVisual>,
    applied: SceneSnapshot,
}

impl<S: MapSurface> MapSync<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            user_placed: false,
            markers: HashMap::new(),
            applied: SceneSnapshot::default(),
        }
    }

    /// Access the underlying surface (for drivers that also own it).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// One reconciliation pass.
    pub fn apply(&mut self, snapshot: &SceneSnapshot) {
        if *snapshot == self.applied {
            return;
        }
        self.sync_user(snapshot);
        self.sync_point(
            PointKind::Pickup,
            self.applied.pickup,
            snapshot.pickup,
        );
        self.sync_point(
            PointKind::Dropoff,
            self.applied.dropoff,
            snapshot.dropoff,
        );
        self.sync_vehicles(snapshot);
        self.sync_route(snapshot);
        self.applied = snapshot.clone();
    }

    // ── User marker ───────────────────────────────────────────────────────

    fn sync_user(&mut self, snapshot: &SceneSnapshot) {
        let Some(at) = snapshot.user_location else { return };
        if !self.user_placed {
            self.surface.place_user(at);
            self.user_placed = true;
            // One-time recentring — skipped when a pickup already exists so
            // the camera is not yanked away from a user-chosen point.
            if snapshot.pickup.is_none() {
                self.surface.fly_to(at);
            }
        } else if self.applied.user_location != Some(at) {
            self.surface.move_user(at);
        }
    }

    // ── Pickup / dropoff markers ──────────────────────────────────────────

    fn sync_point(&mut self, kind: PointKind, before: Option<GeoPoint>, after: Option<GeoPoint>) {
        match (before, after) {
            (None, Some(p)) => self.surface.place_point(kind, p),
            (Some(old), Some(new)) if old != new => self.surface.move_point(kind, new),
            (Some(_), None) => self.surface.remove_point(kind),
            _ => {}
        }
    }

    // ── Vehicle markers ───────────────────────────────────────────────────

    fn sync_vehicles(&mut self, snapshot: &SceneSnapshot) {
        let latest: HashSet<&CarId> = snapshot.vehicles.iter().map(|v| &v.id).collect();

        // creates = latest − previous
        for vehicle in &snapshot.vehicles {
            if self.markers.contains_key(&vehicle.id) {
                continue;
            }
            let selected = snapshot.selected.as_ref() == Some(&vehicle.id);
            self.surface
                .add_vehicle(&vehicle.id, vehicle.position, vehicle.heading_deg, selected);
            self.markers.insert(
                vehicle.id.clone(),
                VehicleVisual {
                    position: vehicle.position,
                    heading_deg: vehicle.heading_deg,
                    selected,
                },
            );
        }

        // removes = previous − latest, each id removed exactly once
        let gone: Vec<CarId> = self
            .markers
            .keys()
            .filter(|id| !latest.contains(*id))
            .cloned()
            .collect();
        for id in gone {
            self.surface.remove_vehicle(&id);
            self.markers.remove(&id);
        }

        // updates = latest ∩ previous, mutated in place and only on change
        for vehicle in &snapshot.vehicles {
            let selected = snapshot.selected.as_ref() == Some(&vehicle.id);
            let desired = VehicleVisual {
                position: vehicle.position,
                heading_deg: vehicle.heading_deg,
                selected,
            };
            let Some(visual) = self.markers.get_mut(&vehicle.id) else {
                continue;
            };
            if *visual != desired {
                self.surface.update_vehicle(
                    &vehicle.id,
                    vehicle.position,
                    vehicle.heading_deg,
                    selected,
                );
                *visual = desired;
            }
        }
    }

    // ── Route line ────────────────────────────────────────────────────────

    fn sync_route(&mut self, snapshot: &SceneSnapshot) {
        if self.applied.route == snapshot.route {
            return;
        }
        let coords = snapshot
            .route
            .as_ref()
            .filter(|r| !r.is_empty())
            .map(|r| r.coordinates.as_slice());
        match coords {
            Some(coords) => {
                self.surface.set_route(coords);
                let mut bounds = Bounds::around(GeoPoint::new(coords[0][1], coords[0][0]));
                for &[lng, lat] in coords {
                    bounds.extend(GeoPoint::new(lat, lng));
                }
                if let Some(user) = snapshot.user_location {
                    bounds.extend(user);
                }
                self.surface.fit_bounds(bounds);
            }
            None => {
                let had_route = self
                    .applied
                    .route
                    .as_ref()
                    .is_some_and(|r| !r.is_empty());
                if had_route {
                    self.surface.clear_route();
                }
            }
        }
    }
}
