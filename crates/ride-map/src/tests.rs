//! Reconciliation tests against a recording surface.

use ride_core::{CarId, GeoPoint, RoutePath, Vehicle};
use ride_session::SceneSnapshot;

use crate::{Bounds, MapSurface, MapSync, PointKind};

// ── Recording double ──────────────────────────────────────────────────────────

/// Every surface mutation, in call order.
#[derive(Clone, Debug, PartialEq)]
enum Op {
    PlaceUser(GeoPoint),
    MoveUser(GeoPoint),
    PlacePoint(PointKind, GeoPoint),
    MovePoint(PointKind, GeoPoint),
    RemovePoint(PointKind),
    AddVehicle(CarId, bool),
    UpdateVehicle(CarId, GeoPoint, f64, bool),
    RemoveVehicle(CarId),
    SetRoute(usize),
    ClearRoute,
    FlyTo(GeoPoint),
    FitBounds(Bounds),
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl MapSurface for RecordingSurface {
    fn place_user(&mut self, at: GeoPoint) {
        self.ops.push(Op::PlaceUser(at));
    }
    fn move_user(&mut self, to: GeoPoint) {
        self.ops.push(Op::MoveUser(to));
    }
    fn place_point(&mut self, kind: PointKind, at: GeoPoint) {
        self.ops.push(Op::PlacePoint(kind, at));
    }
    fn move_point(&mut self, kind: PointKind, to: GeoPoint) {
        self.ops.push(Op::MovePoint(kind, to));
    }
    fn remove_point(&mut self, kind: PointKind) {
        self.ops.push(Op::RemovePoint(kind));
    }
    fn add_vehicle(&mut self, id: &CarId, _at: GeoPoint, _heading_deg: f64, selected: bool) {
        self.ops.push(Op::AddVehicle(id.clone(), selected));
    }
    fn update_vehicle(&mut self, id: &CarId, at: GeoPoint, heading_deg: f64, selected: bool) {
        self.ops.push(Op::UpdateVehicle(id.clone(), at, heading_deg, selected));
    }
    fn remove_vehicle(&mut self, id: &CarId) {
        self.ops.push(Op::RemoveVehicle(id.clone()));
    }
    fn set_route(&mut self, coordinates: &[[f64; 2]]) {
        self.ops.push(Op::SetRoute(coordinates.len()));
    }
    fn clear_route(&mut self) {
        self.ops.push(Op::ClearRoute);
    }
    fn fly_to(&mut self, center: GeoPoint) {
        self.ops.push(Op::FlyTo(center));
    }
    fn fit_bounds(&mut self, bounds: Bounds) {
        self.ops.push(Op::FitBounds(bounds));
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pt(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

fn veh(id: &str, lat: f64, lng: f64, heading: f64) -> Vehicle {
    Vehicle::new(id, pt(lat, lng), heading, 1.0)
}

fn snap(vehicles: Vec<Vehicle>) -> SceneSnapshot {
    SceneSnapshot {
        user_location: Some(pt(33.55, -7.62)),
        vehicles,
        ..SceneSnapshot::default()
    }
}

fn sync() -> MapSync<RecordingSurface> {
    MapSync::new(RecordingSurface::default())
}

// ── User marker & camera ──────────────────────────────────────────────────────

#[cfg(test)]
mod user_marker {
    use super::*;

    #[test]
    fn created_once_then_repositioned() {
        let mut sync = sync();
        sync.apply(&snap(vec![]));
        assert_eq!(
            sync.surface_mut().take(),
            vec![Op::PlaceUser(pt(33.55, -7.62)), Op::FlyTo(pt(33.55, -7.62))]
        );

        let mut moved = snap(vec![]);
        moved.user_location = Some(pt(33.56, -7.63));
        sync.apply(&moved);
        assert_eq!(sync.surface_mut().take(), vec![Op::MoveUser(pt(33.56, -7.63))]);
    }

    #[test]
    fn no_recentring_when_pickup_already_set() {
        let mut sync = sync();
        let mut s = snap(vec![]);
        s.pickup = Some(pt(34.0, -7.0));
        sync.apply(&s);
        let ops = sync.surface_mut().take();
        assert!(!ops.iter().any(|op| matches!(op, Op::FlyTo(_))), "{ops:?}");
    }
}

// ── Pickup / dropoff markers ──────────────────────────────────────────────────

#[cfg(test)]
mod point_markers {
    use super::*;

    #[test]
    fn lifecycle_place_move_remove() {
        let mut sync = sync();
        let mut s = snap(vec![]);
        s.dropoff = Some(pt(33.60, -7.50));
        sync.apply(&s);
        assert!(
            sync.surface_mut()
                .take()
                .contains(&Op::PlacePoint(PointKind::Dropoff, pt(33.60, -7.50)))
        );

        s.dropoff = Some(pt(33.61, -7.51));
        sync.apply(&s);
        assert!(
            sync.surface_mut()
                .take()
                .contains(&Op::MovePoint(PointKind::Dropoff, pt(33.61, -7.51)))
        );

        s.dropoff = None;
        sync.apply(&s);
        assert!(
            sync.surface_mut()
                .take()
                .contains(&Op::RemovePoint(PointKind::Dropoff))
        );
    }
}

// ── Vehicle diffing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicles {
    use super::*;

    #[test]
    fn moved_vehicle_is_updated_not_recreated() {
        // Same id, new position: zero creations, one update.
        let mut sync = sync();
        sync.apply(&snap(vec![veh("v1", 33.55, -7.62, 90.0)]));
        sync.surface_mut().take();

        sync.apply(&snap(vec![veh("v1", 33.56, -7.61, 120.0)]));
        assert_eq!(
            sync.surface_mut().take(),
            vec![Op::UpdateVehicle(CarId::from("v1"), pt(33.56, -7.61), 120.0, false)]
        );
    }

    #[test]
    fn absent_id_is_removed_exactly_once() {
        let mut sync = sync();
        sync.apply(&snap(vec![veh("v1", 33.55, -7.62, 0.0), veh("v2", 33.56, -7.61, 0.0)]));
        sync.surface_mut().take();

        let next = snap(vec![veh("v2", 33.56, -7.61, 0.0)]);
        sync.apply(&next);
        assert_eq!(sync.surface_mut().take(), vec![Op::RemoveVehicle(CarId::from("v1"))]);

        // Still absent on the next pass: no second removal.
        let mut again = next.clone();
        again.user_location = Some(pt(33.57, -7.60)); // force a non-equal snapshot
        sync.apply(&again);
        let ops = sync.surface_mut().take();
        assert!(!ops.contains(&Op::RemoveVehicle(CarId::from("v1"))), "{ops:?}");
    }

    #[test]
    fn creates_precede_removes() {
        let mut sync = sync();
        sync.apply(&snap(vec![veh("old", 33.55, -7.62, 0.0)]));
        sync.surface_mut().take();

        sync.apply(&snap(vec![veh("new", 33.58, -7.59, 0.0)]));
        assert_eq!(
            sync.surface_mut().take(),
            vec![
                Op::AddVehicle(CarId::from("new"), false),
                Op::RemoveVehicle(CarId::from("old")),
            ]
        );
    }

    #[test]
    fn selection_toggle_updates_in_place() {
        let mut sync = sync();
        let vehicles = vec![veh("v1", 33.55, -7.62, 45.0)];
        sync.apply(&snap(vehicles.clone()));
        sync.surface_mut().take();

        let mut selected = snap(vehicles);
        selected.selected = Some(CarId::from("v1"));
        sync.apply(&selected);
        assert_eq!(
            sync.surface_mut().take(),
            vec![Op::UpdateVehicle(CarId::from("v1"), pt(33.55, -7.62), 45.0, true)]
        );
    }

    #[test]
    fn unchanged_vehicle_triggers_no_update() {
        let mut sync = sync();
        let vehicles = vec![veh("v1", 33.55, -7.62, 45.0)];
        sync.apply(&snap(vehicles.clone()));
        sync.surface_mut().take();

        let mut s = snap(vehicles);
        s.user_location = Some(pt(33.56, -7.63)); // only the user moved
        sync.apply(&s);
        assert_eq!(sync.surface_mut().take(), vec![Op::MoveUser(pt(33.56, -7.63))]);
    }
}

// ── Route line ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_line {
    use super::*;

    fn route(points: usize) -> RoutePath {
        RoutePath::new(
            (0..points).map(|i| [-7.62 + i as f64 * 0.01, 33.55]).collect(),
            1000.0,
            60.0,
        )
    }

    #[test]
    fn new_route_is_set_and_camera_fitted_around_path_plus_user() {
        let mut sync = sync();
        let mut s = snap(vec![]);
        s.user_location = Some(pt(34.00, -7.62));
        s.route = Some(route(3));
        sync.apply(&s);

        let ops = sync.surface_mut().take();
        assert!(ops.contains(&Op::SetRoute(3)));
        let bounds = ops.iter().find_map(|op| match op {
            Op::FitBounds(b) => Some(*b),
            _ => None,
        });
        let bounds = bounds.expect("camera must fit the new route");
        // Covers the path (lng -7.62..-7.60 at lat 33.55) and the user at 34.00.
        assert_eq!(bounds.south, 33.55);
        assert_eq!(bounds.north, 34.00);
        assert_eq!(bounds.west, -7.62);
        assert_eq!(bounds.east, -7.60);
    }

    #[test]
    fn cleared_route_clears_the_line_once() {
        let mut sync = sync();
        let mut s = snap(vec![]);
        s.route = Some(route(2));
        sync.apply(&s);
        sync.surface_mut().take();

        s.route = None;
        sync.apply(&s);
        assert_eq!(sync.surface_mut().take(), vec![Op::ClearRoute]);

        // Already clear: nothing more to do.
        s.user_location = Some(pt(33.56, -7.63));
        sync.apply(&s);
        let ops = sync.surface_mut().take();
        assert!(!ops.contains(&Op::ClearRoute), "{ops:?}");
    }

    #[test]
    fn replacement_is_wholesale() {
        let mut sync = sync();
        let mut s = snap(vec![]);
        s.route = Some(route(2));
        sync.apply(&s);
        sync.surface_mut().take();

        s.route = Some(route(5));
        sync.apply(&s);
        let ops = sync.surface_mut().take();
        assert!(ops.contains(&Op::SetRoute(5)));
        assert!(!ops.contains(&Op::ClearRoute));
    }
}

// ── Idempotence ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod idempotence {
    use super::*;

    #[test]
    fn identical_snapshot_applies_no_ops() {
        let mut sync = sync();
        let mut s = snap(vec![veh("v1", 33.55, -7.62, 10.0), veh("v2", 33.56, -7.61, 20.0)]);
        s.pickup = Some(pt(33.55, -7.62));
        s.dropoff = Some(pt(33.60, -7.50));
        s.route = Some(RoutePath::new(vec![[-7.62, 33.55], [-7.50, 33.60]], 900.0, 80.0));
        sync.apply(&s);
        assert!(!sync.surface_mut().take().is_empty());

        sync.apply(&s.clone());
        assert_eq!(sync.surface_mut().take(), vec![]);
    }
}
