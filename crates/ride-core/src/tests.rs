//! Unit tests for ride-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(33.55, -7.62);
        assert!(p.distance_km(p) < 0.000_01);
    }

    #[test]
    fn casablanca_approx_degree() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(33.0, -7.62);
        let b = GeoPoint::new(34.0, -7.62);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn compared_by_value() {
        assert_eq!(GeoPoint::new(1.5, 2.5), GeoPoint::new(1.5, 2.5));
        assert_ne!(GeoPoint::new(1.5, 2.5), GeoPoint::new(2.5, 1.5));
    }

    #[test]
    fn lng_lat_wire_order() {
        assert_eq!(GeoPoint::new(33.55, -7.62).lng_lat(), [-7.62, 33.55]);
    }
}

#[cfg(test)]
mod ids {
    use crate::CarId;

    #[test]
    fn display_is_raw_id() {
        assert_eq!(CarId::from("v1").to_string(), "v1");
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(CarId::from("v1"), 1);
        assert_eq!(m.get(&CarId::from("v1")), Some(&1));
    }
}

#[cfg(test)]
mod token {
    use crate::{SeqToken, Slot};

    #[test]
    fn issue_is_monotonic() {
        let mut slot = Slot::new();
        let a = slot.issue();
        let b = slot.issue();
        assert!(b > a);
    }

    #[test]
    fn only_latest_token_is_current() {
        let mut slot = Slot::new();
        let first = slot.issue();
        let second = slot.issue();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn unissued_token_is_never_current() {
        let slot = Slot::new();
        assert!(!slot.is_current(SeqToken(0)));
    }

    #[test]
    fn invalidate_stales_in_flight_requests() {
        let mut slot = Slot::new();
        let tok = slot.issue();
        slot.invalidate();
        assert!(!slot.is_current(tok));
    }

    #[test]
    fn issue_after_invalidate_is_current() {
        let mut slot = Slot::new();
        slot.issue();
        slot.invalidate();
        let tok = slot.issue();
        assert!(slot.is_current(tok));
    }
}

#[cfg(test)]
mod route {
    use crate::{GeoPoint, RoutePath};

    #[test]
    fn default_is_empty() {
        assert!(RoutePath::default().is_empty());
    }

    #[test]
    fn points_restore_lat_lng_order() {
        let route = RoutePath::new(vec![[-7.62, 33.55], [-7.60, 33.56]], 1000.0, 120.0);
        let pts: Vec<GeoPoint> = route.points().collect();
        assert_eq!(pts[0], GeoPoint::new(33.55, -7.62));
        assert_eq!(pts[1], GeoPoint::new(33.56, -7.60));
    }
}
