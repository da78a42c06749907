use assert_approx_eq::assert_approx_eq;
use spherical_paths::bearing::bearing::compute_bearing;
use spherical_paths::coords::coordinates::spherical_to_geographic;
use spherical_paths::data::SampleCatalog;
use spherical_paths::paths::subdivide::expected_sample_count;
use spherical_paths::paths::DEFAULT_SEGMENT_COUNT;
use spherical_paths::route::route::RoutePlan;
use spherical_paths::{
    build_rhumb_path, build_shortest_path, length, Coordinates, DisplayScale,
};

fn at(lon: f64, lat: f64) -> Coordinates {
    Coordinates::new(lon, lat, 5.0, 15.0).expect("coordinates")
}

#[test]
fn integration_rhumb_and_great_circle_between_cities() {
    let calgary = at(-114.07, 51.04);
    let mecca = at(39.83, 21.42);

    let rhumb = build_rhumb_path(&calgary, &mecca, DEFAULT_SEGMENT_COUNT);
    let shortest = build_shortest_path(&calgary, &mecca, DEFAULT_SEGMENT_COUNT);
    assert_eq!(rhumb.len(), 17);
    assert_eq!(shortest.len(), 17);

    for path in [&rhumb, &shortest] {
        assert_eq!(path.start(), Some(&calgary));
        assert_eq!(path.last(), Some(&mecca));
        for c in path.iter() {
            assert_approx_eq!(length(c.spherical()), 5.0, 1e-9);
            assert!(c.lon().is_finite() && c.lat().is_finite());
        }
    }

    // the great circle from Calgary to Mecca passes well north of the rhumb line
    let gc_peak = shortest.iter().map(|c| c.lat()).fold(f64::MIN, f64::max);
    let rhumb_peak = rhumb.iter().map(|c| c.lat()).fold(f64::MIN, f64::max);
    assert!(gc_peak > rhumb_peak + 10.0);
}

#[test]
fn integration_single_sample_great_circle() {
    let start = at(-114.07, 51.04);
    let end = at(39.83, 21.42);
    let path = build_shortest_path(&start, &end, 1);
    assert_eq!(path.len(), 3);

    let mid = path.points()[1].spherical();
    assert_approx_eq!(length(mid), start.radius(), 1e-9);
    let s = start.spherical();
    let e = end.spherical();
    let sum = [s[0] + e[0], s[1] + e[1], s[2] + e[2]];
    let k = length(sum);
    for i in 0..3 {
        assert_approx_eq!(mid[i] / 5.0, sum[i] / k, 1e-12);
    }
}

#[test]
fn integration_endpoints_exact_for_every_budget() {
    let a = at(170.0, -35.0);
    let b = at(-170.0, 60.0);
    for n in 0..40 {
        let rhumb = build_rhumb_path(&a, &b, n);
        let shortest = build_shortest_path(&a, &b, n);
        assert_eq!(rhumb.start(), Some(&a));
        assert_eq!(rhumb.last(), Some(&b));
        assert_eq!(shortest.start(), Some(&a));
        assert_eq!(shortest.last(), Some(&b));
        assert_eq!(rhumb.len(), expected_sample_count(n) + 2);
        assert_eq!(shortest.len(), expected_sample_count(n) + 2);
    }
}

#[test]
fn integration_paths_are_deterministic() {
    let a = at(35.5018, 33.8938);
    let b = at(-0.104788, 51.48553);
    assert_eq!(build_rhumb_path(&a, &b, 23), build_rhumb_path(&a, &b, 23));
    assert_eq!(build_shortest_path(&a, &b, 23), build_shortest_path(&a, &b, 23));
}

#[test]
fn integration_rhumb_crosses_antimeridian() {
    let path = build_rhumb_path(&at(170.0, 10.0), &at(-170.0, 20.0), 1);
    let mid = &path.points()[1];
    assert!(mid.lon().abs() > 170.0, "midpoint longitude {}", mid.lon());
}

#[test]
fn integration_rhumb_along_parallel() {
    let path = build_rhumb_path(&at(-100.0, 40.0), &at(100.0, 40.0), 1);
    let mid = &path.points()[1];
    assert_approx_eq!(mid.lat(), 40.0, 1e-9);
    assert_approx_eq!(mid.lon(), 0.0, 1e-9);
}

#[test]
fn integration_round_trip_and_sphere_membership() {
    for lon in (-170..=170).step_by(20) {
        for lat in (-80..=80).step_by(20) {
            let c = at(lon as f64, lat as f64);
            let back = spherical_to_geographic(c.spherical(), c.radius());
            assert_approx_eq!(back.lon, lon as f64, 1e-3);
            assert_approx_eq!(back.lat, lat as f64, 1e-3);

            let again = Coordinates::from_spherical(c.spherical(), c.radius(), c.width()).unwrap();
            assert_approx_eq!(length(again.spherical()), c.radius(), 1e-9);
            assert_approx_eq!(again.planar()[0], c.planar()[0], 1e-6);
            assert_approx_eq!(again.planar()[1], c.planar()[1], 1e-6);
        }
    }
}

#[test]
fn integration_bearing_sanity() {
    let origin = at(0.0, 0.0);
    assert_approx_eq!(compute_bearing(&origin, &at(0.0, 10.0)), 0.0, 1e-9);
    assert_approx_eq!(compute_bearing(&origin, &at(10.0, 0.0)), 90.0, 1e-9);
}

#[test]
fn integration_route_plan_from_catalog() {
    let catalog = SampleCatalog::builtin();
    let plan = RoutePlan::generate(
        catalog.find("Calgary, AB, Canada").unwrap(),
        catalog.find("Beirut, Lebanon").unwrap(),
        DisplayScale::default(),
        7,
    )
    .expect("plan");
    assert_eq!(plan.shortest_path.len(), 9);
    assert_eq!(plan.rhumb_path.len(), 9);
    assert!(plan.summary().starts_with("Calgary, AB, Canada [Lat: 51.045, Lon: -114.072] to Beirut, Lebanon"));
    assert!((0.0..360.0).contains(&plan.bearing));

    let json = serde_json::to_value(&plan).expect("json");
    assert_eq!(json["rhumb_path"]["points"].as_array().map(|a| a.len()), Some(9));
}
