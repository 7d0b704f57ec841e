//! Uptime formatting vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitals_core::format_uptime;


#[test]
fn uptime_vectors() {
    let vectors = vector_loader::load("uptime.json");
    assert!(!vectors.is_empty());

    for v in vectors {
        assert_eq!(format_uptime(v.seconds), v.expect, "vector={}", v.description);
    }
}

#[test]
fn seconds_always_present() {
    for secs in [0, 60, 3600, 86400, 86400 + 3600 + 60] {
        assert!(format_uptime(secs).ends_with('s'), "secs={secs}");
    }
}
