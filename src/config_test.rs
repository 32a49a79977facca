use super::*;

#[test]
fn localhost_maps_to_local_api() {
    assert_eq!(base_url_for_host("localhost"), "http://localhost:5000");
}

#[test]
fn production_host_maps_to_its_api_origin() {
    assert_eq!(
        base_url_for_host("jobboard.fly.dev"),
        "https://jobboard-api.fly.dev"
    );
}

#[test]
fn unknown_host_falls_back_to_same_origin() {
    assert_eq!(base_url_for_host("unknown.example.com"), "");
}
