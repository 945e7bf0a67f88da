use shelf_kernel::api::ApiEndpoint;
use shelf_kernel::domain::config::ApiEndpointConfig;
use std::thread;

#[test]
fn default_config_builds_endpoint() {
    let api = ApiEndpoint::new(ApiEndpointConfig::default()).expect("default url is valid");
    assert_eq!(api.base_url(), "http://localhost:5000/api");
    assert_eq!(api.url().port(), Some(5000));
}

#[test]
fn every_consumer_sees_the_same_instance() {
    let api = ApiEndpoint::new(ApiEndpointConfig::default()).expect("valid");

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let handle = api.clone();
            thread::spawn(move || handle)
        })
        .collect();

    for consumer in consumers {
        let seen = consumer.join().expect("consumer thread");
        assert!(seen.same_instance(&api));
        assert_eq!(seen.get(), api.get());
    }
}

#[test]
fn separate_constructions_are_distinct_instances() {
    let a = ApiEndpoint::new(ApiEndpointConfig::default()).expect("valid");
    let b = ApiEndpoint::new(ApiEndpointConfig::default()).expect("valid");

    assert_ne!(a, b);
    assert_eq!(a.get(), b.get());
}
