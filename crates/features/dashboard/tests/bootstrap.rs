use shelf_dashboard::{AppContext, BootstrapError};
use shelf_domain::config::{ClientConfig, ClientConfigInner};
use shelf_domain::route::RouteEntry;
use shelf_kernel::registry::RegistryValidationError;

fn config() -> ClientConfig {
    ClientConfig::from(ClientConfigInner::default())
}

#[test]
fn default_config_boots_with_builtin_pages() {
    let ctx = AppContext::bootstrap(&config()).expect("bootstrap");

    let paths: Vec<_> = ctx.registry.iter().map(|route| route.path.as_ref()).collect();
    assert_eq!(paths, ["/", "/perfil", "/configuracion", "/stock"]);
    assert_eq!(ctx.initial_location.as_str(), "/");
    assert_eq!(ctx.api.base_url(), "http://localhost:5000/api");
}

#[test]
fn clones_share_the_endpoint_and_registry() {
    let ctx = AppContext::bootstrap(&config()).expect("bootstrap");
    let copy = ctx.clone();

    assert!(copy.api.same_instance(&ctx.api));
    assert!(copy.registry.same_instance(&ctx.registry));
}

#[test]
fn invalid_base_url_is_fatal() {
    let mut cfg = config();
    cfg.api.base_url = "not a url".to_owned();

    let err = AppContext::bootstrap(&cfg).expect_err("must fail");
    assert!(matches!(err, BootstrapError::Api { .. }), "{err}");
    assert!(err.to_string().contains("[api] section"), "{err}");
}

#[test]
fn gap_in_table_reports_its_index() {
    const TABLE: &[Option<RouteEntry>] = &[
        Some(RouteEntry::new(1, "/", "Home", "home")),
        Some(RouteEntry::new(2, "/perfil", "Perfil", "profile")),
        None,
    ];

    let err = AppContext::with_table(&config(), TABLE).expect_err("must fail");
    match err {
        BootstrapError::Registry { source, .. } => {
            assert!(matches!(source, RegistryValidationError::EmptySlot { index: 2, .. }));
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_content_key_is_rejected() {
    const TABLE: &[Option<RouteEntry>] = &[
        Some(RouteEntry::new(1, "/", "Home", "home")),
        Some(RouteEntry::new(9, "/reportes", "Reportes", "reports")),
    ];

    let err = AppContext::with_table(&config(), TABLE).expect_err("must fail");
    match err {
        BootstrapError::UnknownContent { index, key, .. } => {
            assert_eq!(index, 1);
            assert_eq!(key.as_str(), "reports");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_initial_location_is_carried_through() {
    let mut cfg = config();
    cfg.navigation.initial_location = "/stock?tab=all".to_owned();

    let ctx = AppContext::bootstrap(&cfg).expect("bootstrap");
    assert_eq!(ctx.initial_location.path(), "/stock");
}
