//! End-to-end scenarios across the compiled helper surface.

use routegen::prelude::*;
use routegen::{JsonConfig, UrlConfigError, append_query_json};
use serde_json::json;

fn route_set() -> Vec<Route> {
    vec![
        Route::new(
            "show",
            RoutePattern::builder().literal("users").param("id").build(),
        )
        .with_helper("user"),
        Route::new("index", RoutePattern::builder().literal("users").build()).with_helper("user"),
        Route::new(
            "show",
            RoutePattern::builder().literal("docs").catch_all("path"),
        )
        .with_helper("docs"),
        // Unnamed: reachable by dispatch only, no helper emitted.
        Route::new("health", RoutePattern::builder().literal("up").build()),
    ]
}

#[test]
fn user_show_scenario() {
    let helpers = HelperSet::build(route_set()).unwrap();

    // user_path(:show, 42)
    assert_eq!(
        helpers.path("user", "show", &path_args![42]).unwrap(),
        "/users/42"
    );

    // ... with extras
    assert_eq!(
        helpers
            .path_with("user", "show", &path_args![42], [("tab", "posts")])
            .unwrap(),
        "/users/42?tab=posts"
    );

    // ... extras colliding with the path binding are dropped
    assert_eq!(
        helpers
            .path_with("user", "show", &path_args![42], [("id", "99")])
            .unwrap(),
        "/users/42"
    );
}

#[test]
fn unnamed_routes_emit_no_helpers() {
    let helpers = HelperSet::build(route_set()).unwrap();
    assert_eq!(helpers.len(), 3);
    assert!(
        helpers
            .path("health", "health", &path_args![])
            .is_err()
    );
}

#[test]
fn catch_all_renders_joined_suffix() {
    let helpers = HelperSet::build(route_set()).unwrap();
    assert_eq!(
        helpers
            .path(
                "docs",
                "show",
                &[PathValue::rest(["guides", "routing", "helpers"])]
            )
            .unwrap(),
        "/docs/guides/routing/helpers"
    );
}

#[test]
fn duplicate_signature_fails_before_any_helper_is_usable() {
    let mut routes = route_set();
    routes.push(
        Route::new(
            "show",
            RoutePattern::builder().literal("people").param("pid").build(),
        )
        .with_helper("user"),
    );

    let err = HelperSet::build(routes).unwrap_err();
    assert_eq!(err.helper, "user");
    assert_eq!(err.action, "show");
    assert_eq!(err.arity, 1);
}

#[test]
fn base_url_elision_matrix() {
    let cases = [
        (Some(("http", 80)), "http://example.com"),
        (Some(("http", 4000)), "http://example.com:4000"),
        (Some(("https", 443)), "https://example.com"),
        (Some(("https", 8443)), "https://example.com:8443"),
        (None, "http://example.com"),
    ];

    for (listener, expected) in cases {
        let mut config = StaticConfig::new()
            .with_section("url", Section::new().with_host("example.com"));
        if let Some((scheme, port)) = listener {
            config = config.with_section(scheme, Section::new().with_port(port));
        }
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            expected,
            "listener: {listener:?}"
        );
    }
}

#[test]
fn full_url_combines_cached_base_and_helper_path() {
    let helpers = HelperSet::build(route_set()).unwrap();
    let cache = BaseUrlCache::new();
    let config = StaticConfig::new()
        .with_section("https", Section::new().with_port(443))
        .with_section("url", Section::new().with_host("example.com"));

    assert_eq!(
        helpers
            .full_url(&cache, &config, "user", "show", &path_args![42])
            .unwrap(),
        "https://example.com/users/42"
    );
    assert_eq!(
        helpers
            .full_url(&cache, &config, "user", "index", &path_args![])
            .unwrap(),
        "https://example.com/users"
    );
}

#[test]
fn full_url_propagates_both_error_kinds() {
    let helpers = HelperSet::build(route_set()).unwrap();
    let cache = BaseUrlCache::new();
    let config = StaticConfig::new(); // no url section

    let err = helpers
        .full_url(&cache, &config, "user", "show", &path_args![42])
        .unwrap_err();
    assert_eq!(err, UrlError::Config(UrlConfigError::MissingHost));

    let good_config = StaticConfig::new()
        .with_section("url", Section::new().with_host("example.com"));
    let err = helpers
        .full_url(&cache, &good_config, "nope", "show", &path_args![1])
        .unwrap_err();
    assert!(matches!(
        err,
        UrlError::Path(PathError::UnknownHelper { .. })
    ));
}

#[test]
fn json_config_and_json_extras() {
    let config = JsonConfig::new(json!({
        "http": {"port": 4000},
        "url": {"host": "example.com"},
    }));
    assert_eq!(
        resolve_base_url(&config).unwrap().to_string(),
        "http://example.com:4000"
    );

    let helpers = HelperSet::build(route_set()).unwrap();
    let path = helpers.path("user", "show", &path_args![42]).unwrap();

    let extras = json!({"tab": "posts", "id": "99"});
    let serde_json::Value::Object(map) = extras else {
        unreachable!()
    };
    let reserved = ReservedKeys::from_names(["id"]);
    assert_eq!(
        append_query_json(&path, &map, &reserved),
        "/users/42?tab=posts"
    );
}

#[test]
fn generated_helper_handles_are_directly_callable() {
    let helpers = HelperSet::build(route_set()).unwrap();
    let user_show = helpers.get("user", "show", 1).unwrap();

    assert_eq!(user_show.path(&path_args![7]).unwrap(), "/users/7");
    assert_eq!(
        user_show
            .path_with(&path_args![7], [("page", "2")])
            .unwrap(),
        "/users/7?page=2"
    );
    assert!(user_show.reserved_keys().contains("id"));
}
