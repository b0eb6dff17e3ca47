use super::*;

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.max_connections, 10);
    assert!(config.database.max_connections >= config.database.min_connections);
    assert_eq!(config.resources.root, "static");
    assert_eq!(config.resources.report_paths(), ReportPaths::default());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [server]
        port = 9090

        [resources]
        root = "/srv/cellcycle/static"
        hallmark_cell = "home/hallmark_v2.txt"
        "#,
    )
    .unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    let paths = config.resources.report_paths();
    assert_eq!(paths.hallmark_cell, "home/hallmark_v2.txt");
    assert_eq!(paths.kegg_pathway, "Browser/KEGG_pathway.txt");
}

#[test]
fn test_database_url_override() {
    let config = Config::default()
        .with_database_url(Some("postgres://reader@db:5432/cellcycle".to_string()));
    assert_eq!(config.database.url, "postgres://reader@db:5432/cellcycle");

    let untouched = Config::default().with_database_url(Some("  ".to_string()));
    assert_eq!(untouched.database.url, default_database_url());
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::from_toml_str("[server]\nport = \"eighty\"").is_err());
}
