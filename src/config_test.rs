use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from("site"));
    assert_eq!(cfg.pkg_dir, PathBuf::from("site").join("pkg"));
}

#[test]
fn pkg_dir_follows_site_dir_by_default() {
    let cfg = ServerConfig::from_values(None, Some("/srv/folio"), None).unwrap();
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/folio"));
    assert_eq!(cfg.pkg_dir, PathBuf::from("/srv/folio/pkg"));
}

#[test]
fn explicit_pkg_dir_wins() {
    let cfg = ServerConfig::from_values(Some("8080"), Some("site"), Some("client/pkg")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.pkg_dir, PathBuf::from("client/pkg"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some(""), Some(" ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_values(Some("http"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn rejects_port_zero_and_overflow() {
    assert!(parse_port(Some("0")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}
