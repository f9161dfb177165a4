use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_override() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("abc")), Err(ConfigError::InvalidPort("abc".to_owned())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn site_root_is_optional() {
    assert_eq!(parse_site_root(None), None);
    assert_eq!(parse_site_root(Some("")), None);
    assert_eq!(parse_site_root(Some("target/site")), Some(PathBuf::from("target/site")));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 4000, site_root: None };
    assert_eq!(config.bind_addr(), "0.0.0.0:4000");
}
