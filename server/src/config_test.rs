use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8081"),
        ("SITE_DIST_DIR", "/srv/lumiq"),
    ]))
    .unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:8081");
    assert_eq!(config.dist_dir, PathBuf::from("/srv/lumiq"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_DIST_DIR", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
}

#[test]
fn malformed_port_is_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn malformed_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
}

#[test]
fn ipv6_host_is_accepted() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(config.addr().to_string(), "[::1]:9000");
}
