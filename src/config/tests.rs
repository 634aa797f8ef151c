use super::*;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.python_virtualenv_paths, vec!["~/.virtualenvs"]);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
        python_bin: Some("/envs/site/bin/python".into()),
        python_virtualenv_paths: vec!["~/envs".into(), "/opt/venvs".into()],
    };
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_unset_python_bin_is_omitted() {
    let rendered = toml::to_string(&Config::default()).unwrap();
    assert!(!rendered.contains("python_bin ="));
    assert!(rendered.contains("python_virtualenv_paths"));

    let config = Config {
        python_bin: Some("/usr/bin/python3".into()),
        ..Config::default()
    };
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains(r#"python_bin = "/usr/bin/python3""#));
}

#[test]
fn test_partial_file_fills_defaults() {
    let config: Config = toml::from_str(r#"python_bin = "/x/python""#).unwrap();
    assert_eq!(config.python_bin(), Some(PathBuf::from("/x/python")));
    assert_eq!(config.python_virtualenv_paths, vec!["~/.virtualenvs"]);
}

#[test]
fn test_set_and_get_values() {
    let mut config = Config::default();
    config.set_value("python_bin", "/venv/bin/python").unwrap();
    assert_eq!(config.get_value("python_bin").unwrap(), "/venv/bin/python");

    config.set_value("python_bin", "").unwrap();
    assert!(config.python_bin.is_none());

    config
        .set_value("python_virtualenv_paths", "~/a, /b ,")
        .unwrap();
    assert_eq!(config.python_virtualenv_paths, vec!["~/a", "/b"]);
    assert_eq!(config.get_value("python_virtualenv_paths").unwrap(), "~/a,/b");
}

#[test]
fn test_unknown_key() {
    let mut config = Config::default();
    assert!(config.get_value("editor.command").is_err());
    assert!(config.set_value("nope", "1").is_err());
}
