use super::*;
use crate::dispatch::CommandRequest;

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_wrap_windows() {
    let argv = Platform::Windows.wrap(&tokens(&["python", "manage.py", "runserver"]));
    assert_eq!(argv, vec!["cmd.exe", "/k", "python manage.py runserver"]);
}

#[test]
fn test_wrap_linux() {
    let argv = Platform::Linux.wrap(&tokens(&["python", "manage.py", "shell"]));
    insta::assert_debug_snapshot!(argv, @r#"
    [
        "gnome-terminal",
        "-e",
        "bash -c \"python manage.py shell; read line\"",
    ]
    "#);
}

#[test]
fn test_wrap_darwin() {
    let argv = Platform::Darwin.wrap(&tokens(&["python", "manage.py", "check"]));
    assert_eq!(
        argv,
        vec![
            "osascript",
            "-e",
            r#"tell app "Terminal" to activate"#,
            "-e",
            r#"tell application "System Events" to tell process "Terminal" to keystroke "t" using command down"#,
            "-e",
            r#"tell application "Terminal" to do script "python manage.py check" in front window"#,
        ]
    );
}

#[test]
fn test_wrap_other_passes_tokens_through() {
    let raw = tokens(&["python", "manage.py", "migrate", "--list"]);
    assert_eq!(Platform::Other("freebsd".into()).wrap(&raw), raw);
}

#[test]
fn test_wrap_does_not_quote_tokens() {
    let argv = Platform::Windows.wrap(&tokens(&["python", "manage.py", "loaddata", "my fixture.json"]));
    assert_eq!(argv[2], "python manage.py loaddata my fixture.json");
}

#[test]
fn test_parse_platform_identifiers() {
    assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
    assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Linux);
    assert_eq!("Darwin".parse::<Platform>().unwrap(), Platform::Darwin);
    assert_eq!("macos".parse::<Platform>().unwrap(), Platform::Darwin);
    assert_eq!(
        "SunOS".parse::<Platform>().unwrap(),
        Platform::Other("SunOS".into())
    );
    assert_eq!(Platform::Other("SunOS".into()).to_string(), "SunOS");
}

#[test]
fn test_bin_dir_and_program() {
    assert_eq!(Platform::Windows.bin_dir(), "Scripts");
    assert_eq!(Platform::Linux.bin_dir(), "bin");
    assert_eq!(Platform::Darwin.terminal_program(), Some("osascript"));
    assert_eq!(Platform::Other("x".into()).terminal_program(), None);
}

#[cfg(unix)]
#[test]
fn test_launch_spawns_unwrapped_command() {
    let dir = tempfile::tempdir().unwrap();
    let launcher = TerminalLauncher::new(Platform::Other("test".into()));
    let request = CommandRequest::new(tokens(&["true"])).in_dir(dir.path());
    launcher.launch(request).wait().unwrap();
}

#[cfg(unix)]
#[test]
fn test_launch_reports_spawn_failure() {
    let launcher = TerminalLauncher::new(Platform::Other("test".into()));
    let request = CommandRequest::new(tokens(&["/nonexistent/django-manage-test-binary"]));
    let err = launcher.launch(request).wait().unwrap_err();
    assert!(err.to_string().contains("Failed to spawn"));
}

#[test]
fn test_launch_empty_command() {
    let launcher = TerminalLauncher::new(Platform::Other("test".into()));
    let err = launcher.launch(CommandRequest::new(Vec::new())).wait().unwrap_err();
    assert!(err.to_string().contains("Empty command"));
}
