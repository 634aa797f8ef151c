use super::*;

#[test]
fn test_app_flag_accepted_for_app_commands() {
    let spec = CommandSpec::find("test-app").unwrap();
    assert!(check_app_flag(spec, Some("blog")).is_ok());
    assert!(check_app_flag(spec, None).is_ok());
}

#[test]
fn test_app_flag_rejected_elsewhere() {
    for name in ["custom", "runserver"] {
        let spec = CommandSpec::find(name).unwrap();
        let err = check_app_flag(spec, Some("blog")).unwrap_err();
        assert!(err.to_string().contains("does not take an app"), "{name}");
        assert!(check_app_flag(spec, None).is_ok());
    }
}

#[test]
fn test_app_by_name_picks_matching_item() {
    let items = vec!["blog".to_string(), "shop.orders".to_string()];
    let picked = AppByName("shop.orders".into()).choose("app", &items).unwrap();
    assert_eq!(picked, Some(1));

    let err = AppByName("nope".into()).choose("app", &items).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::UnknownApp(_))));
}
