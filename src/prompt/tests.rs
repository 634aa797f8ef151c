use super::*;

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn choose(answer: &str, names: &[&str]) -> (Option<usize>, String) {
    let mut out = Vec::new();
    let picked = LinePrompt::new(answer.as_bytes(), &mut out)
        .choose("test app", &items(names))
        .unwrap();
    (picked, String::from_utf8(out).unwrap())
}

#[test]
fn test_choose_by_number() {
    let (picked, _) = choose("2\n", &["blog", "polls"]);
    assert_eq!(picked, Some(1));
}

#[test]
fn test_choose_menu_layout() {
    let (_, menu) = choose("1\n", &["blog", "shop.orders"]);
    assert_eq!(
        menu,
        "\nSelect test app:\n  1. blog\n  2. shop.orders\n  0. Cancel\nChoice [0]: "
    );
}

#[test]
fn test_choose_cancel_variants() {
    for answer in ["0\n", "\n", "", "9\n", "blog\n"] {
        let (picked, _) = choose(answer, &["blog"]);
        assert_eq!(picked, None, "answer {answer:?}");
    }
}

#[test]
fn test_choose_from_empty_list() {
    let (picked, out) = choose("1\n", &[]);
    assert_eq!(picked, None);
    assert!(out.contains("Nothing to choose"));
}

#[test]
fn test_input_line() {
    let mut out = Vec::new();
    let line = LinePrompt::new("runserver 8001\r\n".as_bytes(), &mut out)
        .input("Django manage.py command")
        .unwrap();
    assert_eq!(line.as_deref(), Some("runserver 8001"));
    assert_eq!(String::from_utf8(out).unwrap(), "Django manage.py command: ");
}

#[test]
fn test_input_eof() {
    let mut out = Vec::new();
    let line = LinePrompt::new("".as_bytes(), &mut out).input("x").unwrap();
    assert_eq!(line, None);
}
