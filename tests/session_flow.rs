use std::fs;
use std::io::Cursor;
use taskbob::repl::run_with;
use taskbob::repl::state::Session;
use taskbob::storage::LocalStorage;

fn run_script(session: &mut Session, script: &str) -> Vec<String> {
    let mut out = Vec::new();
    run_with(session, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_add_mark_delete_exit_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tasks.txt");

    let mut session = Session::new(LocalStorage::load(&path).unwrap(), path.clone());
    assert!(session.tasks.is_empty());

    let add = session.handle_line("todo buy milk");
    assert_eq!(add[0], "Sure! I'll add that in for you.");
    session.handle_line("deadline submit report /by 12152024 2359");

    assert_eq!(
        session.handle_line("list"),
        [
            "1. [T][ ] buy milk",
            "2. [D][ ] submit report (By: Dec 15 2024, 11:59PM)",
            "You have 2 tasks in your list.",
        ]
    );

    session.handle_line("mark 2");
    assert_eq!(
        session.handle_line("list")[1],
        "2. [D][X] submit report (By: Dec 15 2024, 11:59PM)"
    );

    session.handle_line("delete 1");
    assert_eq!(
        session.handle_line("list"),
        [
            "1. [D][X] submit report (By: Dec 15 2024, 11:59PM)",
            "You have 1 tasks in your list.",
        ]
    );

    assert_eq!(
        session.handle_line("exit"),
        ["Bye. Hope to see you again soon!"]
    );
    assert!(session.is_terminated());
    assert!(session.handle_line("list").is_empty());

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "D | 1 | submit report | 12152024 2359\n");
}

#[test]
fn test_loop_greets_and_stops_at_bye() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut session = Session::new(Default::default(), path.clone());

    let out = run_script(
        &mut session,
        "todo read book\nBYE\ntodo never reached\n",
    );
    assert_eq!(out[0], "Hello! I'm Bob.");
    assert_eq!(out.last().unwrap(), "Bye. Hope to see you again soon!");
    assert!(!out.iter().any(|l| l.contains("never reached")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | read book\n");
}

#[test]
fn test_closed_input_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut session = Session::new(Default::default(), path.clone());

    let out = run_script(&mut session, "event camp /from 07012025 0800 /to 07032025 1200\n");
    assert_eq!(out.last().unwrap(), "Bye. Hope to see you again soon!");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "E | 0 | camp | 07012025 0800 | 07032025 1200\n"
    );
}

#[test]
fn test_invalid_utf8_input_does_not_lose_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut session = Session::new(Default::default(), path.clone());

    let mut out = Vec::new();
    let script: &[u8] = b"todo keep me\ntodo caf\xe9\nbye\n";
    run_with(&mut session, script, &mut out).unwrap();

    assert!(session.is_terminated());
    assert_eq!(session.tasks.len(), 2);
    assert_eq!(session.tasks.get(1).unwrap().description(), "keep me");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T | 0 | keep me\nT | 0 | caf\u{FFFD}\n"
    );
}

#[test]
fn test_failed_construction_keeps_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(Default::default(), dir.path().join("tasks.txt"));

    session.handle_line("todo one");
    for bad in [
        "deadline two /by 31122024 2359",
        "deadline two /by tomorrow",
        "event three /from 01012025 0900 /to 01012025 25:00",
        "event three /from whenever /to 01012025 1000",
        "deadline two",
        "event three /from 01012025 0900",
    ] {
        let out = session.handle_line(bad);
        assert_eq!(out.len(), 1, "{bad}");
        assert_eq!(session.tasks.len(), 1, "{bad}");
    }
    assert_eq!(
        session.handle_line("list").last().unwrap(),
        "You have 1 tasks in your list."
    );
}

#[test]
fn test_find_messages() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(Default::default(), dir.path().join("tasks.txt"));
    session.handle_line("todo buy milk");
    session.handle_line("todo buy bread");
    session.handle_line("todo call mum");

    assert_eq!(
        session.handle_line("find bread"),
        [
            "1. [T][ ] buy bread",
            "There is 1 task containing the word \"bread\".",
        ]
    );
    assert_eq!(
        session.handle_line("find buy").last().unwrap(),
        "There are 2 tasks containing the word \"buy\"."
    );
    assert_eq!(
        session.handle_line("find Buy"),
        ["There are 0 tasks containing the word \"Buy\"."]
    );
}

#[test]
fn test_save_failure_is_reported_but_exits() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the rename fail.
    let path = dir.path().join("taken");
    fs::create_dir_all(path.join("inner")).unwrap();

    let mut session = Session::new(Default::default(), path);
    session.handle_line("todo a");
    let out = session.handle_line("bye");
    assert_eq!(out[0], "Bye. Hope to see you again soon!");
    assert!(out[1].starts_with("I couldn't save your tasks:"));
    assert!(session.is_terminated());
}
