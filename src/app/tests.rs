use std::io::Cursor;

use tempfile::tempdir;

use crate::editor::LineBuffer;
use crate::error::EditError;
use crate::search::SubstituteMode;

use super::{App, Command, CommandError, Outcome, ParseError, Session, execute};

fn create_test_session() -> Session {
    Session::new(LineBuffer::from_lines(
        "test.txt",
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    ))
}

fn run_script(app: &mut App, script: &str) -> String {
    let mut output = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// --- Parsing ---

#[test]
fn test_parse_blank_line_is_none() {
    assert_eq!(Command::parse("   "), Ok(None));
}

#[test]
fn test_parse_insert_joins_text_with_single_spaces() {
    assert_eq!(
        Command::parse("insert 5   Hello    World"),
        Ok(Some(Command::Insert(5, "Hello World".to_string())))
    );
}

#[test]
fn test_parse_aliases() {
    assert_eq!(Command::parse("d"), Ok(Some(Command::Display)));
    assert_eq!(Command::parse("w"), Ok(Some(Command::Save)));
    assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
    assert_eq!(Command::parse("h"), Ok(Some(Command::Help)));
}

#[test]
fn test_parse_substitute_modes() {
    assert_eq!(
        Command::parse("substitute old new"),
        Ok(Some(Command::Substitute {
            pattern: "old".to_string(),
            replacement: "new".to_string(),
            mode: SubstituteMode::First,
        }))
    );
    assert_eq!(
        Command::parse("global TODO DONE"),
        Ok(Some(Command::Substitute {
            pattern: "TODO".to_string(),
            replacement: "DONE".to_string(),
            mode: SubstituteMode::Global,
        }))
    );
}

#[test]
fn test_parse_wrong_arity_reports_usage() {
    assert_eq!(
        Command::parse("delete"),
        Err(ParseError::Usage("delete <line>"))
    );
    assert_eq!(
        Command::parse("insert 3"),
        Err(ParseError::Usage("insert <line> <text>"))
    );
    assert_eq!(
        Command::parse("search a b"),
        Err(ParseError::Usage("search <pattern>"))
    );
    assert_eq!(
        Command::parse("global a"),
        Err(ParseError::Usage("global <pattern> <replacement>"))
    );
}

#[test]
fn test_parse_bad_numbers() {
    assert_eq!(
        Command::parse("delete x"),
        Err(ParseError::InvalidLineNumber("x".to_string()))
    );
    assert_eq!(
        Command::parse("delete -1"),
        Err(ParseError::InvalidLineNumber("-1".to_string()))
    );
    assert_eq!(Command::parse("copy 1 z"), Err(ParseError::InvalidLineNumbers));
}

#[test]
fn test_parse_unknown_command() {
    let err = Command::parse("frobnicate 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown command: frobnicate (type 'help' for commands)"
    );
}

// --- Execute ---

#[test]
fn test_execute_insert_marks_modified() {
    let mut session = create_test_session();
    let outcome = execute(&mut session, Command::Insert(2, "x".to_string())).unwrap();
    assert_eq!(outcome, Outcome::Edited);
    assert_eq!(session.buffer.lines(), ["a", "x", "b", "c"]);
    assert!(session.buffer.is_modified());
}

#[test]
fn test_execute_search_reports_positions() {
    let mut session = create_test_session();
    let outcome = execute(&mut session, Command::Search("[ac]".to_string())).unwrap();
    assert_eq!(outcome, Outcome::Matches(vec![1, 3]));
    assert!(!session.buffer.is_modified());
}

#[test]
fn test_execute_paste_with_empty_clipboard() {
    let mut session = create_test_session();
    let result = execute(&mut session, Command::Paste("1".to_string()));
    assert!(matches!(
        result,
        Err(CommandError::Edit(EditError::EmptyClipboard))
    ));
}

#[test]
fn test_execute_paste_checks_clipboard_before_line_number() {
    let mut session = create_test_session();
    assert!(matches!(
        execute(&mut session, Command::Paste("x".to_string())),
        Err(CommandError::Edit(EditError::EmptyClipboard))
    ));

    execute(&mut session, Command::Copy(1, 1)).unwrap();
    assert!(matches!(
        execute(&mut session, Command::Paste("x".to_string())),
        Err(CommandError::Parse(ParseError::InvalidLineNumber(ref token))) if token == "x"
    ));
    assert!(!session.buffer.is_modified());
}

#[test]
fn test_execute_copy_then_paste() {
    let mut session = create_test_session();
    assert_eq!(
        execute(&mut session, Command::Copy(1, 2)).unwrap(),
        Outcome::Copied(2)
    );
    assert_eq!(
        execute(&mut session, Command::Paste("4".to_string())).unwrap(),
        Outcome::Pasted(2)
    );
    assert_eq!(session.buffer.lines(), ["a", "b", "c", "a", "b"]);
}

#[test]
fn test_execute_invalid_position_keeps_session_usable() {
    let mut session = create_test_session();
    assert!(matches!(
        execute(&mut session, Command::Delete(9)),
        Err(CommandError::Edit(EditError::InvalidPosition(9)))
    ));
    execute(&mut session, Command::Delete(3)).unwrap();
    assert_eq!(session.buffer.lines(), ["a", "b"]);
}

// --- Interactive loop ---

#[test]
fn test_run_display_lists_numbered_lines() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "display\n");
    assert!(out.contains("=== File: test.txt ==="));
    assert!(out.contains("   1: a\n   2: b\n   3: c\n"));
    assert!(out.contains("=== Total lines: 3 ==="));
}

#[test]
fn test_run_reports_errors_and_continues() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "delete 10\nbogus\npaste 1\ndelete 1\n");
    assert!(out.contains("ERROR: invalid line number: 10"));
    assert!(out.contains("ERROR: Unknown command: bogus"));
    assert!(out.contains("ERROR: clipboard is empty"));
    assert_eq!(app.session().buffer.lines(), ["b", "c"]);
}

#[test]
fn test_run_paste_bad_line_reports_empty_clipboard_first() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "paste x\ncopy 1 1\npaste x\n");
    let empty = out.find("ERROR: clipboard is empty").unwrap();
    let bad_line = out.find("ERROR: Invalid line number: x").unwrap();
    assert!(empty < bad_line);
}

#[test]
fn test_run_search_output() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "search b|c\nsearch zzz\n");
    assert!(out.contains("Found matches at lines: [2 3]"));
    assert!(out.contains("No matches found"));
}

#[test]
fn test_run_help_prints_usage() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "help\n");
    assert!(out.contains("COMMANDS:"));
    assert!(out.contains("paste <line>"));
}

#[test]
fn test_run_quit_without_changes_does_not_prompt() {
    let mut app = App::from_buffer(create_test_session().buffer);
    let out = run_script(&mut app, "quit\ndisplay\n");
    assert!(!out.contains("unsaved changes"));
    assert!(out.ends_with("Goodbye!\n"));
    assert!(!out.contains("=== File"), "nothing runs after quit");
}

#[test]
fn test_run_quit_and_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut app = App::open(&path).unwrap();
    let out = run_script(&mut app, "append first line\nq\nyes\n");
    assert!(out.contains("Save before quitting? (y/n)"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first line\n");
    assert!(!app.session().buffer.is_modified());
}

#[test]
fn test_run_quit_and_discard() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut app = App::open(&path).unwrap();
    let out = run_script(&mut app, "append draft\nquit\nn\n");
    assert!(out.ends_with("Goodbye!\n"));
    assert!(!path.exists());
}

#[test]
fn test_run_failed_save_at_quit_returns_to_prompt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("notes.txt");
    let mut app = App::open(&path).unwrap();
    let out = run_script(&mut app, "append x\nquit\ny\n");
    assert!(out.contains("ERROR: Failed to save: cannot create"));
    assert!(!out.contains("Goodbye!"));
    assert!(app.session().buffer.is_modified());
}

#[test]
fn test_run_save_command() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut app = App::open(&path).unwrap();
    let out = run_script(&mut app, "append one\nappend two\nsave\n");
    assert!(out.contains("File saved successfully"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn test_run_colored_errors_keep_message() {
    let mut app = App::from_buffer(create_test_session().buffer).with_color(true);
    let out = run_script(&mut app, "delete 99\n");
    assert!(out.contains("ERROR:"));
    assert!(out.contains("invalid line number: 99"));
}
