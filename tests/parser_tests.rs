use std::fs;

use macrokey::interpreter::eval_expr;
use macrokey::{parse_script, read_script_lines, Command, Interpreter, Script};

// Helper: parse a script source, returning the script and the interpreter
// that received the declaration side effects.
fn parse(src: &str) -> (Script, Interpreter) {
    let lines: Vec<&str> = src.lines().collect();
    let mut interp = Interpreter::new();
    let script = parse_script(&lines, &mut interp);
    (script, interp)
}

#[cfg(test)]
mod declaration_tests {
    use super::*;

    #[test]
    fn test_global_declaration_visible_from_any_frame() {
        let (_, mut interp) = parse("global varint speed = 7\n");
        assert_eq!(interp.get("speed"), Some(7));

        interp.push_frame().unwrap();
        assert_eq!(interp.get("speed"), Some(7));
        interp.pop_frame();
        assert_eq!(interp.get("speed"), Some(7));
    }

    #[test]
    fn test_varint_at_parse_time_lands_in_globals() {
        // No local frames exist while parsing, so plain `varint` writes
        // frame 0 too.
        let (_, mut interp) = parse("varint x = 3\n");
        interp.push_frame().unwrap();
        assert_eq!(interp.get("x"), Some(3));
        interp.pop_frame();
    }

    #[test]
    fn test_redeclaration_overwrites() {
        let (_, interp) = parse("global varint x = 1\nglobal varint x = 9\n");
        assert_eq!(interp.get("x"), Some(9));
    }

    #[test]
    fn test_malformed_declarations_skipped() {
        let (_, interp) = parse("varint = 5\nvarint x 5\nvarint y = five\n");
        assert_eq!(interp.get("x"), None);
        assert_eq!(interp.get("y"), None);
    }
}

#[cfg(test)]
mod scoping_tests {
    use super::*;

    #[test]
    fn test_set_updates_nearest_existing_binding() {
        // `set` never shadows: an existing global is mutated in place even
        // from inside a local frame.
        let mut interp = Interpreter::new();
        interp.set_global("x", 1).unwrap();

        interp.push_frame().unwrap();
        interp.set("x", 5).unwrap();
        assert_eq!(interp.get("x"), Some(5));
        interp.pop_frame();

        assert_eq!(interp.get("x"), Some(5));
    }

    #[test]
    fn test_push_pop_restores_visible_state() {
        let mut interp = Interpreter::new();
        interp.set_global("kept", 1).unwrap();

        interp.push_frame().unwrap();
        interp.set("transient", 42).unwrap();
        assert_eq!(interp.get("transient"), Some(42));
        interp.pop_frame();

        assert_eq!(interp.get("transient"), None);
        assert_eq!(interp.get("kept"), Some(1));
    }

    #[test]
    fn test_pop_on_globals_is_a_noop() {
        let mut interp = Interpreter::new();
        interp.pop_frame();
        interp.pop_frame();
        interp.set_global("x", 2).unwrap();
        assert_eq!(interp.get("x"), Some(2));
    }

    #[test]
    fn test_name_too_long_rejected() {
        let mut interp = Interpreter::new();
        let long = "a".repeat(40);
        assert!(interp.set(&long, 1).is_err());
    }

    #[test]
    fn test_frame_stack_overflow_reported() {
        let mut interp = Interpreter::new();
        // Frame 0 exists already; the stack caps at 256 frames total.
        for _ in 0..255 {
            interp.push_frame().unwrap();
        }
        assert!(interp.push_frame().is_err());
    }
}

#[cfg(test)]
mod eval_tests {
    use super::*;

    #[test]
    fn test_left_to_right_fold() {
        let interp = Interpreter::new();
        assert_eq!(eval_expr("3 + 4 - 2", interp.frames()), 5);
    }

    #[test]
    fn test_unknown_variable_is_zero() {
        let interp = Interpreter::new();
        assert_eq!(eval_expr("unknown_var + 10", interp.frames()), 10);
    }

    #[test]
    fn test_negative_literal() {
        let interp = Interpreter::new();
        assert_eq!(eval_expr("-5", interp.frames()), -5);
    }

    #[test]
    fn test_variable_reads() {
        let mut interp = Interpreter::new();
        interp.set_global("x", 10).unwrap();
        interp.set_global("y", 3).unwrap();
        assert_eq!(eval_expr("x - y + 1", interp.frames()), 8);
    }

    #[test]
    fn test_trailing_operator_ignored() {
        let interp = Interpreter::new();
        assert_eq!(eval_expr("7 +", interp.frames()), 7);
    }

    #[test]
    fn test_empty_expression_is_zero() {
        let interp = Interpreter::new();
        assert_eq!(eval_expr("", interp.frames()), 0);
    }

    #[test]
    fn test_checked_eval_rejects_oversized_text() {
        let interp = Interpreter::new();
        let long = "1 + ".repeat(30) + "1";
        assert!(interp.eval(&long).is_err());
        assert_eq!(interp.eval("1 + 2").unwrap(), 3);
    }
}

#[cfg(test)]
mod script_tests {
    use super::*;

    #[test]
    fn test_parse_hotkey_with_cursor_move() {
        let (script, _) = parse("hotkey A ->\nCursorMove, 10, 20, 1.5\n");

        assert_eq!(script.hotkeys.len(), 1);
        let hk = &script.hotkeys[0];
        assert_eq!(hk.label, "A");
        assert_eq!(hk.commands.len(), 1);
        assert_eq!(
            hk.commands[0],
            Command::CursorMove {
                expr_x: "10".to_string(),
                expr_y: "20".to_string(),
                duration: 1.5,
            }
        );
    }

    #[test]
    fn test_cursor_move_duration_defaults_to_zero() {
        let (script, _) = parse("hotkey A ->\nCursorMove, 1, 2\n");
        assert_eq!(
            script.hotkeys[0].commands[0],
            Command::CursorMove {
                expr_x: "1".to_string(),
                expr_y: "2".to_string(),
                duration: 0.0,
            }
        );
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let src = "# header comment\n\nhotkey A ->\n# inside a hotkey\n\nKeyPress, a\n";
        let (script, _) = parse(src);
        assert_eq!(script.hotkeys.len(), 1);
        assert_eq!(script.hotkeys[0].commands, vec![Command::KeyPress { key: 'a' }]);
    }

    #[test]
    fn test_malformed_lines_silently_skipped() {
        let src = "hotkey A ->\nCursorMove, 10\nnot a command\nMouseClick, 5, 6\n";
        let (script, _) = parse(src);
        // The short CursorMove and the garbage line drop out; the parse
        // never aborts and the valid click still lands.
        assert_eq!(script.hotkeys[0].commands.len(), 1);
        assert!(matches!(
            script.hotkeys[0].commands[0],
            Command::MouseClick { .. }
        ));
    }

    #[test]
    fn test_duplicate_labels_both_kept_in_order() {
        let src = "hotkey A ->\nKeyPress, x\nhotkey A ->\nKeyPress, y\n";
        let (script, _) = parse(src);
        assert_eq!(script.hotkeys.len(), 2);
        assert_eq!(script.hotkeys[0].commands, vec![Command::KeyPress { key: 'x' }]);
        assert_eq!(script.hotkeys[1].commands, vec![Command::KeyPress { key: 'y' }]);
    }

    #[test]
    fn test_unterminated_hotkey_line_keeps_label() {
        let (script, _) = parse("hotkey B\n");
        assert_eq!(script.hotkeys.len(), 1);
        assert_eq!(script.hotkeys[0].label, "B");
        assert!(script.hotkeys[0].commands.is_empty());
    }

    #[test]
    fn test_commands_before_any_hotkey_ignored() {
        let (script, _) = parse("KeyPress, a\nhotkey A ->\nKeyPress, b\n");
        assert_eq!(script.hotkeys.len(), 1);
        assert_eq!(script.hotkeys[0].commands, vec![Command::KeyPress { key: 'b' }]);
    }

    #[test]
    fn test_set_command_keeps_raw_expression() {
        let (script, _) = parse("hotkey A ->\nset x = y + 1\n");
        assert_eq!(
            script.hotkeys[0].commands[0],
            Command::SetVar {
                name: "x".to_string(),
                expr: "y + 1".to_string(),
            }
        );
    }

    #[test]
    fn test_read_script_lines_from_file() {
        let path = "test_read_lines.msr";
        fs::write(path, "hotkey A ->\nKeyPress, a\n").expect("Failed to write test file");

        let lines = read_script_lines(path).unwrap();
        assert_eq!(lines, vec!["hotkey A ->", "KeyPress, a"]);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_script_file_is_an_error() {
        assert!(read_script_lines("no_such_script.msr").is_err());
    }

    #[test]
    fn test_round_trip_preserves_script() {
        let src = "\
global varint base = 100
hotkey F1 ->
set x = base + 10
CursorMove, x, 200, 0.5
MouseClick, x, 200, 0
KeyPress, a
KeyRelease, a
hotkey F1 ->
CursorMove, 1, 2, 0
";
        let (script, _) = parse(src);
        let emitted = script.to_script_text();
        let (reparsed, _) = parse(&emitted);
        assert_eq!(script, reparsed);
    }
}
