//! Symbolic key labels and their physical key codes.
//!
//! The codes follow the ANSI keyboard layout the capture backend reports.
//! The table is fixed: scripts may only bind labels listed here, and an
//! unknown label never matches any signaled code.

pub type KeyCode = u16;

static KEY_TABLE: &[(&str, KeyCode)] = &[
    ("A", 0),
    ("S", 1),
    ("D", 2),
    ("F", 3),
    ("H", 4),
    ("G", 5),
    ("Z", 6),
    ("X", 7),
    ("C", 8),
    ("V", 9),
    ("B", 11),
    ("Q", 12),
    ("W", 13),
    ("E", 14),
    ("R", 15),
    ("Y", 16),
    ("T", 17),
    ("1", 18),
    ("2", 19),
    ("3", 20),
    ("4", 21),
    ("6", 22),
    ("5", 23),
    ("=", 24),
    ("9", 25),
    ("7", 26),
    ("-", 27),
    ("8", 28),
    ("0", 29),
    ("RightBracket", 30),
    ("O", 31),
    ("U", 32),
    ("LeftBracket", 33),
    ("I", 34),
    ("P", 35),
    ("L", 37),
    ("J", 38),
    ("'", 39),
    ("K", 40),
    (";", 41),
    ("\\", 42),
    (",", 43),
    ("/", 44),
    ("N", 45),
    ("M", 46),
    (".", 47),
    ("Tab", 48),
    ("Space", 49),
    ("Backtick", 50),
    ("Escape", 53),
    ("F1", 122),
    ("F2", 120),
    ("F3", 99),
    ("F4", 118),
    ("F5", 96),
    ("F6", 97),
    ("F7", 98),
    ("F8", 100),
    ("F9", 101),
    ("F10", 109),
    ("F11", 103),
    ("F12", 111),
];

/// Resolve a symbolic key label to its physical code, if the label is known.
pub fn lookup_keycode(label: &str) -> Option<KeyCode> {
    KEY_TABLE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}
