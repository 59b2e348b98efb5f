//! Event handling for the viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Page flipping
    FlipNext,
    FlipPrev,
    FirstPage,
    LastPage,

    // UI toggles
    ToggleHelp,

    // Application
    Cancel,
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Flip - vim style
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::FlipNext,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::FlipPrev,
            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::FlipNext,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::FlipPrev,
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::FlipNext,

            // Flip - arrows and paging keys
            (KeyCode::Right, _) => KeyAction::FlipNext,
            (KeyCode::Left, _) => KeyAction::FlipPrev,
            (KeyCode::PageDown, _) => KeyAction::FlipNext,
            (KeyCode::PageUp, _) => KeyAction::FlipPrev,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::FirstPage,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::LastPage,
            (KeyCode::Char('G'), KeyModifiers::NONE) => KeyAction::LastPage,
            (KeyCode::Home, _) => KeyAction::FirstPage,
            (KeyCode::End, _) => KeyAction::LastPage,

            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,

            _ => KeyAction::None,
        }
    }
}

/// A key binding shown in the help overlay.
#[derive(Debug, Clone, Copy)]
pub struct HelpBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Key bindings in display order.
pub const HELP_BINDINGS: &[HelpBinding] = &[
    HelpBinding {
        keys: "l → n Space PgDn",
        description: "Flip next",
    },
    HelpBinding {
        keys: "h ← p PgUp",
        description: "Flip back",
    },
    HelpBinding {
        keys: "g Home",
        description: "First page",
    },
    HelpBinding {
        keys: "G End",
        description: "Last page",
    },
    HelpBinding {
        keys: "?",
        description: "Toggle help",
    },
    HelpBinding {
        keys: "q Esc Ctrl-C",
        description: "Quit",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flip_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('l'))), KeyAction::FlipNext);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Right)), KeyAction::FlipNext);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char(' '))), KeyAction::FlipNext);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Left)), KeyAction::FlipPrev);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::PageUp)), KeyAction::FlipPrev);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    /// Key event for a key name as written in the help overlay.
    fn listed_key(name: &str) -> KeyEvent {
        match name {
            "→" => key(KeyCode::Right),
            "←" => key(KeyCode::Left),
            "Space" => key(KeyCode::Char(' ')),
            "PgDn" => key(KeyCode::PageDown),
            "PgUp" => key(KeyCode::PageUp),
            "Home" => key(KeyCode::Home),
            "End" => key(KeyCode::End),
            "Esc" => key(KeyCode::Esc),
            "Ctrl-C" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            other => {
                let mut chars = other.chars();
                let c = chars.next().unwrap();
                assert!(chars.next().is_none(), "unrecognised key name {other:?}");
                key(KeyCode::Char(c))
            }
        }
    }

    #[test]
    fn test_help_lists_every_binding() {
        let expected: &[&[KeyAction]] = &[
            &[KeyAction::FlipNext],
            &[KeyAction::FlipPrev],
            &[KeyAction::FirstPage],
            &[KeyAction::LastPage],
            &[KeyAction::ToggleHelp],
            &[KeyAction::Quit, KeyAction::Cancel, KeyAction::ForceQuit],
        ];
        assert_eq!(HELP_BINDINGS.len(), expected.len());

        for (binding, actions) in HELP_BINDINGS.iter().zip(expected) {
            for name in binding.keys.split_whitespace() {
                let action = KeyAction::from_key_event(listed_key(name));
                assert!(
                    actions.contains(&action),
                    "{name} is listed under {:?} but maps to {action:?}",
                    binding.description
                );
            }
        }

        let listed: Vec<&str> = HELP_BINDINGS
            .iter()
            .flat_map(|binding| binding.keys.split_whitespace())
            .collect();
        for name in ["n", "p", "PgDn", "PgUp", "Ctrl-C"] {
            assert!(listed.contains(&name), "{name} missing from help");
        }
    }
}
