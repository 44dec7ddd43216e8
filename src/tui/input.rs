use crossterm::event::{KeyCode, KeyEvent};

use crate::browse::command::Command;

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveSelectionUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveSelectionDown),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => Some(Command::Advance),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(Command::Back),
        KeyCode::Char('d') => Some(Command::DeleteSelectedEdge),
        KeyCode::Char('D') => Some(Command::DeleteSelectedVertex),
        KeyCode::Char('i') => Some(Command::InsertEdge),
        KeyCode::Char('I') => Some(Command::InsertVertex),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys_move_the_selection() {
        assert_eq!(
            command_for_key(key(KeyCode::Up)),
            Some(Command::MoveSelectionUp)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('k'))),
            Some(Command::MoveSelectionUp)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Down)),
            Some(Command::MoveSelectionDown)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('j'))),
            Some(Command::MoveSelectionDown)
        );
        assert_eq!(command_for_key(key(KeyCode::PageUp)), Some(Command::PageUp));
        assert_eq!(
            command_for_key(key(KeyCode::PageDown)),
            Some(Command::PageDown)
        );
    }

    #[test]
    fn advance_and_back_have_three_bindings_each() {
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Enter] {
            assert_eq!(command_for_key(key(code)), Some(Command::Advance));
        }
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Backspace] {
            assert_eq!(command_for_key(key(code)), Some(Command::Back));
        }
    }

    #[test]
    fn lowercase_deletes_the_edge_uppercase_the_vertex() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('d'))),
            Some(Command::DeleteSelectedEdge)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('D'))),
            Some(Command::DeleteSelectedVertex)
        );
    }

    #[test]
    fn reserved_insert_keys_are_mapped() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('i'))),
            Some(Command::InsertEdge)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('I'))),
            Some(Command::InsertVertex)
        );
    }

    #[test]
    fn escape_and_q_exit() {
        assert_eq!(command_for_key(key(KeyCode::Esc)), Some(Command::Exit));
        assert_eq!(command_for_key(key(KeyCode::Char('q'))), Some(Command::Exit));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(command_for_key(key(KeyCode::Char('x'))), None);
        assert_eq!(command_for_key(key(KeyCode::Tab)), None);
        assert_eq!(command_for_key(key(KeyCode::F(5))), None);
    }
}
