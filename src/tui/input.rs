//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_engine::Position;

/// Moves cursor based on arrow keys (or vi-style hjkl), stopping at the edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up | KeyCode::Char('k') => cursor.offset(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => cursor.offset(1, 0),
        KeyCode::Left | KeyCode::Char('h') => cursor.offset(0, -1),
        KeyCode::Right | KeyCode::Char('l') => cursor.offset(0, 1),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_one_square() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
    }

    #[test]
    fn test_edges_hold() {
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
