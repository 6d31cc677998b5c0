//! Styling constants and theme configuration

use cyberchess_core::{Color as Side, PieceKind};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.55, 0.36, 0.24); // Walnut
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.30, 0.75, 0.85); // Cyan ring

// Panel accents
pub const DEFENSE_ACCENT: Color = Color::from_rgb(0.30, 0.75, 0.85); // Cyan
pub const EXPLOIT_ACCENT: Color = Color::from_rgb(0.90, 0.35, 0.35); // Red
pub const MUTED_TEXT: Color = Color::from_rgb(0.63, 0.63, 0.68);

// Dimensions
pub const SQUARE_SIZE: f32 = 64.0;
pub const PANEL_WIDTH: f32 = 280.0;

/// Unicode glyph for a piece. Both sides share the filled pawn glyph.
pub fn piece_char(side: Side, kind: PieceKind) -> char {
    match (side, kind) {
        (Side::White, PieceKind::King) => '♔',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::Black, PieceKind::King) => '♚',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Knight) => '♞',
        (_, PieceKind::Pawn) => '♙',
    }
}
