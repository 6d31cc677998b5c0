//! Chess board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use cyberchess_core::GameState;
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(u8),
}

/// Renders the board with row 0 (Black's back rank) at the top, the way
/// the player faces it.
pub struct BoardView<'a> {
    game: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self { game }
    }

    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for r in 0..8u8 {
            let mut board_row = row![].spacing(0);
            for c in 0..8u8 {
                let sq = r * 8 + c;
                board_row = board_row.push(self.render_square(sq, r, c));
            }
            board_column = board_column.push(board_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.25, 0.18, 0.12),
                    width: 3.0,
                    radius: 2.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn render_square(&self, sq: u8, r: u8, c: u8) -> Element<'a, BoardMessage> {
        let is_light = (r + c) % 2 == 0;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        if self.game.selected == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        let content: Element<'a, BoardMessage> = match self.game.board.piece_at(sq) {
            Some(piece) => {
                let glyph = styles::piece_char(piece.color, piece.kind);
                let piece_color = match piece.color {
                    cyberchess_core::Color::White => Color::WHITE,
                    cyberchess_core::Color::Black => Color::BLACK,
                };
                text(glyph.to_string())
                    .size(SQUARE_SIZE * 0.72)
                    .color(piece_color)
                    .center()
                    .into()
            }
            None => text("").into(),
        };

        button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.12,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
