//! The start screen: what the game is, how to play, and the mapping table.

use crate::app::Message;
use crate::styles;
use cyberchess_core::{vulnerability_for, PieceKind};
use iced::widget::{button, column, container, horizontal_rule, row, text, vertical_space};
use iced::{Element, Length};

const HOW_TO_PLAY: [&str; 5] = [
    "You play as White.",
    "Click a white piece, then click a target square to move.",
    "The computer plays as Black.",
    "Capture enemy pieces to reveal their vulnerability type.",
    "Capture the enemy King (Zero-Day Exploit) to win.",
];

const PIECE_NAMES: [(&str, PieceKind); 6] = [
    ("King", PieceKind::King),
    ("Queen", PieceKind::Queen),
    ("Rook", PieceKind::Rook),
    ("Bishop", PieceKind::Bishop),
    ("Knight", PieceKind::Knight),
    ("Pawn", PieceKind::Pawn),
];

pub fn menu_view() -> Element<'static, Message> {
    let title = text("Cybersecurity Chess")
        .size(34)
        .color(styles::DEFENSE_ACCENT);

    let intro = text(
        "Learn core cybersecurity vulnerabilities by playing a simple chess game \
         against the computer. Every captured piece reveals a real-world attack!",
    )
    .size(15);

    let mut how_to = column![text("How to Play").size(18)].spacing(4);
    for line in HOW_TO_PLAY {
        how_to = how_to.push(text(format!("• {line}")).size(14));
    }

    let mut mapping = column![text("Vulnerability Mapping").size(18)].spacing(4);
    for (piece, kind) in PIECE_NAMES {
        let info = vulnerability_for(kind);
        mapping = mapping.push(text(format!("• {piece} → {}", info.name)).size(14));
    }

    let objective = column![
        text("Objective").size(18),
        text(
            "Play like normal chess, but think like a security engineer: every \
             captured piece = one vulnerability identified. Your goal is to patch \
             (capture) more vulnerabilities than the attacker exploits, and \
             ultimately neutralize the Zero-Day (black King).",
        )
        .size(14),
    ]
    .spacing(6);

    let start_btn = button(text("Start Game").size(16))
        .on_press(Message::StartGame)
        .style(button::primary)
        .padding(12);

    let content = column![
        title,
        vertical_space().height(10),
        intro,
        vertical_space().height(12),
        horizontal_rule(1),
        vertical_space().height(12),
        row![how_to.width(Length::FillPortion(1)), mapping.width(Length::FillPortion(1))]
            .spacing(30),
        vertical_space().height(12),
        objective,
        vertical_space().height(20),
        container(start_btn).center_x(Length::Fill),
    ]
    .spacing(5)
    .max_width(760);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(40)
        .into()
}
