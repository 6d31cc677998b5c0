//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::menu::menu_view;
use crate::styles::{self, PANEL_WIDTH};

use cyberchess_core::{
    vulnerability_for, ClickOutcome, Color, Engine, GameState, Move, PieceKind,
};
use greedy_engine::GreedyEngine;
use iced::widget::{
    button, column, container, horizontal_rule, row, scrollable, text, vertical_space,
};
use iced::{Element, Length, Task, Theme};
use std::time::Duration;

/// How long the computer pretends to think before replying. Pacing only;
/// the actual move selection is effectively instant.
const THINK_DELAY: Duration = Duration::from_millis(800);

/// Side panels match the board's height.
const PANEL_HEIGHT: f32 = 560.0;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Game,
}

/// Main application state
pub struct CyberChessApp {
    /// Current screen
    screen: Screen,
    /// Game state
    game: GameState,
    /// Generation counter for the deferred computer reply; bumping it
    /// cancels anything still pending
    reply_epoch: u64,
    /// Is a computer reply already scheduled?
    reply_pending: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    StartGame,
    BackToMenu,

    // Board interaction
    Board(BoardMessage),

    // Game controls
    ResetGame,

    // The delayed computer reply
    ComputerMoveReady { epoch: u64, mv: Option<Move> },
}

impl CyberChessApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                screen: Screen::Menu,
                game: GameState::new(),
                reply_epoch: 0,
                reply_pending: false,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartGame => {
                self.screen = Screen::Game;
                self.game.reset();
                self.cancel_pending_reply();
                Task::none()
            }

            Message::BackToMenu => {
                self.screen = Screen::Menu;
                self.cancel_pending_reply();
                Task::none()
            }

            Message::ResetGame => {
                self.game.reset();
                self.cancel_pending_reply();
                tracing::info!("game reset");
                Task::none()
            }

            Message::Board(BoardMessage::SquareClicked(sq)) => {
                if self.screen != Screen::Game {
                    return Task::none();
                }
                match self.game.handle_click(sq) {
                    ClickOutcome::Moved { capture } => {
                        if let Some(kind) = capture {
                            tracing::info!(
                                vulnerability = vulnerability_for(kind).name,
                                "patched a vulnerability"
                            );
                        }
                        self.maybe_schedule_computer_reply()
                    }
                    _ => Task::none(),
                }
            }

            Message::ComputerMoveReady { epoch, mv } => {
                self.reply_pending = false;
                // Stale reply: the game was reset or ended while the delay
                // was pending.
                if epoch != self.reply_epoch
                    || self.game.game_over
                    || self.game.side_to_move != Color::Black
                {
                    return Task::none();
                }
                match mv {
                    Some(mv) => match self.game.apply_move(mv.from, mv.to) {
                        Ok(capture) => {
                            tracing::info!(from = mv.from, to = mv.to, ?capture, "computer moved");
                        }
                        Err(err) => {
                            tracing::warn!(%err, "computer produced an illegal move");
                        }
                    },
                    None => {
                        // Black cannot move at all and immediately loses.
                        self.game.forfeit(Color::Black);
                        tracing::info!("computer has no legal moves; game over");
                    }
                }
                Task::none()
            }
        }
    }

    /// Drop whatever reply is still in flight.
    fn cancel_pending_reply(&mut self) {
        self.reply_epoch += 1;
        self.reply_pending = false;
    }

    /// If it is the computer's turn, schedule its reply behind the pacing
    /// delay. The epoch in the message lets `update` discard replies that
    /// outlived a reset.
    fn maybe_schedule_computer_reply(&mut self) -> Task<Message> {
        if self.game.game_over || self.game.side_to_move != Color::Black || self.reply_pending {
            return Task::none();
        }

        self.reply_pending = true;
        let epoch = self.reply_epoch;
        let board = self.game.board.clone();
        tracing::debug!(epoch, "scheduling computer reply");

        Task::perform(
            async move {
                tokio::time::sleep(THINK_DELAY).await;
                let mut engine = GreedyEngine::new();
                engine.select_move(&board, Color::Black).ok()
            },
            move |mv| Message::ComputerMoveReady { epoch, mv },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Menu => menu_view(),
            Screen::Game => self.game_view(),
        }
    }

    /// Render the game screen: capture panels either side of the board,
    /// the transient capture banner, and the legend.
    fn game_view(&self) -> Element<'_, Message> {
        let back_btn = button(text("⟵ Back to Rules").size(13))
            .on_press(Message::BackToMenu)
            .style(button::secondary);

        let title = text("Cybersecurity Chess")
            .size(26)
            .color(styles::DEFENSE_ACCENT);
        let tip = text("Tip: Try to control the center like a real chess game!")
            .size(13)
            .color(styles::MUTED_TEXT);

        let defenses = capture_panel(
            "Your Defenses (White)",
            styles::DEFENSE_ACCENT,
            &self.game.white_captures,
            "No vulnerabilities patched yet",
        );
        let exploits = capture_panel(
            "Computer Exploits (Black)",
            styles::EXPLOIT_ACCENT,
            &self.game.black_captures,
            "No vulnerabilities exploited yet",
        );

        let board = BoardView::new(&self.game).view().map(Message::Board);

        let status = text(self.status_line()).size(16);
        let reset_btn = button(text("Reset Game"))
            .on_press(Message::ResetGame)
            .style(button::primary);

        let board_column = column![
            board,
            vertical_space().height(12),
            row![status, reset_btn].spacing(20),
        ]
        .align_x(iced::Alignment::Center);

        let main_row = row![
            container(defenses).width(PANEL_WIDTH).height(PANEL_HEIGHT),
            container(board_column).center_x(Length::Fill),
            container(exploits).width(PANEL_WIDTH).height(PANEL_HEIGHT),
        ]
        .spacing(20);

        let mut page = column![
            row![back_btn, iced::widget::horizontal_space(), tip].spacing(10),
            container(title).center_x(Length::Fill),
            vertical_space().height(10),
            main_row,
        ]
        .spacing(5)
        .padding(20);

        if let Some(kind) = self.game.last_capture {
            page = page.push(vertical_space().height(10));
            page = page.push(capture_banner(kind));
        }

        page = page.push(vertical_space().height(10));
        page = page.push(legend());

        scrollable(page).into()
    }

    fn status_line(&self) -> String {
        if self.game.game_over {
            return match self.game.winner {
                Some(Color::White) => "🎉 You Win!".to_string(),
                _ => "💻 Computer Wins!".to_string(),
            };
        }
        match self.game.side_to_move {
            Color::White => "Turn: Your Turn".to_string(),
            Color::Black => "Turn: Computer Thinking...".to_string(),
        }
    }
}

/// One side panel listing the vulnerability names a side has captured.
fn capture_panel<'a>(
    title: &'a str,
    accent: iced::Color,
    captures: &'a [PieceKind],
    empty_text: &'a str,
) -> Element<'a, Message> {
    let mut list = column![].spacing(4);
    if captures.is_empty() {
        list = list.push(text(empty_text).size(13).color(styles::MUTED_TEXT));
    } else {
        for kind in captures {
            list = list.push(text(vulnerability_for(*kind).name).size(13));
        }
    }

    column![
        text(title).size(16).color(accent),
        horizontal_rule(1),
        vertical_space().height(6),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(4)
    .into()
}

/// The transient banner for the most recent capture. Overwritten on every
/// capture; not a history.
fn capture_banner(kind: PieceKind) -> Element<'static, Message> {
    let info = vulnerability_for(kind);
    container(
        column![
            text(info.name).size(20).color(styles::DEFENSE_ACCENT),
            text(info.description).size(14),
        ]
        .spacing(6),
    )
    .padding(14)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        border: iced::Border {
            color: styles::DEFENSE_ACCENT,
            width: 1.5,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// The full vulnerability legend, two entries per row.
fn legend() -> Element<'static, Message> {
    const KINDS: [(&str, PieceKind); 6] = [
        ("♔/♚ King", PieceKind::King),
        ("♕/♛ Queen", PieceKind::Queen),
        ("♖/♜ Rook", PieceKind::Rook),
        ("♗/♝ Bishop", PieceKind::Bishop),
        ("♘/♞ Knight", PieceKind::Knight),
        ("♙ Pawn", PieceKind::Pawn),
    ];

    let mut grid = column![text("Vulnerability Legend").size(18)].spacing(8);
    for pair in KINDS.chunks(2) {
        let mut legend_row = row![].spacing(20);
        for (label, kind) in pair {
            let info = vulnerability_for(*kind);
            legend_row = legend_row.push(
                column![
                    text(format!("{label}: {}", info.name))
                        .size(14)
                        .color(styles::DEFENSE_ACCENT),
                    text(info.description).size(12).color(styles::MUTED_TEXT),
                ]
                .spacing(2)
                .width(Length::FillPortion(1)),
            );
        }
        grid = grid.push(legend_row);
    }

    container(grid).padding(10).width(Length::Fill).into()
}
