//! The fixed mapping from piece types to cybersecurity vulnerabilities.
//!
//! Shown on every capture and in the in-game legend. The texts are the
//! teaching content of the game, so they live with the core rather than
//! the presentation layer.

use crate::types::PieceKind;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VulnerabilityInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ZERO_DAY: VulnerabilityInfo = VulnerabilityInfo {
    name: "Zero-Day Exploit",
    description: "Unknown vulnerabilities that have no patch. Like the king, this is the most \
                  critical threat - if exploited, game over!",
};

pub const SQL_INJECTION: VulnerabilityInfo = VulnerabilityInfo {
    name: "SQL Injection",
    description: "Most powerful attack vector. Allows attackers to manipulate databases by \
                  injecting malicious SQL code through input fields.",
};

pub const DDOS: VulnerabilityInfo = VulnerabilityInfo {
    name: "DDoS Attack",
    description: "Overwhelms systems with traffic. Like a rook moving in straight lines, it \
                  floods resources until they collapse.",
};

pub const MITM: VulnerabilityInfo = VulnerabilityInfo {
    name: "Man-in-the-Middle",
    description: "Intercepts communications between two parties. Moves diagonally like secrets \
                  passed through compromised channels.",
};

pub const PHISHING: VulnerabilityInfo = VulnerabilityInfo {
    name: "Phishing Attack",
    description: "Tricks users into revealing sensitive info. Unpredictable like the knight's \
                  L-shaped move - attacks from unexpected angles.",
};

pub const WEAK_PASSWORD: VulnerabilityInfo = VulnerabilityInfo {
    name: "Weak Password",
    description: "The most common vulnerability. Small but numerous, like pawns - often the \
                  first line of defense to be breached.",
};

/// Look up the vulnerability a piece type stands for. Total over all kinds.
pub fn vulnerability_for(kind: PieceKind) -> &'static VulnerabilityInfo {
    match kind {
        PieceKind::King => &ZERO_DAY,
        PieceKind::Queen => &SQL_INJECTION,
        PieceKind::Rook => &DDOS,
        PieceKind::Bishop => &MITM,
        PieceKind::Knight => &PHISHING,
        PieceKind::Pawn => &WEAK_PASSWORD,
    }
}
