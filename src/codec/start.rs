//! Code de démarrage `S0..S6` partagé par tous les joueurs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Sous-systèmes actifs au démarrage de la session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum StartCode {
    S0,
    S1,
    S2,
    S3,
    S4,
    #[default]
    S6,
}

static START_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cmw\s+\d+\s+(S[0-6])(?:x|[\s,]|$)").unwrap());

impl StartCode {
    pub const ALL: [StartCode; 6] = [
        StartCode::S0,
        StartCode::S1,
        StartCode::S2,
        StartCode::S3,
        StartCode::S4,
        StartCode::S6,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StartCode::S0 => "S0",
            StartCode::S1 => "S1",
            StartCode::S2 => "S2",
            StartCode::S3 => "S3",
            StartCode::S4 => "S4",
            StartCode::S6 => "S6",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StartCode::S0 => "Start with solenoid enabled",
            StartCode::S1 => "Start with rumble enabled",
            StartCode::S2 => "Start with the RED LED enabled",
            StartCode::S3 => "Start with the GREEN LED enabled",
            StartCode::S4 => "Start with the BLUE LED enabled",
            StartCode::S6 => "Start with everything enabled",
        }
    }

    /// Libellé de liste déroulante, ex. `"S6 - Start with everything enabled"`
    pub fn label(self) -> String {
        format!("{} - {}", self.as_str(), self.description())
    }

    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for StartCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cherche le premier `cmw <n> S<d>` d'une valeur `MameStart`.
///
/// `None` si aucun jeton ne correspond ou si le code n'est pas reconnu (`S5`).
pub fn decode_start_code(text: &str) -> Option<StartCode> {
    START_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| StartCode::parse(m.as_str()))
}
