//! Détection du nombre de joueurs configurés (1 à 4)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::codec::{command_players, mame_start_value, MAME_START_KEY};
use crate::document::LineDocument;

/// Nombre maximal de joueurs
pub const MAX_PLAYERS: u8 = 4;

/// Section portant les sorties par joueur
pub const OUTPUT_SECTION: &str = "Output";

static P_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"P(\d+)(?:_|\s*=|\s)").unwrap());
static PLAYER_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"Player\s?(\d+)(?:_|\s*=|\s)").unwrap());

/// Numéro de joueur validé (1..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Player(u8);

impl Player {
    pub fn new(number: u8) -> Option<Self> {
        (1..=MAX_PLAYERS).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Position dans un tableau indexé par joueur
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Les quatre joueurs, dans l'ordre
    pub fn all() -> impl Iterator<Item = Player> {
        (1..=MAX_PLAYERS).map(Player)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nombre de joueurs détecté, toujours dans 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Borne la valeur dans 1..=4
    pub fn new(count: u32) -> Self {
        Self(count.clamp(1, MAX_PLAYERS as u32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Joueurs 1..=n
    pub fn players(self) -> impl Iterator<Item = Player> {
        (1..=self.0).map(Player)
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Détecte le nombre de joueurs d'un document.
///
/// Recherche dans la section `[Output]` (ou tout le document si elle manque)
/// les clés `P<n>` et `Player<n>`, plus les `cmw <n>` de `MameStart`.
pub fn detect_players(document: &LineDocument) -> PlayerCount {
    let scope = document
        .section_text(OUTPUT_SECTION)
        .unwrap_or_else(|| document.to_text());

    let mame_start = document
        .find_key_line(MAME_START_KEY)
        .and_then(|index| mame_start_value(document.lines()[index].trimmed()));

    detect_in(&scope, mame_start)
}

/// Version texte de [`detect_players`]
pub fn detect_in(keys_text: &str, mame_start: Option<&str>) -> PlayerCount {
    let mut found: BTreeSet<u32> = BTreeSet::new();

    for regex in [&*P_KEY, &*PLAYER_KEY] {
        found.extend(
            regex
                .captures_iter(keys_text)
                .filter_map(|caps| caps[1].parse::<u32>().ok()),
        );
    }

    if let Some(value) = mame_start {
        found.extend(command_players(value));
    }

    // Le joueur 0 n'existe pas
    found.remove(&0);

    match found.iter().next_back() {
        Some(&max) => PlayerCount::new(max),
        None => PlayerCount::default(),
    }
}
