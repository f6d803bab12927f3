//! Couleurs de lampe par joueur (`P<n>_LmpStart`)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::players::Player;

/// Suffixe de clé des lampes
pub const LAMP_KEY: &str = "LmpStart";

static LAMP_RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*P(\d+)_LmpStart\s*=\s*cmw\s+(\d+)\s+F2x1x(\d+)xF3x1x(\d+)xF4x1x(\d+)").unwrap()
});

/// Palette proposée pour chaque joueur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LampColor {
    Red,
    Blue,
    Green,
    Orange,
    Yellow,
    White,
    Cyan,
    Magenta,
}

impl LampColor {
    pub const ALL: [LampColor; 8] = [
        LampColor::Red,
        LampColor::Blue,
        LampColor::Green,
        LampColor::Orange,
        LampColor::Yellow,
        LampColor::White,
        LampColor::Cyan,
        LampColor::Magenta,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            LampColor::Red => (255, 0, 0),
            LampColor::Blue => (0, 0, 255),
            LampColor::Green => (0, 255, 0),
            LampColor::Orange => (255, 150, 0),
            LampColor::Yellow => (255, 255, 0),
            LampColor::White => (255, 255, 255),
            LampColor::Cyan => (0, 255, 255),
            LampColor::Magenta => (255, 0, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LampColor::Red => "red",
            LampColor::Blue => "blue",
            LampColor::Green => "green",
            LampColor::Orange => "orange",
            LampColor::Yellow => "yellow",
            LampColor::White => "white",
            LampColor::Cyan => "cyan",
            LampColor::Magenta => "magenta",
        }
    }

    /// Couleur exacte de la palette, sinon `None`
    pub fn from_rgb(rgb: (u8, u8, u8)) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.rgb() == rgb)
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for LampColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clé `P<n>_LmpStart`
pub fn lamp_key(player: Player) -> String {
    format!("P{}_{}", player, LAMP_KEY)
}

/// Ligne allumant la lampe au démarrage puis l'éteignant
pub fn lamp_line(player: Player, color: LampColor) -> String {
    let (r, g, b) = color.rgb();
    format!(
        "{key} = cmw {n} F2x1x{r}xF3x1x{g}xF4x1x{b} | cmw {n} F2x1x0xF3x1x0xF4x1x0",
        key = lamp_key(player),
        n = player,
        r = r,
        g = g,
        b = b
    )
}

/// Ligne vide de la lampe
pub fn cleared_lamp_line(player: Player) -> String {
    format!("{} =", lamp_key(player))
}

/// Couleurs décodées des lignes `P<n>_LmpStart`, indexées par joueur.
///
/// Un RGB hors palette ou un `cmw` d'un autre joueur laisse la case vide.
pub fn decode_lamp_colors(text: &str) -> [Option<LampColor>; 4] {
    let mut colors = [None; 4];

    for caps in LAMP_RGB.captures_iter(text) {
        let player = match caps[1].parse::<u8>().ok().and_then(Player::new) {
            Some(player) => player,
            None => continue,
        };
        if caps[2].parse::<u8>().ok() != Some(player.number()) {
            continue;
        }
        // Première occurrence seulement
        if colors[player.index()].is_some() {
            continue;
        }

        let channel = |i: usize| caps[i].parse::<u8>().ok();
        if let (Some(r), Some(g), Some(b)) = (channel(3), channel(4), channel(5)) {
            colors[player.index()] = LampColor::from_rgb((r, g, b));
        }
    }

    colors
}
