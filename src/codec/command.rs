//! Liste de commandes de la ligne `MameStart`

use once_cell::sync::Lazy;
use regex::Regex;

use super::{encode, ModeSelection, StartCode};

/// Clé de la ligne de démarrage
pub const MAME_START_KEY: &str = "MameStart";

static MAME_START_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*MameStart\s*=\s*(.*?)\s*$").unwrap());

static START_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cmw\s+(\d+)\s+(S[0-6])((?:x[^,\s]*)?)(.*)$").unwrap());

static CMW_PLAYER: Lazy<Regex> = Lazy::new(|| Regex::new(r"cmw\s+(\d+)").unwrap());

/// Extrait la valeur d'une ligne `MameStart = ...`
pub fn mame_start_value(line: &str) -> Option<&str> {
    MAME_START_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Suffixe de modes du premier jeton de démarrage (`xM0x1...`), sans le `x` initial
pub fn start_token_suffix(value: &str) -> Option<&str> {
    value
        .split(',')
        .filter_map(|token| START_TOKEN.captures(token.trim()))
        .find_map(|caps| caps.get(3))
        .map(|m| m.as_str().trim_start_matches('x'))
        .filter(|suffix| !suffix.is_empty())
}

/// Numéros de joueurs cités par les commandes `cmw <n>`
pub fn command_players(value: &str) -> Vec<u32> {
    CMW_PLAYER
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Réécrit la liste de commandes avec les modes courants.
///
/// - `cmw <n> S<d>[x...]` : suffixe remplacé, le reste du jeton conservé ;
///   le code `S<d>` devient `start` s'il est donné, sinon il est gardé
/// - `cmo ...` : entouré de guillemets
/// - tout le reste : inchangé
pub fn rewrite_command_list(value: &str, start: Option<StartCode>, modes: &ModeSelection) -> String {
    let suffix = encode(modes);

    value
        .split(',')
        .map(|token| {
            let token = token.trim();
            if let Some(caps) = START_TOKEN.captures(token) {
                let code = start.map_or_else(|| caps[2].to_string(), |start| start.to_string());
                format!("cmw {} {}{}{}", &caps[1], code, suffix, &caps[4])
            } else if token.starts_with("cmo") {
                format!("\"{}\"", token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ligne `MameStart` complète, au format canonique
pub fn mame_start_line(value: &str) -> String {
    format!("{} = {}", MAME_START_KEY, value)
}
