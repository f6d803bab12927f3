//! Champs de sortie par joueur et préréglages associés

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::players::Player;

/// Libellé affiché quand aucun préréglage n'est choisi
pub const UNSET_LABEL: &str = "------";

/// Libellé des valeurs libres
pub const CUSTOM_LABEL: &str = "Custom";

/// Préréglage nommé d'un champ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub value: &'static str,
}

const fn preset(label: &'static str, value: &'static str) -> Preset {
    Preset { label, value }
}

const RECOIL_PRESETS: &[Preset] = &[
    preset("Solenoid Single Pulse (recommended)", "F0x2x1"),
    preset("Solenoid Switching", "F0x%s%"),
    preset("Rumble Single Pulse (recommended for rumble)", "F1x2x1"),
    preset("Rumble Switching", "F1x%s%"),
];

const DAMAGED_PRESETS: &[Preset] = &[
    preset("Rumble Single Pulse (recommended)", "F1x2x1"),
    preset("Rumble Switching", "F1x%s%"),
];

const CLIP_PRESETS: &[Preset] = &[
    preset("Red/Off", "F2x1x255xF3x1x0xF4x1x0"),
    preset("Red/White", "F2x1x255xF3x1x255xF4x1x255"),
];

const AMMO_PRESETS: &[Preset] = &[preset("OLED On", "FDAx%s%")];

const LIFE_PRESETS: &[Preset] = &[preset("OLED On", "FDLx%s%")];

const CREDITS_PRESETS: &[Preset] = &[preset("OLED On (coming soon)", "XX")];

// Valeurs historiques reconnues à la lecture uniquement
const CLIP_ALIASES: &[Preset] = &[preset("Red/Off", "XX")];
const AMMO_ALIASES: &[Preset] = &[preset("OLED On", "DFAx%s%")];
const LIFE_ALIASES: &[Preset] = &[preset("OLED On", "DFLx%s%"), preset("OLED On", "XX")];

/// Type de champ de la section `[Output]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FieldKind {
    CtmRecoil,
    Damaged,
    Clip,
    Ammo,
    Life,
    Credits,
    LmpStart,
    /// Clé `P<n>_<nom>` non reconnue
    Custom(String),
}

impl FieldKind {
    /// Champs à préréglages, dans l'ordre d'affichage
    pub const STANDARD: [FieldKind; 6] = [
        FieldKind::CtmRecoil,
        FieldKind::Damaged,
        FieldKind::Clip,
        FieldKind::Ammo,
        FieldKind::Life,
        FieldKind::Credits,
    ];

    /// Nom de clé après `P<n>_`
    pub fn key_name(&self) -> &str {
        match self {
            FieldKind::CtmRecoil => "CtmRecoil",
            FieldKind::Damaged => "Damaged",
            FieldKind::Clip => "Clip",
            FieldKind::Ammo => "Ammo",
            FieldKind::Life => "Life",
            FieldKind::Credits => "Credits",
            FieldKind::LmpStart => "LmpStart",
            FieldKind::Custom(name) => name,
        }
    }

    /// Type correspondant à un nom de clé (sensible à la casse)
    pub fn from_key_name(name: &str) -> FieldKind {
        Self::STANDARD
            .into_iter()
            .chain([FieldKind::LmpStart])
            .find(|kind| kind.key_name() == name)
            .unwrap_or_else(|| FieldKind::Custom(name.to_string()))
    }

    pub fn is_known(name: &str) -> bool {
        !matches!(Self::from_key_name(name), FieldKind::Custom(_))
    }

    /// Tous sauf `Credits` sont déclinés par joueur
    pub fn is_per_player(&self) -> bool {
        !matches!(self, FieldKind::Credits)
    }

    /// Clé complète ; `player` est ignoré pour `Credits`
    pub fn key(&self, player: Player) -> String {
        if self.is_per_player() {
            format!("P{}_{}", player, self.key_name())
        } else {
            self.key_name().to_string()
        }
    }

    /// Ligne canonique `P<n>_<Kind> = cmw <n> <valeur>` ou `P<n>_<Kind> =`.
    ///
    /// Une valeur sur plusieurs lignes est coupée au premier saut de ligne.
    pub fn line(&self, player: Player, value: &str) -> String {
        let value = first_line(value).trim();
        // Credits passe toujours par la carte 1
        let card = if self.is_per_player() { player.number() } else { 1 };
        let key = self.key(player);

        if value.is_empty() {
            format!("{} =", key)
        } else {
            format!("{} = cmw {} {}", key, card, value)
        }
    }

    pub fn presets(&self) -> &'static [Preset] {
        match self {
            FieldKind::CtmRecoil => RECOIL_PRESETS,
            FieldKind::Damaged => DAMAGED_PRESETS,
            FieldKind::Clip => CLIP_PRESETS,
            FieldKind::Ammo => AMMO_PRESETS,
            FieldKind::Life => LIFE_PRESETS,
            FieldKind::Credits => CREDITS_PRESETS,
            FieldKind::LmpStart | FieldKind::Custom(_) => &[],
        }
    }

    fn aliases(&self) -> &'static [Preset] {
        match self {
            FieldKind::Clip => CLIP_ALIASES,
            FieldKind::Ammo => AMMO_ALIASES,
            FieldKind::Life => LIFE_ALIASES,
            _ => &[],
        }
    }

    /// Valeur d'un préréglage par libellé
    pub fn preset_value(&self, label: &str) -> Option<&'static str> {
        self.presets()
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value)
    }

    /// Recherche inverse valeur exacte -> préréglage
    pub fn preset_for_value(&self, value: Option<&str>) -> PresetSelection {
        let value = match value.map(str::trim) {
            None | Some("") => return PresetSelection::Unset,
            Some(value) => value,
        };

        self.presets()
            .iter()
            .chain(self.aliases())
            .find(|p| p.value == value)
            .map_or(PresetSelection::Custom, |p| PresetSelection::Preset(p.label))
    }
}

/// Texte avant le premier `\r` ou `\n`
pub fn first_line(value: &str) -> &str {
    match value.find(['\r', '\n']) {
        Some(index) => &value[..index],
        None => value,
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// Préréglage sélectionné pour un champ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PresetSelection {
    #[default]
    Unset,
    Preset(&'static str),
    Custom,
}

impl PresetSelection {
    pub fn label(self) -> &'static str {
        match self {
            PresetSelection::Unset => UNSET_LABEL,
            PresetSelection::Preset(label) => label,
            PresetSelection::Custom => CUSTOM_LABEL,
        }
    }
}

impl fmt::Display for PresetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// État lu d'un champ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    /// Au moins une clé existe dans le document
    pub present: bool,

    /// Valeur du plus petit joueur présent, `None` si vide
    pub value: Option<String>,

    /// Valeurs non vides par numéro de joueur
    pub per_player: BTreeMap<u8, String>,

    pub preset: PresetSelection,
}

static FIELD_PATTERNS: Lazy<Vec<(FieldKind, Regex)>> = Lazy::new(|| {
    FieldKind::STANDARD
        .into_iter()
        .filter_map(|kind| field_pattern(&kind).map(|regex| (kind, regex)))
        .collect()
});

static SETTING_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*P(\d+)_(\w+)[ \t]*=").unwrap());

/// Motif ancré en début de ligne : `P<n>_<Kind> = [cmw <n>] valeur`
fn field_pattern(kind: &FieldKind) -> Option<Regex> {
    let key = regex::escape(kind.key_name());
    let pattern = if kind.is_per_player() {
        format!(
            r"(?m)^[ \t]*P(\d+)_{}[ \t]*=[ \t]*(?:cmw[ \t]*\d+[ \t]*)?(.*?)[ \t]*\r?$",
            key
        )
    } else {
        format!(
            r"(?m)^[ \t]*(){}[ \t]*=[ \t]*(?:cmw[ \t]*\d+[ \t]*)?(.*?)[ \t]*\r?$",
            key
        )
    };

    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Motif invalide pour {} : {}", kind, e);
            None
        }
    }
}

fn extract_with(kind: &FieldKind, regex: &Regex, text: &str) -> FieldState {
    let mut state = FieldState::default();

    for caps in regex.captures_iter(text) {
        let number = if kind.is_per_player() {
            match caps[1].parse::<u8>().ok().and_then(Player::new) {
                Some(player) => player.number(),
                None => continue,
            }
        } else {
            1
        };

        state.present = true;
        let value = caps[2].trim();
        if !value.is_empty() {
            // Première occurrence par joueur
            state.per_player.entry(number).or_insert_with(|| value.to_string());
        }
    }

    state.value = state.per_player.values().next().cloned();
    state.preset = kind.preset_for_value(state.value.as_deref());
    state
}

/// Extrait l'état d'un champ depuis le texte complet du document
pub fn extract_field(kind: &FieldKind, text: &str) -> FieldState {
    if let Some((_, regex)) = FIELD_PATTERNS.iter().find(|(k, _)| k == kind) {
        return extract_with(kind, regex, text);
    }

    match field_pattern(kind) {
        Some(regex) => extract_with(kind, &regex, text),
        None => FieldState::default(),
    }
}

/// Noms de clés `P<n>_<nom>` inconnus, dans l'ordre d'apparition
pub fn discover_custom_fields(output_text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in SETTING_KEY.captures_iter(output_text) {
        let player_ok = caps[1].parse::<u32>().map_or(false, |n| n > 0);
        let name = &caps[2];
        if player_ok && !FieldKind::is_known(name) && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> Player {
        Player::new(n).unwrap()
    }

    #[test]
    fn test_canonical_lines() {
        assert_eq!(FieldKind::Clip.line(p(2), "XX"), "P2_Clip = cmw 2 XX");
        assert_eq!(FieldKind::Clip.line(p(2), "  "), "P2_Clip =");
        assert_eq!(FieldKind::Credits.line(p(3), "XX"), "Credits = cmw 1 XX");
        assert_eq!(FieldKind::Credits.line(p(1), ""), "Credits =");
        assert_eq!(
            FieldKind::Custom("Flash".into()).line(p(1), "F5x1"),
            "P1_Flash = cmw 1 F5x1"
        );
    }

    #[test]
    fn test_line_stops_at_line_break() {
        assert_eq!(FieldKind::Clip.line(p(1), "F1\nP4_Clip = cmw 4 X"), "P1_Clip = cmw 1 F1");
        assert_eq!(FieldKind::Ammo.line(p(1), "FDAx%s%\r\n"), "P1_Ammo = cmw 1 FDAx%s%");
        assert_eq!(first_line("a\rb"), "a");
        assert_eq!(first_line("ab"), "ab");
    }

    #[test]
    fn test_extract_per_player() {
        let text = "[Output]\nP2_CtmRecoil = cmw 2 F1x2x1\nP1_CtmRecoil = cmw 1 F0x2x1 \nP1_CtmRecoilMode = 9\n";
        let state = extract_field(&FieldKind::CtmRecoil, text);
        assert!(state.present);
        assert_eq!(state.value.as_deref(), Some("F0x2x1"));
        assert_eq!(state.per_player.get(&2).map(String::as_str), Some("F1x2x1"));
        assert_eq!(state.preset, PresetSelection::Preset("Solenoid Single Pulse (recommended)"));
    }

    #[test]
    fn test_extract_empty_and_absent() {
        let state = extract_field(&FieldKind::Clip, "P1_Clip =\r\nP2_Clip =\r\n");
        assert!(state.present);
        assert_eq!(state.value, None);
        assert_eq!(state.preset, PresetSelection::Unset);

        let absent = extract_field(&FieldKind::Life, "P1_Clip =");
        assert!(!absent.present);
        assert_eq!(absent, FieldState::default());
    }

    #[test]
    fn test_extract_credits() {
        let state = extract_field(&FieldKind::Credits, "[Output]\nCredits = cmw 1 XX\n");
        assert!(state.present);
        assert_eq!(state.value.as_deref(), Some("XX"));
        assert_eq!(state.preset, PresetSelection::Preset("OLED On (coming soon)"));
    }

    #[test]
    fn test_extract_without_cmw_prefix() {
        let state = extract_field(&FieldKind::Ammo, "P1_Ammo = DFAx%s%");
        assert_eq!(state.value.as_deref(), Some("DFAx%s%"));
        assert_eq!(state.preset, PresetSelection::Preset("OLED On"));
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(FieldKind::Clip.preset_for_value(Some("XX")), PresetSelection::Preset("Red/Off"));
        assert_eq!(FieldKind::Life.preset_for_value(Some("XX")), PresetSelection::Preset("OLED On"));
        assert_eq!(FieldKind::Clip.preset_for_value(Some("F9x1")), PresetSelection::Custom);
        assert_eq!(FieldKind::Clip.preset_for_value(None), PresetSelection::Unset);
        assert_eq!(FieldKind::Custom("X".into()).preset_for_value(Some("1")), PresetSelection::Custom);
    }

    #[test]
    fn test_preset_value() {
        assert_eq!(FieldKind::Damaged.preset_value("Rumble Switching"), Some("F1x%s%"));
        assert_eq!(FieldKind::Damaged.preset_value("Red/Off"), None);
    }

    #[test]
    fn test_discover_custom_fields() {
        let output = "P1_Clip = cmw 1 XX\nP1_Flash = cmw 1 F5\nP2_Flash =\nP1_LmpStart =\nP0_Ghost =\nP2_Smoke=1";
        assert_eq!(discover_custom_fields(output), vec!["Flash", "Smoke"]);
    }

    #[test]
    fn test_from_key_name() {
        assert_eq!(FieldKind::from_key_name("Clip"), FieldKind::Clip);
        assert_eq!(FieldKind::from_key_name("LmpStart"), FieldKind::LmpStart);
        assert_eq!(FieldKind::from_key_name("clip"), FieldKind::Custom("clip".into()));
    }
}
