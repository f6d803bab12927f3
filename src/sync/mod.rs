//! Synchroniseur texte <-> modèle sémantique
//!
//! Le [`Synchronizer`] possède le document INI d'une session d'édition. La
//! lecture remplit un [`SemanticModel`] typé ; chaque modification typée est
//! réécrite dans le document sans toucher aux lignes non ciblées.
//!
//! Pendant un chargement, le modèle est rejoué sous forme d'événements
//! d'édition ; la garde de chargement les neutralise, puis une seule passe de
//! réconciliation relit le texte stabilisé.

pub mod events;
pub mod fields;
pub mod lamp;
pub mod session;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

pub use events::*;
pub use fields::*;
pub use lamp::*;
pub use session::*;

use crate::codec::{
    decode, decode_start_code, mame_start_line, mame_start_value, rewrite_command_list,
    start_token_suffix, ModeCategory, ModeCode, ModeSelection, StartCode, MAME_START_KEY,
};
use crate::document::LineDocument;
use crate::players::{detect_players, Player, PlayerCount, OUTPUT_SECTION};

/// Section portant `MameStart`
pub const GENERAL_SECTION: &str = "General";

/// Anciennes lignes de mode isolées (`M3x1`, `MDx3B`...)
static LEGACY_MODE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^M[0123568D]x").unwrap());

/// Vue typée du document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemanticModel {
    /// États par nom de clé (`CtmRecoil`, `Credits`, noms personnalisés...)
    pub fields: BTreeMap<String, FieldState>,
    pub modes: ModeSelection,
    pub start: StartCode,
    pub player_count: PlayerCount,
    pub lamp_colors: [Option<LampColor>; 4],
    /// Clés `P<n>_<nom>` inconnues, dans l'ordre d'apparition
    pub custom_fields: Vec<String>,
    /// Le document contient une ligne `MameStart`
    pub has_mame_start: bool,
}

impl SemanticModel {
    /// Lit un document complet
    pub fn from_document(document: &LineDocument) -> Self {
        let mut model = Self::default();
        model.refresh_fields(document);
        model.player_count = detect_players(document);

        let mame_start = mame_start_of(document);
        model.has_mame_start = mame_start.is_some();

        let value = mame_start.unwrap_or_default();
        model.start = decode_start_code(&value).unwrap_or_default();
        model.modes = match start_token_suffix(&value) {
            Some(suffix) => decode(suffix),
            None => document
                .section_text(GENERAL_SECTION)
                .map(|text| decode(&text))
                .unwrap_or_default(),
        };

        model
    }

    /// Relit les champs, les lampes et les clés personnalisées
    fn refresh_fields(&mut self, document: &LineDocument) {
        let text = document.to_text();
        let output = document.section_text(OUTPUT_SECTION).unwrap_or_else(|| text.clone());

        self.custom_fields = fields::discover_custom_fields(&output);

        let kinds = FieldKind::STANDARD
            .into_iter()
            .chain([FieldKind::LmpStart])
            .chain(self.custom_fields.iter().cloned().map(FieldKind::Custom));

        self.fields = kinds
            .map(|kind| (kind.key_name().to_string(), extract_field(&kind, &text)))
            .collect();

        self.lamp_colors = decode_lamp_colors(&text);
    }

    pub fn field(&self, kind: &FieldKind) -> Option<&FieldState> {
        self.fields.get(kind.key_name())
    }

    pub fn lamp_color(&self, player: Player) -> Option<LampColor> {
        self.lamp_colors[player.index()]
    }

    /// Événements reproduisant le modèle, rejoués pendant un chargement
    pub fn edit_events(&self) -> Vec<EditEvent> {
        let mut events = Vec::new();

        for (name, state) in &self.fields {
            let kind = FieldKind::from_key_name(name);
            for (&number, value) in &state.per_player {
                events.push(EditEvent::field(kind.clone(), Player::new(number), value.clone()));
            }
        }

        for category in ModeCategory::ALL {
            events.push(EditEvent::Mode {
                category,
                code: self.modes.get(category),
            });
        }
        events.push(EditEvent::Start(self.start));

        for player in Player::all() {
            if let Some(color) = self.lamp_color(player) {
                events.push(EditEvent::lamp(player, Some(color)));
            }
        }

        events
    }
}

fn mame_start_of(document: &LineDocument) -> Option<String> {
    document
        .find_key_line(MAME_START_KEY)
        .and_then(|index| mame_start_value(document.lines()[index].trimmed()))
        .map(str::to_string)
}

/// Synchroniseur d'une session d'édition
#[derive(Debug)]
pub struct Synchronizer {
    document: LineDocument,
    model: SemanticModel,
    tracker: LoadTracker,
}

impl Synchronizer {
    /// Session vide sur l'en-tête par défaut
    pub fn new() -> Self {
        let document = LineDocument::default();
        let model = SemanticModel::from_document(&document);
        Self {
            document,
            model,
            tracker: LoadTracker::new(),
        }
    }

    /// Remplace le document (changement de ROM ou d'émulateur).
    ///
    /// Le nombre de joueurs repart de la valeur détectée.
    pub fn load(&mut self, raw: &str) -> &SemanticModel {
        self.model = SemanticModel::default();
        self.load_text(raw);
        &self.model
    }

    /// Texte modifié à la main dans la même session ; le nombre de joueurs
    /// ne diminue pas.
    pub fn edit_text(&mut self, raw: &str) -> &SemanticModel {
        self.load_text(raw);
        &self.model
    }

    fn load_text(&mut self, raw: &str) {
        let previous_count = self.model.player_count;

        let session = self.tracker.begin();
        self.document = LineDocument::parse(raw);
        let loaded = SemanticModel::from_document(&self.document);

        debug!(
            "Chargement : départ {}, modes [{}], {} joueur(s)",
            loaded.start,
            crate::codec::encode(&loaded.modes),
            loaded.player_count
        );

        // Le remplissage des contrôles émet des écritures, toutes neutralisées
        for event in loaded.edit_events() {
            self.dispatch(event);
        }

        self.model = loaded;
        self.model.player_count = self.model.player_count.max(previous_count);
        drop(session);

        self.reconcile();
    }

    /// Relit les sélections dérivées depuis le texte stabilisé
    fn reconcile(&mut self) {
        self.model.refresh_fields(&self.document);
        self.model.has_mame_start = mame_start_of(&self.document).is_some();

        let detected = detect_players(&self.document);
        if detected > self.model.player_count {
            debug!("Nombre de joueurs : {} -> {}", self.model.player_count, detected);
            self.model.player_count = detected;
        }
    }

    pub fn text(&self) -> String {
        self.document.to_text()
    }

    pub fn document(&self) -> &LineDocument {
        &self.document
    }

    pub fn model(&self) -> &SemanticModel {
        &self.model
    }

    pub fn load_state(&self) -> LoadState {
        self.tracker.view()
    }

    pub fn player_count(&self) -> PlayerCount {
        self.model.player_count
    }

    /// Vrai si au moins une clé de ce type existe
    pub fn field_present(&self, kind: &FieldKind) -> bool {
        self.model.field(kind).map_or(false, |state| state.present)
    }

    fn is_loading(&self) -> bool {
        self.tracker.view().is_loading()
    }

    /// Applique un événement ; `None` s'il est neutralisé par un chargement
    pub fn dispatch(&mut self, event: EditEvent) -> Option<String> {
        if self.is_loading() {
            debug!("Écriture ignorée pendant le chargement : {:?}", event);
            return None;
        }

        let text = match event {
            EditEvent::Field { kind, player, value } => self.apply_field_change(&kind, player, &value),
            EditEvent::Preset { kind, player, label } => self.apply_preset(&kind, player, &label),
            EditEvent::Mode { category, code } => self.apply_mode_change(category, code),
            EditEvent::Start(code) => self.apply_start_code(code),
            EditEvent::Lamp { player, color } => self.apply_lamp_color(player, color),
        };
        Some(text)
    }

    /// Écrit la valeur d'un champ pour un joueur, ou pour tous les joueurs
    /// détectés quand `player` vaut `None`.
    ///
    /// Seule la première ligne de `value` est écrite. Chaque clé existante est réécrite sur place ; les clés manquantes sont
    /// insérées sous `[Output]` dans l'ordre croissant des joueurs.
    pub fn apply_field_change(
        &mut self,
        kind: &FieldKind,
        player: Option<Player>,
        value: &str,
    ) -> String {
        if self.is_loading() {
            return self.text();
        }

        let single = first_line(value);
        if single.len() != value.len() {
            warn!("Saut de ligne dans la valeur de {}, texte suivant ignoré", kind);
        }
        let value = single;

        let players: Vec<Player> = if !kind.is_per_player() {
            Player::new(1).into_iter().collect()
        } else {
            match player {
                Some(player) => vec![player],
                None => self.model.player_count.players().collect(),
            }
        };

        let mut missing = Vec::new();
        for player in players {
            let key = kind.key(player);
            let line = kind.line(player, value);
            if !self.document.replace_key_line(&key, &line) {
                missing.push(line);
            }
        }

        // Chaque insertion se place juste sous l'en-tête
        for line in missing.iter().rev() {
            self.document.insert_after_header(OUTPUT_SECTION, line);
        }

        self.reconcile();
        self.text()
    }

    /// Applique un préréglage par libellé ; `------` efface le champ et
    /// `Custom` laisse la valeur en place.
    pub fn apply_preset(&mut self, kind: &FieldKind, player: Option<Player>, label: &str) -> String {
        if label == UNSET_LABEL {
            return self.apply_field_change(kind, player, "");
        }
        if label == CUSTOM_LABEL {
            return self.text();
        }

        match kind.preset_value(label) {
            Some(value) => self.apply_field_change(kind, player, value),
            None => {
                warn!("Préréglage inconnu pour {} : {}", kind, label);
                self.text()
            }
        }
    }

    /// Change une catégorie de mode puis réécrit `MameStart` ; chaque jeton
    /// garde son propre code de démarrage.
    pub fn apply_mode_change(&mut self, category: ModeCategory, code: Option<ModeCode>) -> String {
        if self.is_loading() {
            return self.text();
        }
        self.model.modes.set(category, code);
        self.write_start_line(None);
        self.text()
    }

    /// Change le code de démarrage de tous les joueurs
    pub fn apply_start_code(&mut self, code: StartCode) -> String {
        if self.is_loading() {
            return self.text();
        }
        self.model.start = code;
        self.write_start_line(Some(code));
        self.text()
    }

    /// Couleur de lampe d'un joueur ; `None` vide la clé si elle existe
    pub fn apply_lamp_color(&mut self, player: Player, color: Option<LampColor>) -> String {
        if self.is_loading() {
            return self.text();
        }

        let key = lamp_key(player);
        match color {
            Some(color) => {
                let line = lamp_line(player, color);
                if !self.document.replace_key_line(&key, &line) {
                    self.document.insert_after_header(OUTPUT_SECTION, &line);
                }
            }
            None => {
                self.document.replace_key_line(&key, &cleared_lamp_line(player));
            }
        }

        self.reconcile();
        self.text()
    }

    fn write_start_line(&mut self, start: Option<StartCode>) {
        let value = match mame_start_of(&self.document) {
            Some(value) => value,
            None => {
                debug!("Pas de ligne MameStart, modes non écrits");
                return;
            }
        };

        let rewritten = rewrite_command_list(&value, start, &self.model.modes);
        self.document
            .replace_key_line(MAME_START_KEY, &mame_start_line(&rewritten));

        let removed = self
            .document
            .remove_matching_in(GENERAL_SECTION, |line| LEGACY_MODE_LINE.is_match(line.trimmed()));
        if removed > 0 {
            debug!("{} ancienne(s) ligne(s) de mode supprimée(s)", removed);
        }
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PLAYERS: &str = "[General]\n\
MameStart = \"cmo 1 baud=9600\", cmw 1 S6xM0x1LxMDx3B, cmw 2 S6\n\
MameStop = cmw 1 E, cmw 2 E, cmc 1, cmc 2\n\
[Output]\n\
P1_CtmRecoil = cmw 1 F0x2x1\n\
P2_CtmRecoil = cmw 2 F0x2x1\n\
P1_Clip = cmw 1 XX\n\
Credits = cmw 1 XX\n";

    fn p(n: u8) -> Player {
        Player::new(n).unwrap()
    }

    fn loaded(text: &str) -> Synchronizer {
        let mut sync = Synchronizer::new();
        sync.load(text);
        sync
    }

    #[test]
    fn test_load_populates_model() {
        let sync = loaded(TWO_PLAYERS);
        let model = sync.model();

        assert_eq!(model.player_count.get(), 2);
        assert_eq!(model.start, StartCode::S6);
        assert_eq!(model.modes.get(ModeCategory::DeviceOutput).unwrap().code(), "1L");
        assert_eq!(model.modes.get(ModeCategory::Display).unwrap().code(), "3B");

        let recoil = model.field(&FieldKind::CtmRecoil).unwrap();
        assert_eq!(recoil.preset, PresetSelection::Preset("Solenoid Single Pulse (recommended)"));
        assert_eq!(model.field(&FieldKind::Clip).unwrap().preset, PresetSelection::Preset("Red/Off"));
        assert!(sync.field_present(&FieldKind::Credits));
        assert!(!sync.field_present(&FieldKind::Damaged));
    }

    #[test]
    fn test_load_does_not_modify_text() {
        let sync = loaded(TWO_PLAYERS);
        assert_eq!(sync.text(), TWO_PLAYERS);
        assert!(!sync.load_state().is_loading());
    }

    #[test]
    fn test_field_change_all_players() {
        let mut sync = loaded(TWO_PLAYERS);
        let text = sync.apply_field_change(&FieldKind::CtmRecoil, None, "F1x%s%");
        assert!(text.contains("P1_CtmRecoil = cmw 1 F1x%s%\n"));
        assert!(text.contains("P2_CtmRecoil = cmw 2 F1x%s%\n"));
        assert_eq!(
            sync.model().field(&FieldKind::CtmRecoil).unwrap().preset,
            PresetSelection::Preset("Rumble Switching")
        );
    }

    #[test]
    fn test_field_change_inserts_missing_in_order() {
        let mut sync = loaded(TWO_PLAYERS);
        sync.apply_field_change(&FieldKind::Life, None, "FDLx%s%");
        let lines: Vec<String> = sync.document().lines().iter().map(|l| l.raw.clone()).collect();
        let output = lines.iter().position(|l| l == "[Output]").unwrap();
        assert_eq!(lines[output + 1], "P1_Life = cmw 1 FDLx%s%");
        assert_eq!(lines[output + 2], "P2_Life = cmw 2 FDLx%s%");
    }

    #[test]
    fn test_unset_clears_value() {
        let mut sync = loaded("[Output]\nP1_Clip = cmw 1 XX\n");
        let text = sync.apply_preset(&FieldKind::Clip, None, UNSET_LABEL);
        assert_eq!(text, "[Output]\nP1_Clip =\n");
    }

    #[test]
    fn test_credits_single_key() {
        let mut sync = loaded(TWO_PLAYERS);
        let text = sync.apply_field_change(&FieldKind::Credits, Some(p(2)), "");
        assert!(text.contains("\nCredits =\n"));
        assert!(!text.contains("P2_Credits"));
    }

    #[test]
    fn test_mode_change_rewrites_mame_start() {
        let mut sync = loaded(TWO_PLAYERS);
        let aspect = ModeCategory::AspectRatio.code("1");
        let text = sync.apply_mode_change(ModeCategory::AspectRatio, aspect);
        assert!(text.contains(
            "MameStart = \"cmo 1 baud=9600\", cmw 1 S6xM0x1LxM3x1xMDx3B, cmw 2 S6xM0x1LxM3x1xMDx3B\n"
        ));
        assert!(text.contains("MameStop = cmw 1 E, cmw 2 E, cmc 1, cmc 2\n"));
    }

    #[test]
    fn test_start_code_change() {
        let mut sync = loaded(TWO_PLAYERS);
        let text = sync.apply_start_code(StartCode::S2);
        assert!(text.contains("cmw 1 S2xM0x1LxMDx3B, cmw 2 S2xM0x1LxMDx3B"));
    }

    #[test]
    fn test_mode_change_keeps_per_token_start_codes() {
        let mut sync = loaded("[General]\nMameStart = cmw 1 S2, cmw 2 S0\n");
        let text = sync.apply_mode_change(ModeCategory::AspectRatio, ModeCategory::AspectRatio.code("1"));
        assert_eq!(text, "[General]\nMameStart = cmw 1 S2xM3x1, cmw 2 S0xM3x1\n");

        // Seul le code de démarrage global les aligne
        let text = sync.apply_start_code(StartCode::S4);
        assert_eq!(text, "[General]\nMameStart = cmw 1 S4xM3x1, cmw 2 S4xM3x1\n");
    }

    #[test]
    fn test_longer_key_does_not_hide_mame_start() {
        let text = "[General]\nMameStartDelay = 5\nMameStart = cmw 1 S2xM3x1, cmw 2 S2\n";
        let mut sync = loaded(text);
        assert!(sync.model().has_mame_start);
        assert_eq!(sync.model().start, StartCode::S2);
        assert_eq!(sync.model().modes.get(ModeCategory::AspectRatio).unwrap().code(), "1");

        let text = sync.apply_mode_change(ModeCategory::Display, ModeCategory::Display.code("1"));
        assert_eq!(
            text,
            "[General]\nMameStartDelay = 5\nMameStart = cmw 1 S2xM3x1xMDx1, cmw 2 S2xM3x1xMDx1\n"
        );
    }

    #[test]
    fn test_field_value_cannot_add_lines() {
        let mut sync = loaded("[Output]\nP1_Clip = cmw 1 XX\n");
        let text = sync.apply_field_change(&FieldKind::Clip, None, "F1\nP4_Clip = cmw 4 X");
        assert_eq!(text, "[Output]\nP1_Clip = cmw 1 F1\n");
        assert_eq!(sync.document().len(), 3);
        assert_eq!(sync.player_count().get(), 1);
    }

    #[test]
    fn test_missing_mame_start_skips_mode_write() {
        let original = "[Output]\nP1_Clip =\n";
        let mut sync = loaded(original);
        let text = sync.apply_mode_change(ModeCategory::Display, ModeCategory::Display.code("1"));
        assert_eq!(text, original);
    }

    #[test]
    fn test_legacy_mode_lines_removed() {
        let mut sync = loaded("[General]\nMameStart = cmw 1 S6\nM3x1\n[Output]\nM3x1\n");
        assert_eq!(sync.model().modes.get(ModeCategory::AspectRatio).unwrap().code(), "1");

        let text = sync.apply_start_code(StartCode::S6);
        assert_eq!(text, "[General]\nMameStart = cmw 1 S6xM3x1\n[Output]\nM3x1\n");
    }

    #[test]
    fn test_lamp_color_round_trip() {
        let mut sync = loaded(TWO_PLAYERS);
        sync.apply_lamp_color(p(2), Some(LampColor::Yellow));
        assert_eq!(sync.model().lamp_color(p(2)), Some(LampColor::Yellow));
        assert!(sync
            .text()
            .contains("P2_LmpStart = cmw 2 F2x1x255xF3x1x255xF4x1x0 | cmw 2 F2x1x0xF3x1x0xF4x1x0"));

        sync.apply_lamp_color(p(2), None);
        assert!(sync.text().contains("P2_LmpStart =\n"));
        assert_eq!(sync.model().lamp_color(p(2)), None);
    }

    #[test]
    fn test_clearing_absent_lamp_is_noop() {
        let mut sync = loaded(TWO_PLAYERS);
        assert_eq!(sync.apply_lamp_color(p(1), None), TWO_PLAYERS);
    }

    #[test]
    fn test_player_count_monotone_within_session() {
        let mut sync = loaded(TWO_PLAYERS);
        assert_eq!(sync.player_count().get(), 2);

        sync.apply_field_change(&FieldKind::Clip, Some(p(3)), "XX");
        assert_eq!(sync.player_count().get(), 3);

        sync.edit_text("[Output]\nP1_Clip =\n");
        assert_eq!(sync.player_count().get(), 3);

        sync.load("[Output]\nP1_Clip =\n");
        assert_eq!(sync.player_count().get(), 1);
    }

    #[test]
    fn test_dispatch_suppressed_while_loading() {
        let mut sync = loaded(TWO_PLAYERS);
        let session = sync.tracker.begin();
        assert!(sync
            .dispatch(EditEvent::field(FieldKind::Clip, None, "F9"))
            .is_none());
        drop(session);
        assert_eq!(sync.text(), TWO_PLAYERS);

        let text = sync.dispatch(EditEvent::Start(StartCode::S0)).unwrap();
        assert!(text.contains("cmw 1 S0"));
    }

    #[test]
    fn test_custom_fields_discovered() {
        let sync = loaded("[Output]\nP1_Flash = cmw 1 F5x1\nP2_Flash =\n");
        assert_eq!(sync.model().custom_fields, vec!["Flash".to_string()]);

        let flash = FieldKind::Custom("Flash".into());
        assert!(sync.field_present(&flash));
        assert_eq!(sync.model().field(&flash).unwrap().preset, PresetSelection::Custom);
    }

    #[test]
    fn test_crlf_preserved_on_write() {
        let mut sync = loaded("[Output]\r\nP1_Clip = cmw 1 XX\r\n");
        let text = sync.apply_field_change(&FieldKind::Clip, None, "");
        assert_eq!(text, "[Output]\r\nP1_Clip =\r\n");
    }

    #[test]
    fn test_model_serializes_to_json() {
        let sync = loaded(TWO_PLAYERS);
        let json = serde_json::to_value(sync.model()).unwrap();
        assert_eq!(json["start"], "S6");
        assert_eq!(json["player_count"], 2);
        assert_eq!(json["fields"]["Clip"]["value"], "XX");
    }
}
