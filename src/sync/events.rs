//! Événements d'édition émis par l'interface

use crate::codec::{ModeCategory, ModeCode, StartCode};
use crate::players::Player;

use super::fields::FieldKind;
use super::lamp::LampColor;

/// Modification demandée par un contrôle sémantique
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Texte libre d'un champ ; `player == None` vise tous les joueurs détectés
    Field {
        kind: FieldKind,
        player: Option<Player>,
        value: String,
    },
    /// Choix d'un préréglage par libellé
    Preset {
        kind: FieldKind,
        player: Option<Player>,
        label: String,
    },
    Mode {
        category: ModeCategory,
        code: Option<ModeCode>,
    },
    Start(StartCode),
    Lamp {
        player: Player,
        color: Option<LampColor>,
    },
}

impl EditEvent {
    pub fn field(kind: FieldKind, player: Option<Player>, value: impl Into<String>) -> Self {
        EditEvent::Field {
            kind,
            player,
            value: value.into(),
        }
    }

    pub fn lamp(player: Player, color: Option<LampColor>) -> Self {
        EditEvent::Lamp { player, color }
    }
}
