//! QMamehook INI - Éditeur de profils QMamehook / DemulShooter
//!
//! Cette bibliothèque synchronise un fichier INI QMamehook, édité librement,
//! avec un modèle typé (modes, code de démarrage, sorties par joueur,
//! couleurs de lampe) et génère le script de lancement associé.

pub mod codec;
pub mod config;
pub mod document;
pub mod export;
pub mod lookup;
pub mod players;
pub mod script;
pub mod sync;

pub use codec::*;
pub use config::*;
pub use document::*;
pub use export::*;
pub use lookup::*;
pub use players::*;
pub use script::*;
pub use sync::*;

/// Version de l'outil
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fichier de configuration par défaut
pub const CONFIG_FILE: &str = "qmamehook-ini.toml";
