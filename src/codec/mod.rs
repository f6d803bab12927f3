//! Codec des drapeaux composites de la commande de démarrage
//!
//! Un jeton `cmw 1 S6xM0x1LxMDx3B` porte le code de démarrage (`S6`) suivi
//! d'un suffixe de modes (`xM0x1LxMDx3B`). Ce module encode et décode ce
//! suffixe et réécrit la liste de commandes `MameStart`.

pub mod categories;
pub mod command;
pub mod start;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use categories::*;
pub use command::*;
pub use start::*;

/// Sélection des sept catégories de modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModeSelection {
    codes: [Option<ModeCode>; 7],
}

impl ModeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ModeCategory) -> Option<ModeCode> {
        self.codes[category.index()]
    }

    /// Définit ou efface une catégorie
    pub fn set(&mut self, category: ModeCategory, code: Option<ModeCode>) {
        // Un code d'une autre catégorie est ignoré
        let code = code.filter(|c| c.category() == category);
        self.codes[category.index()] = code;
    }

    /// Variante chaînable de `set`
    pub fn with(mut self, code: ModeCode) -> Self {
        self.set(code.category(), Some(code));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Codes définis, dans l'ordre canonique
    pub fn iter(&self) -> impl Iterator<Item = ModeCode> + '_ {
        self.codes.iter().flatten().copied()
    }
}

/// Motifs de décodage, un par catégorie
static MODE_PATTERNS: Lazy<Vec<(ModeCategory, Regex)>> = Lazy::new(|| {
    ModeCategory::ALL
        .into_iter()
        .map(|category| {
            let pattern = format!(r"(?m)(?:^|x)M{}x([0-9]+[LB]?)(?:x|\r?$)", category.tag());
            let regex = Regex::new(&pattern).expect("motif de mode invalide");
            (category, regex)
        })
        .collect()
});

/// Encode une sélection en suffixe `x`-joint (vide si aucun mode)
pub fn encode(selection: &ModeSelection) -> String {
    let tokens: Vec<String> = selection.iter().map(|code| code.token()).collect();
    if tokens.is_empty() {
        String::new()
    } else {
        format!("x{}", tokens.join("x"))
    }
}

/// Décode un suffixe de modes (ou un texte plus large servant d'espace de recherche).
///
/// Une catégorie absente ou un code inconnu donne une catégorie non définie.
pub fn decode(text: &str) -> ModeSelection {
    let mut selection = ModeSelection::new();

    for (category, regex) in MODE_PATTERNS.iter() {
        let code = regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| category.code(m.as_str()));
        selection.set(*category, code);
    }

    selection
}
