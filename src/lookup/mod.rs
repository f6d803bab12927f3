//! Tables de correspondance nom affiché -> code interne
//!
//! Les tables intégrées sont construites une seule fois ; un fichier JSON
//! peut compléter ou remplacer des entrées.

pub mod emulators;
pub mod roms;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub use emulators::{GROUP_32, GROUP_64, SHOOTER_32, SHOOTER_64};
pub use roms::normalize_rom_name;

use emulators::{EMULATOR_CODES, GAME_LISTS, INSTALL_LAYOUTS, SELECTOR_ORDER};
use roms::ROM_CODES;

/// Émulateur vu par DemulShooter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorProfile {
    /// Nom affiché
    pub friendly_name: String,
    /// Valeur de `-target=`
    pub internal_code: String,
    /// `DemulShooter.exe` ou `DemulShooterX64.exe`
    pub companion_executable: String,
}

impl EmulatorProfile {
    /// Vrai pour les cibles de DemulShooterX64
    pub fn is_64_bit(&self) -> bool {
        self.companion_executable == SHOOTER_64
    }
}

/// Entrée du sélecteur d'émulateur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEntry {
    /// En-tête de groupe, non sélectionnable
    Group(&'static str),
    Emulator(&'static str),
}

impl SelectorEntry {
    pub fn text(self) -> &'static str {
        match self {
            SelectorEntry::Group(text) | SelectorEntry::Emulator(text) => text,
        }
    }

    pub fn is_selectable(self) -> bool {
        matches!(self, SelectorEntry::Emulator(_))
    }
}

/// Plate-forme cible des chemins par défaut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Chemins d'installation proposés pour un émulateur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorPaths {
    pub executable: String,
    pub rom_dir: String,
}

/// Compléments chargés depuis un fichier JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupOverrides {
    #[serde(default)]
    pub emulators: Vec<EmulatorProfile>,
    #[serde(default)]
    pub roms: HashMap<String, String>,
}

/// Tables émulateurs et ROMs
#[derive(Debug, Clone)]
pub struct LookupTables {
    emulators: HashMap<String, EmulatorProfile>,
    roms: HashMap<String, String>,
}

impl LookupTables {
    /// Tables intégrées
    pub fn new() -> Self {
        let emulators = EMULATOR_CODES
            .iter()
            .map(|(friendly, code, exe)| {
                let profile = EmulatorProfile {
                    friendly_name: friendly.to_string(),
                    internal_code: code.to_string(),
                    companion_executable: exe.to_string(),
                };
                (friendly.to_string(), profile)
            })
            .collect();

        let roms = ROM_CODES
            .iter()
            .map(|(friendly, code)| (friendly.to_string(), code.to_string()))
            .collect();

        Self { emulators, roms }
    }

    /// Résout un émulateur par son nom affiché exact
    pub fn resolve_emulator(&self, friendly: &str) -> Option<EmulatorProfile> {
        self.emulators.get(friendly).cloned()
    }

    /// Résout une ROM ; les noms inconnus passent par [`normalize_rom_name`]
    pub fn resolve_rom(&self, friendly: &str) -> String {
        match self.roms.get(friendly) {
            Some(code) => code.clone(),
            None => normalize_rom_name(friendly),
        }
    }

    /// Fusionne des compléments ; une entrée existante est remplacée
    pub fn apply_overrides(&mut self, overrides: LookupOverrides) {
        for profile in overrides.emulators {
            self.emulators.insert(profile.friendly_name.clone(), profile);
        }
        self.roms.extend(overrides.roms);
    }

    /// Charge des compléments depuis un fichier JSON
    pub fn load_overrides_from_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(path)?;
        let overrides: LookupOverrides = serde_json::from_str(&content)?;
        log::debug!(
            "Compléments de tables : {} émulateurs, {} ROMs",
            overrides.emulators.len(),
            overrides.roms.len()
        );
        self.apply_overrides(overrides);
        Ok(())
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::new()
    }
}

static BUILTIN: Lazy<LookupTables> = Lazy::new(LookupTables::new);

/// Résout un émulateur dans les tables intégrées
pub fn resolve_emulator(friendly: &str) -> Option<EmulatorProfile> {
    BUILTIN.resolve_emulator(friendly)
}

/// Résout une ROM dans les tables intégrées ; n'échoue jamais
pub fn resolve_rom(friendly: &str) -> String {
    BUILTIN.resolve_rom(friendly)
}

/// Liste du sélecteur, groupes 32 et 64 bits
pub fn emulator_selector() -> Vec<SelectorEntry> {
    SELECTOR_ORDER
        .iter()
        .map(|&text| {
            if is_group_header(text) {
                SelectorEntry::Group(text)
            } else {
                SelectorEntry::Emulator(text)
            }
        })
        .collect()
}

pub fn is_group_header(text: &str) -> bool {
    text.starts_with("----")
}

/// Jeux proposés pour un émulateur ; `None` si l'émulateur est inconnu
pub fn games_for(emulator: &str) -> Option<&'static [&'static str]> {
    GAME_LISTS
        .iter()
        .find(|(name, _)| *name == emulator)
        .map(|(_, games)| *games)
}

/// Chemins par défaut d'un émulateur.
///
/// `home` n'est utilisé que pour [`Platform::Unix`]. `None` lorsque
/// l'emplacement doit être choisi par l'utilisateur (jeux Windows,
/// émulateurs sans installation connue).
pub fn default_paths(emulator: &str, platform: Platform, home: &str) -> Option<EmulatorPaths> {
    let (_, layout) = INSTALL_LAYOUTS.iter().find(|(name, _)| *name == emulator)?;

    let paths = match platform {
        Platform::Windows => EmulatorPaths {
            executable: format!("C:/{}/{}.exe", layout.windows_dir, layout.executable),
            rom_dir: format!("C:/{}/roms", layout.windows_dir),
        },
        Platform::Unix => {
            let home = home.trim_end_matches('/');
            EmulatorPaths {
                executable: format!("{}/Applications/{}/{}", home, layout.unix_dir, layout.executable),
                rom_dir: format!("{}/Games/{}/roms", home, layout.unix_dir),
            }
        }
    };

    Some(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_emulator() {
        let profile = resolve_emulator("Demul 0.7a Only").unwrap();
        assert_eq!(profile.internal_code, "demul07a");
        assert_eq!(profile.companion_executable, "DemulShooter.exe");
        assert!(!profile.is_64_bit());

        let flycast = resolve_emulator("Flycast v2.0").unwrap();
        assert_eq!(flycast.internal_code, "flycast");
        assert!(flycast.is_64_bit());

        assert!(resolve_emulator("Nonexistent").is_none());
    }

    #[test]
    fn test_resolve_rom() {
        assert_eq!(resolve_rom("House of The Dead II"), "hotd2o");
        assert_eq!(resolve_rom("Let's Go Island 3D"), "lgi3D");
        assert_eq!(resolve_rom("Some Unknown Title!"), "someunknowntitle");
        assert_eq!(resolve_rom(""), "unknown");
    }

    #[test]
    fn test_selector_groups() {
        let entries = emulator_selector();
        assert_eq!(entries[0], SelectorEntry::Group(GROUP_32));
        assert!(!entries[0].is_selectable());

        let group_64 = entries
            .iter()
            .position(|e| *e == SelectorEntry::Group(GROUP_64))
            .unwrap();
        assert_eq!(entries[group_64 + 1].text(), "Adrenaline Amusements");
        assert_eq!(entries.iter().filter(|e| !e.is_selectable()).count(), 2);
    }

    #[test]
    fn test_games_for() {
        assert_eq!(games_for("Namco ES3 System"), Some(&["Time Crisis 5"][..]));
        assert_eq!(games_for("Demul 0.582 and Above").unwrap().len(), 4);
        assert!(games_for("Unknown").is_none());
    }

    #[test]
    fn test_default_paths() {
        let win = default_paths("Model2 Emulator v1.1a", Platform::Windows, "").unwrap();
        assert_eq!(win.executable, "C:/Sega Model 2/emulator_multicpu.exe");
        assert_eq!(win.rom_dir, "C:/Sega Model 2/roms");

        let unix = default_paths("Model2 Emulator v1.1a", Platform::Unix, "/home/user/").unwrap();
        assert_eq!(unix.executable, "/home/user/Applications/Model2/emulator_multicpu");
        assert_eq!(unix.rom_dir, "/home/user/Games/Model2/roms");

        assert!(default_paths("Windows Games", Platform::Windows, "").is_none());
    }

    #[test]
    fn test_overrides_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(
            &path,
            r#"{
                "emulators": [
                    {"friendly_name": "Coastal", "internal_code": "coastal2", "companion_executable": "DemulShooter.exe"}
                ],
                "roms": {"Homebrew Shooter": "hbshoot"}
            }"#,
        )
        .unwrap();

        let mut tables = LookupTables::new();
        tables.load_overrides_from_file(&path).unwrap();

        assert_eq!(tables.resolve_emulator("Coastal").unwrap().internal_code, "coastal2");
        assert_eq!(tables.resolve_rom("Homebrew Shooter"), "hbshoot");
        assert_eq!(tables.resolve_rom("Virtua Cop"), "vcop");
    }

    #[test]
    fn test_overrides_reject_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut tables = LookupTables::new();
        assert!(tables.load_overrides_from_file(&path).is_err());
    }
}
