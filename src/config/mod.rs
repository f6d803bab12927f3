//! Configuration de l'outil

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::lookup::{default_paths, Platform};
use crate::script::{PathStyle, ScriptSettings};

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub paths: PathsConfig,
    pub script: ScriptConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub qmamehook_dir: String,
    pub shooter_dir: String,
    pub emulator_path: String,
    pub rom_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub verbose: bool,
    pub extra_args: String,
    pub path_style: PathStyle,
}

/// Dernière sélection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub emulator: String,
    pub rom: String,
}

/// Répertoire personnel, vide s'il est inconnu
pub fn home_dir() -> String {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default()
}

impl Default for ToolConfig {
    fn default() -> Self {
        let (base, path_style) = match Platform::current() {
            Platform::Windows => ("C:".to_string(), PathStyle::Windows),
            Platform::Unix => (home_dir(), PathStyle::Verbatim),
        };

        Self {
            paths: PathsConfig {
                qmamehook_dir: format!("{}/QMamehook", base),
                shooter_dir: format!("{}/DemulShooter", base),
                emulator_path: String::new(),
                rom_dir: String::new(),
            },
            script: ScriptConfig {
                verbose: true,
                extra_args: String::new(),
                path_style,
            },
            session: SessionConfig::default(),
        }
    }
}

impl ToolConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ToolConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }

    /// Sélectionne un émulateur et propose ses chemins par défaut.
    ///
    /// Retourne `false` si l'émulateur n'a pas d'emplacement connu ; les
    /// chemins existants sont alors conservés.
    pub fn apply_emulator_defaults(&mut self, friendly: &str) -> bool {
        self.session.emulator = friendly.to_string();

        match default_paths(friendly, Platform::current(), &home_dir()) {
            Some(paths) => {
                log::debug!("Chemins par défaut pour {} : {}", friendly, paths.executable);
                self.paths.emulator_path = paths.executable;
                self.paths.rom_dir = paths.rom_dir;
                true
            }
            None => false,
        }
    }

    /// Paramètres du générateur de script
    pub fn script_settings(&self) -> ScriptSettings {
        ScriptSettings {
            shooter_dir: self.paths.shooter_dir.clone(),
            qmamehook_dir: self.paths.qmamehook_dir.clone(),
            emulator_path: self.paths.emulator_path.clone(),
            rom_dir: self.paths.rom_dir.clone(),
            verbose: self.script.verbose,
            extra_args: self.script.extra_args.clone(),
            path_style: self.script.path_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qmamehook-ini.toml");
        let path = path.to_str().unwrap();

        let mut config = ToolConfig::default();
        config.script.extra_args = "-noautofire".to_string();
        config.session.rom = "Virtua Cop".to_string();
        config.save_to_file(path).unwrap();

        let loaded = ToolConfig::load_from_file(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = ToolConfig::load_or_default("/nonexistent/qmamehook-ini.toml");
        assert_eq!(config, ToolConfig::default());
        assert!(config.paths.qmamehook_dir.ends_with("/QMamehook"));
    }

    #[test]
    fn test_apply_emulator_defaults() {
        let mut config = ToolConfig::default();
        assert!(config.apply_emulator_defaults("Flycast v2.0"));
        assert!(config.paths.emulator_path.contains("Flycast"));
        assert!(config.paths.rom_dir.ends_with("Flycast/roms"));

        config.paths.emulator_path = "/custom/game.exe".to_string();
        assert!(!config.apply_emulator_defaults("Windows Games"));
        assert_eq!(config.paths.emulator_path, "/custom/game.exe");
        assert_eq!(config.session.emulator, "Windows Games");
    }

    #[test]
    fn test_script_settings() {
        let mut config = ToolConfig::default();
        config.script.verbose = false;
        let settings = config.script_settings();
        assert!(!settings.verbose);
        assert_eq!(settings.qmamehook_dir, config.paths.qmamehook_dir);
    }
}
