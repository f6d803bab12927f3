//! Génération du script de lancement compagnon (`.bat`)
//!
//! Le script démarre DemulShooter, puis QMamehook, puis l'émulateur. La
//! génération est pure : aucun accès disque.

pub mod family;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use family::*;

use crate::lookup::EmulatorProfile;

static SHOOTER_ARGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)start\s+"Demul"\s+".*"\s+-target=\S+\s+-rom=\S+\s*(.*)"#).unwrap()
});

/// Séparateurs de chemins écrits dans le script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `C:/QMamehook` devient `C:\QMamehook`
    #[default]
    Windows,
    /// Chemins recopiés tels quels
    Verbatim,
}

impl PathStyle {
    pub fn apply(self, path: &str) -> String {
        match self {
            PathStyle::Windows => path.replace('/', "\\"),
            PathStyle::Verbatim => path.to_string(),
        }
    }
}

/// Paramètres du script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Répertoire de DemulShooter
    pub shooter_dir: String,
    /// Répertoire de QMamehook (contient `ini/`)
    pub qmamehook_dir: String,
    /// Chemin complet de l'exécutable de l'émulateur
    pub emulator_path: String,
    /// Répertoire des ROMs
    pub rom_dir: String,
    /// Ajoute `-v` à QMamehook
    pub verbose: bool,
    /// Arguments supplémentaires de DemulShooter
    pub extra_args: String,
    pub path_style: PathStyle,
}

/// Sépare `dir/exe` sur le dernier `/` ou `\`
fn split_executable(path: &str) -> (&str, &str) {
    match path.rfind(['/', '\\']) {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => ("", path),
    }
}

fn join(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches(['/', '\\']);
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Première ligne : lancement de DemulShooter
pub fn shooter_line(profile: &EmulatorProfile, rom_code: &str, settings: &ScriptSettings) -> String {
    let exe = settings
        .path_style
        .apply(&join(&settings.shooter_dir, &profile.companion_executable));

    let mut line = format!(
        "start \"Demul\" \"{}\" -target={} -rom={}",
        exe, profile.internal_code, rom_code
    );

    let extra = settings.extra_args.trim();
    if !extra.is_empty() {
        line.push(' ');
        line.push_str(extra);
    }
    line
}

/// Contenu complet du script
pub fn generate_script(profile: &EmulatorProfile, rom_code: &str, settings: &ScriptSettings) -> String {
    let style = settings.path_style;
    let hook_exe = style.apply(&join(&settings.qmamehook_dir, "QMamehook.exe"));
    let ini_dir = style.apply(&join(&settings.qmamehook_dir, "ini"));
    let (emulator_dir, executable) = split_executable(&settings.emulator_path);
    let rom_archive = style.apply(&join(&settings.rom_dir, &format!("{}.zip", rom_code)));

    let verbose = if settings.verbose { " -v" } else { "" };

    let lines = [
        shooter_line(profile, rom_code, settings),
        format!(
            "start /MIN \"Hooker\" \"{}\" -p \"{}\"{} -c ",
            hook_exe, ini_dir, verbose
        ),
        format!("cd \"{}\"", style.apply(emulator_dir)),
        family_line(&profile.internal_code, executable, rom_code, &rom_archive),
    ];

    lines.join("\n")
}

/// Arguments supplémentaires de la première ligne d'un script existant
pub fn extract_shooter_args(script: &str) -> Option<String> {
    let first = script.lines().next()?;
    SHOOTER_ARGS
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Régénère uniquement la première ligne d'un script existant
pub fn rewrite_shooter_line(
    script: &str,
    profile: &EmulatorProfile,
    rom_code: &str,
    settings: &ScriptSettings,
) -> String {
    let line = shooter_line(profile, rom_code, settings);
    match script.split_once('\n') {
        Some((_, rest)) => format!("{}\n{}", line, rest),
        None => line,
    }
}
