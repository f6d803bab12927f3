//! Écriture et relecture des fichiers `ini/` et `bat/` sous le répertoire
//! de QMamehook

pub mod error;

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use error::*;

use crate::lookup::{resolve_rom, Platform};

/// Répertoires d'export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDirs {
    pub ini: PathBuf,
    pub bat: PathBuf,
}

impl ExportDirs {
    pub fn new(base: &Path) -> Self {
        Self {
            ini: base.join("ini"),
            bat: base.join("bat"),
        }
    }

    /// `ini/<code ROM>.ini`
    pub fn ini_file(&self, rom_friendly: &str) -> PathBuf {
        self.ini.join(format!("{}.ini", resolve_rom(rom_friendly)))
    }

    /// `bat/<nom affiché>.bat`
    pub fn bat_file(&self, rom_friendly: &str) -> PathBuf {
        self.bat.join(format!("{}.bat", rom_friendly))
    }
}

/// Fichiers écrits par [`export_files`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub ini: PathBuf,
    pub bat: PathBuf,
}

/// Contenus relus par [`read_existing`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingFiles {
    pub ini: Option<String>,
    pub script: Option<String>,
}

/// `X:/...` ou `X:\...`
pub fn is_windows_style(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Refuse un chemin Windows quand l'hôte ne l'est pas
pub fn check_host_path(base: &str, platform: Platform) -> ExportResult<()> {
    if platform != Platform::Windows && is_windows_style(base) {
        warn!("Export refusé, chemin de style Windows : {}", base);
        return Err(ExportError::WindowsPathOnHost(base.to_string()));
    }
    Ok(())
}

/// Crée `ini/` et `bat/` si besoin
pub fn prepare_directories(base: &Path) -> ExportResult<ExportDirs> {
    let dirs = ExportDirs::new(base);
    for dir in [&dirs.ini, &dirs.bat] {
        fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(dirs)
}

fn write_file(path: &Path, content: &str) -> ExportResult<()> {
    fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Fichier écrit : {}", path.display());
    Ok(())
}

/// Écrit l'INI et le script d'une ROM
pub fn export_files(
    base: &str,
    rom_friendly: &str,
    ini_text: &str,
    script_text: &str,
) -> ExportResult<ExportedFiles> {
    export_files_on(Platform::current(), base, rom_friendly, ini_text, script_text)
}

/// Variante de [`export_files`] pour une plate-forme donnée
pub fn export_files_on(
    platform: Platform,
    base: &str,
    rom_friendly: &str,
    ini_text: &str,
    script_text: &str,
) -> ExportResult<ExportedFiles> {
    check_host_path(base, platform)?;

    let dirs = prepare_directories(Path::new(base))?;
    let files = ExportedFiles {
        ini: dirs.ini_file(rom_friendly),
        bat: dirs.bat_file(rom_friendly),
    };

    write_file(&files.bat, script_text)?;
    write_file(&files.ini, ini_text)?;
    Ok(files)
}

fn read_optional(path: &Path) -> ExportResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ExportError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Relit les fichiers existants d'une ROM ; un fichier absent donne `None`.
///
/// Le script est cherché sous le nom affiché puis sous le code ROM.
pub fn read_existing(base: &Path, rom_friendly: &str) -> ExportResult<ExistingFiles> {
    let dirs = ExportDirs::new(base);
    let ini = read_optional(&dirs.ini_file(rom_friendly))?;

    let script = match read_optional(&dirs.bat_file(rom_friendly))? {
        Some(script) => Some(script),
        None => read_optional(&dirs.bat.join(format!("{}.bat", resolve_rom(rom_friendly))))?,
    };

    Ok(ExistingFiles { ini, script })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_str().unwrap();

        let files = export_files(base, "Virtua Cop", "[General]\n", "echo run").unwrap();
        assert_eq!(files.ini, dir.path().join("ini").join("vcop.ini"));
        assert_eq!(files.bat, dir.path().join("bat").join("Virtua Cop.bat"));
        assert_eq!(fs::read_to_string(&files.ini).unwrap(), "[General]\n");
        assert_eq!(fs::read_to_string(&files.bat).unwrap(), "echo run");
    }

    #[test]
    fn test_windows_path_refused_on_other_hosts() {
        let result = export_files_on(Platform::Unix, "C:/invalid", "Virtua Cop", "", "");
        assert!(matches!(result, Err(ExportError::WindowsPathOnHost(_))));
        assert!(check_host_path("C:\\QMamehook", Platform::Unix).is_err());
        assert!(check_host_path("C:/QMamehook", Platform::Windows).is_ok());
        assert!(check_host_path("/home/user/QMamehook", Platform::Unix).is_ok());
    }

    #[test]
    fn test_is_windows_style() {
        assert!(is_windows_style("C:/x"));
        assert!(is_windows_style("d:\\x"));
        assert!(!is_windows_style("C:"));
        assert!(!is_windows_style("/c/x"));
    }

    #[test]
    fn test_prepare_directories_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = prepare_directories(dir.path()).unwrap();
        let second = prepare_directories(dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.ini.is_dir());
        assert!(first.bat.is_dir());
    }

    #[test]
    fn test_read_existing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_str().unwrap();

        assert_eq!(read_existing(dir.path(), "Virtua Cop").unwrap(), ExistingFiles::default());

        export_files(base, "Virtua Cop", "[Output]\n", "start x").unwrap();
        let existing = read_existing(dir.path(), "Virtua Cop").unwrap();
        assert_eq!(existing.ini.as_deref(), Some("[Output]\n"));
        assert_eq!(existing.script.as_deref(), Some("start x"));
    }

    #[test]
    fn test_read_existing_falls_back_to_rom_code_script() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = prepare_directories(dir.path()).unwrap();
        fs::write(dirs.bat.join("vcop.bat"), "legacy").unwrap();

        let existing = read_existing(dir.path(), "Virtua Cop").unwrap();
        assert_eq!(existing.script.as_deref(), Some("legacy"));
        assert_eq!(existing.ini, None);
    }
}
