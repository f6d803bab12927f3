//! Erreurs d'export

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Échecs de lecture ou d'écriture des fichiers exportés
#[derive(Debug, Error)]
pub enum ExportError {
    /// Chemin `C:/...` sur un hôte non Windows
    #[error("Chemin de style Windows sur un système non Windows : {0}")]
    WindowsPathOnHost(String),

    #[error("Impossible de créer le répertoire {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Impossible d'écrire {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Impossible de lire {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;
