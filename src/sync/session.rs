//! Garde de chargement
//!
//! Pendant un chargement, les écritures déclenchées par le remplissage du
//! modèle doivent être ignorées. Le drapeau partagé est levé par un
//! [`LoadSession`] et remis à son état précédent quand la garde est libérée.

use std::cell::Cell;
use std::rc::Rc;

/// Propriétaire du drapeau de chargement
#[derive(Debug, Default)]
pub struct LoadTracker {
    loading: Rc<Cell<bool>>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ouvre une session ; le drapeau reste levé jusqu'à sa libération
    pub fn begin(&self) -> LoadSession {
        let previous = self.loading.replace(true);
        LoadSession {
            loading: Rc::clone(&self.loading),
            previous,
        }
    }

    /// Vue en lecture seule pour les gestionnaires d'écriture
    pub fn view(&self) -> LoadState {
        LoadState {
            loading: Rc::clone(&self.loading),
        }
    }
}

/// Garde de portée d'un chargement
#[derive(Debug)]
#[must_use = "le chargement se termine dès que la garde est libérée"]
pub struct LoadSession {
    loading: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for LoadSession {
    fn drop(&mut self) {
        self.loading.set(self.previous);
    }
}

/// Vue en lecture seule du drapeau de chargement
#[derive(Debug, Clone)]
pub struct LoadState {
    loading: Rc<Cell<bool>>,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}
