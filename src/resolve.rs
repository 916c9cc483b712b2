//! # Resolución de Rutas Candidatas
//! src/resolve.rs
//!
//! Evalúa una lista ordenada de rutas y elige la primera que exista.
//! Si ninguna existe, el resultado lo dice explícitamente pero conserva la
//! última candidata: el error se difiere al primer intento de apertura.

use crate::error::{RelayError, Result};
use std::path::{Path, PathBuf};

/// Resultado de resolver la lista de candidatas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Primera candidata existente
    Found(PathBuf),
    /// Ninguna existe; se usará la última
    Missing { fallback: PathBuf },
}

impl Resolution {
    /// Ruta que el servidor intentará abrir en cada conexión
    pub fn path(&self) -> &Path {
        match self {
            Resolution::Found(path) => path,
            Resolution::Missing { fallback } => fallback,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Ruta absoluta para los logs (la ruta tal cual si no se puede calcular)
    pub fn display_path(&self) -> PathBuf {
        std::path::absolute(self.path()).unwrap_or_else(|_| self.path().to_path_buf())
    }
}

/// Resuelve las candidatas en orden de prioridad
pub fn resolve<P: AsRef<Path>>(candidates: &[P]) -> Result<Resolution> {
    let last = candidates.last().ok_or(RelayError::NoCandidates)?;

    for candidate in candidates {
        let path = candidate.as_ref();
        if path.exists() {
            tracing::debug!(path = %path.display(), "candidate found");
            return Ok(Resolution::Found(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "candidate does not exist");
    }

    Ok(Resolution::Missing {
        fallback: last.as_ref().to_path_buf(),
    })
}
