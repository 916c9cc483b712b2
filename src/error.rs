//! # Errores del Relay
//! src/error.rs
//!
//! Taxonomía de errores del servidor:
//! - Fatales: fallo al hacer bind o configuración inválida. Terminan el proceso.
//! - Por conexión: archivo inexistente/ilegible o error de I/O a mitad de la
//!   transferencia. Se registran y el loop sigue aceptando conexiones.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errores del servidor de relay
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("no se pudo hacer bind en {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("configuración inválida: {0}")]
    Config(String),

    #[error("la lista de rutas candidatas está vacía")]
    NoCandidates,

    #[error("no se pudo abrir {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error leyendo el archivo: {0}")]
    ReadFile(#[source] io::Error),

    #[error("error escribiendo al cliente: {0}")]
    WriteClient(#[source] io::Error),

    #[error("error de I/O: {0}")]
    Io(#[from] io::Error),
}

impl RelayError {
    /// Indica si el error debe terminar el proceso
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RelayError::Bind { .. } | RelayError::Config(_) | RelayError::NoCandidates
        )
    }
}

/// Result con el error del relay
pub type Result<T> = std::result::Result<T, RelayError>;
