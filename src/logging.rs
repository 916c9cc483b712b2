//! # Logging
//! src/logging.rs
//!
//! Diagnósticos con `tracing`. El nivel se controla con `RUST_LOG`
//! (por defecto `info`). Todo va a stderr; stdout queda para el banner.

use tracing_subscriber::EnvFilter;

/// Nivel por defecto cuando `RUST_LOG` no está definido
pub const DEFAULT_FILTER: &str = "info";

/// Inicializa el subscriber global. Llamar una sola vez desde `main`.
///
/// Retorna `false` si ya había un subscriber instalado.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
