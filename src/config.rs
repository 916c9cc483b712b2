//! # Configuración del Relay
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte para
//! argumentos CLI y variables de entorno. La configuración se construye una
//! sola vez al arrancar y se pasa al servidor como un valor inmutable.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./log_relay --port 8080 \
//!   --file dat/json/changes_log.json \
//!   --file /var/log/acto/changes_log.json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! RELAY_PORT=9000 RELAY_FILES=a.json,b.json ./log_relay
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Rutas candidatas por defecto, en orden de prioridad
pub const DEFAULT_CANDIDATES: [&str; 2] = [
    "dat/json/changes_log.json",
    "Acto-Sphere/dat/json/changes_log.json",
];

/// Configuración del servidor de relay
#[derive(Debug, Clone, Parser)]
#[command(name = "log_relay")]
#[command(about = "Transmite un archivo de log línea por línea a cada cliente TCP")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "RELAY_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "RELAY_HOST")]
    pub host: String,

    /// Rutas candidatas del archivo a servir; gana la primera que exista
    #[arg(
        short = 'f',
        long = "file",
        env = "RELAY_FILES",
        value_delimiter = ',',
        default_values = DEFAULT_CANDIDATES
    )]
    pub candidates: Vec<PathBuf>,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Configuración con un puerto y una sola ruta candidata.
    /// Útil en tests con puerto efímero (0).
    pub fn with_file(port: u16, path: impl Into<PathBuf>) -> Self {
        Self {
            port,
            host: "127.0.0.1".to_string(),
            candidates: vec![path.into()],
        }
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use log_relay::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.candidates.is_empty() {
            return Err("At least one candidate file is required".to_string());
        }

        if self.candidates.iter().any(|p| p.as_os_str().is_empty()) {
            return Err("Candidate file paths must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║               Log Relay Server Configuration                ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("📄 Candidate files (first existing wins):");
        for (i, path) in self.candidates.iter().enumerate() {
            println!("   {}. {}", i + 1, path.display());
        }
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}
