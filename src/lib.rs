//! # Log Relay
//! src/lib.rs
//!
//! Servidor TCP que, por cada conexión, transmite un archivo local línea
//! por línea y luego cierra la conexión. No hay protocolo: el cliente lee
//! hasta EOF.
//!
//! ## Arquitectura
//!
//! - `config`: Configuración inmutable (puerto, host, rutas candidatas)
//! - `resolve`: Elección del archivo entre las rutas candidatas
//! - `relay`: Copia línea por línea de un origen a un destino
//! - `server`: Listener TCP y loop de aceptación secuencial
//! - `stats`: Contadores de transferencias
//! - `error`: Errores fatales y por conexión
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use log_relay::config::Config;
//! use log_relay::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod relay;
pub mod resolve;
pub mod server;
pub mod stats;

pub use error::{RelayError, Result};
