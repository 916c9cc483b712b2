//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Resuelve el archivo a servir entre las rutas candidatas
//! 2. Escucha en un puerto
//! 3. Acepta una conexión a la vez
//! 4. Transmite el archivo línea por línea y cierra la conexión
//!
//! Las conexiones se atienden en serie: un cliente que no lee bloquea al
//! siguiente hasta que se desconecta.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{handle_connection, Server, ShutdownHandle};
