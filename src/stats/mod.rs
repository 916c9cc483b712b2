//! # Estadísticas de Transferencias
//! src/stats/mod.rs
//!
//! Contadores del servidor, sólo para observación:
//! - Conexiones atendidas
//! - Transferencias completas y fallidas
//! - Líneas y bytes enviados
//! - Latencias por conexión (promedio, p50, p99)

pub mod collector;

pub use collector::{RelayStats, StatsSnapshot};
