//! # Collector de Estadísticas
//! src/stats/collector.rs
//!
//! Registra el resultado de cada conexión. Es thread-safe para que otros
//! threads (por ejemplo los tests) puedan leerlo mientras el loop corre.

use crate::relay::RelayOutcome;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Máximo de latencias a guardar (para calcular percentiles)
const MAX_LATENCIES: usize = 10_000;

/// Collector de estadísticas thread-safe
#[derive(Clone)]
pub struct RelayStats {
    inner: Arc<Mutex<StatsData>>,
    start_time: Instant,
}

/// Datos internos
#[derive(Default)]
struct StatsData {
    connections: u64,
    completed: u64,
    open_failures: u64,
    transfer_failures: u64,
    lines_sent: u64,
    bytes_sent: u64,
    /// Latencias registradas (en microsegundos)
    latencies: VecDeque<u64>,
}

impl RelayStats {
    /// Crea un nuevo collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatsData {
                latencies: VecDeque::with_capacity(MAX_LATENCIES),
                ..StatsData::default()
            })),
            start_time: Instant::now(),
        }
    }

    fn data(&self) -> MutexGuard<'_, StatsData> {
        // Un panic en otro thread no invalida contadores simples
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registra una transferencia completa
    pub fn record_success(&self, outcome: RelayOutcome, latency: Duration) {
        let mut data = self.data();
        data.connections += 1;
        data.completed += 1;
        data.lines_sent += outcome.lines;
        data.bytes_sent += outcome.bytes;
        Self::push_latency(&mut data, latency);
    }

    /// Registra una conexión en la que no se pudo abrir el archivo
    pub fn record_open_failure(&self) {
        let mut data = self.data();
        data.connections += 1;
        data.open_failures += 1;
    }

    /// Registra un error de I/O a mitad de la transferencia
    pub fn record_transfer_failure(&self, latency: Duration) {
        let mut data = self.data();
        data.connections += 1;
        data.transfer_failures += 1;
        Self::push_latency(&mut data, latency);
    }

    fn push_latency(data: &mut StatsData, latency: Duration) {
        // Si tenemos demasiadas latencias, eliminar la más antigua
        if data.latencies.len() >= MAX_LATENCIES {
            data.latencies.pop_front();
        }
        data.latencies.push_back(latency.as_micros() as u64);
    }

    /// Obtiene un snapshot de las estadísticas
    pub fn snapshot(&self) -> StatsSnapshot {
        let data = self.data();
        let (p50, p99, avg) = calculate_percentiles(&data.latencies);

        StatsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            connections: data.connections,
            completed: data.completed,
            open_failures: data.open_failures,
            transfer_failures: data.transfer_failures,
            lines_sent: data.lines_sent,
            bytes_sent: data.bytes_sent,
            latency_p50_us: p50,
            latency_p99_us: p99,
            latency_avg_us: avg,
        }
    }

    /// Snapshot actual en formato JSON
    pub fn to_json(&self) -> String {
        self.snapshot().to_json()
    }
}

impl Default for RelayStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Calcula p50, p99 y promedio
fn calculate_percentiles(latencies: &VecDeque<u64>) -> (u64, u64, u64) {
    if latencies.is_empty() {
        return (0, 0, 0);
    }

    let mut sorted: Vec<u64> = latencies.iter().copied().collect();
    sorted.sort_unstable();

    let len = sorted.len();
    let p50 = sorted[len * 50 / 100];
    let p99 = sorted[len * 99 / 100];
    let avg = sorted.iter().sum::<u64>() / len as u64;

    (p50, p99, avg)
}

/// Snapshot de estadísticas (para uso externo)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub uptime_secs: u64,
    pub connections: u64,
    pub completed: u64,
    pub open_failures: u64,
    pub transfer_failures: u64,
    pub lines_sent: u64,
    pub bytes_sent: u64,
    pub latency_p50_us: u64,
    pub latency_p99_us: u64,
    pub latency_avg_us: u64,
}

impl StatsSnapshot {
    pub fn to_json(&self) -> String {
        // Struct plano de enteros: serializar no puede fallar
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
