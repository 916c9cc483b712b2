//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Loop de aceptación: bloquea hasta que llega un cliente, le transmite el
//! archivo completo y vuelve a esperar. En producción corre hasta que el
//! proceso es terminado; los tests lo detienen con un `ShutdownHandle`.

use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::relay::{relay_lines, RelayOutcome};
use crate::resolve::{resolve, Resolution};
use crate::stats::{RelayStats, StatsSnapshot};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Servidor de relay de un solo archivo
pub struct Server {
    listener: TcpListener,
    target: Resolution,
    stats: RelayStats,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Valida la configuración, resuelve el archivo y hace bind.
    ///
    /// Un fallo de bind es fatal: no se reintenta.
    pub fn bind(config: &Config) -> Result<Self> {
        config.validate().map_err(RelayError::Config)?;

        let target = resolve(config.candidates.as_slice())?;
        let shown = target.display_path();
        match &target {
            Resolution::Found(_) => {
                info!(path = %shown.display(), "serving file");
            }
            Resolution::Missing { .. } => {
                warn!(
                    path = %shown.display(),
                    "no candidate file exists yet, connections will fail until it does"
                );
            }
        }

        let address = config.address();
        let listener = TcpListener::bind(&address).map_err(|source| RelayError::Bind {
            addr: address.clone(),
            source,
        })?;
        info!(%address, "listening");

        Ok(Self {
            listener,
            target,
            stats: RelayStats::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn target(&self) -> &Resolution {
        &self.target
    }

    /// Handle compartido de las estadísticas
    pub fn stats(&self) -> RelayStats {
        self.stats.clone()
    }

    /// Crea un handle para detener el loop desde otro thread
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle> {
        let local = self.local_addr()?;
        let wake_addr = match local {
            SocketAddr::V4(addr) if addr.ip().is_unspecified() => {
                SocketAddr::new(Ipv4Addr::LOCALHOST.into(), addr.port())
            }
            SocketAddr::V6(addr) if addr.ip().is_unspecified() => {
                SocketAddr::new(Ipv6Addr::LOCALHOST.into(), addr.port())
            }
            addr => addr,
        };

        Ok(ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
            wake_addr,
        })
    }

    /// Loop de aceptación. Sólo retorna si se activa el `ShutdownHandle`.
    pub fn run(&self) -> StatsSnapshot {
        loop {
            info!("waiting for client connection");
            let accepted = self.listener.accept();

            if self.shutdown.load(Ordering::SeqCst) {
                info!("shutdown requested, leaving accept loop");
                break;
            }

            match accepted {
                Ok((stream, peer)) => self.serve(stream, peer),
                Err(e) => error!(error = %e, "failed to accept connection"),
            }
        }

        self.stats.snapshot()
    }

    /// Atiende una conexión y registra el resultado. Los errores no salen de aquí.
    fn serve(&self, stream: TcpStream, peer: SocketAddr) {
        info!(%peer, "client connected");
        let start = Instant::now();

        match handle_connection(stream, self.target.path()) {
            Ok(outcome) => {
                self.stats.record_success(outcome, start.elapsed());
                info!(
                    %peer,
                    lines = outcome.lines,
                    bytes = outcome.bytes,
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "data sent successfully"
                );
            }
            Err(e @ RelayError::OpenFile { .. }) => {
                self.stats.record_open_failure();
                error!(%peer, error = %e, "target file unavailable, closing without data");
            }
            Err(e) => {
                self.stats.record_transfer_failure(start.elapsed());
                error!(%peer, error = %e, "error handling client");
            }
        }

        debug!(stats = %self.stats.to_json(), "relay totals");
    }
}

/// Detiene el loop de aceptación de un `Server`
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    wake_addr: SocketAddr,
}

impl ShutdownHandle {
    /// Marca el servidor para detenerse y desbloquea el `accept`.
    ///
    /// Si hay una transferencia en curso, el loop termina cuando ésta acaba.
    /// Un cliente real aceptado después de activar el flag se cierra sin
    /// atenderse.
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
        // Conexión de despertador; si falla el listener ya no está aceptando
        if let Err(e) = TcpStream::connect(self.wake_addr) {
            debug!(error = %e, "wake-up connection failed");
        }
    }
}

/// Transmite el archivo `path` por `stream` y cierra la conexión.
///
/// El archivo se abre de nuevo en cada conexión, así cada cliente ve el
/// contenido actual. Si no se puede abrir o no es un archivo regular, el
/// cliente no recibe ningún byte.
pub fn handle_connection(stream: TcpStream, path: &Path) -> Result<RelayOutcome> {
    let open_error = |source| RelayError::OpenFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    // En Unix abrir un directorio funciona; el fallo llegaría en la lectura
    if !file.metadata().map_err(open_error)?.is_file() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let mut writer = BufWriter::new(&stream);
    let outcome = relay_lines(BufReader::new(file), &mut writer)?;
    writer.flush().map_err(RelayError::WriteClient)?;

    Ok(outcome)
}
