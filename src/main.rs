//! # Log Relay - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Corre hasta que el proceso es terminado.

use log_relay::config::Config;
use log_relay::logging;
use log_relay::server::Server;

fn main() {
    println!("=================================");
    println!("  Acto Log Relay Server");
    println!("=================================\n");

    // Crear configuración (CLI o variables de entorno)
    let config = Config::new();

    logging::init();
    config.print_summary();

    // Valida la configuración, resuelve el archivo y hace bind
    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "fatal startup error");
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    // Bloquea el thread; sólo retorna si alguien activa el ShutdownHandle
    let stats = server.run();
    tracing::info!(stats = %stats.to_json(), "server stopped");
}
