use crate::domain::models::{Constancia, TrackingReport};

/// Signature column value the authority flips when it signs.
pub const FIRMA_PENDIENTE: &str = "Pendiente";
pub const FIRMA_FIRMADO: &str = "Firmado";

/// The dashboard counters: total rows, rows awaiting signature, rows signed.
pub fn build_report(mut constancias: Vec<Constancia>, pending_only: bool) -> TrackingReport {
    let total = constancias.len();
    let pendientes = constancias
        .iter()
        .filter(|c| c.firma == FIRMA_PENDIENTE)
        .count();
    let firmadas = constancias
        .iter()
        .filter(|c| c.firma == FIRMA_FIRMADO)
        .count();
    if pending_only {
        constancias.retain(|c| c.firma == FIRMA_PENDIENTE);
    }
    TrackingReport {
        total,
        pendientes,
        firmadas,
        constancias,
    }
}
