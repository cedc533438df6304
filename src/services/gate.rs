//! Gate decisions for the document generator.
//!
//! Everything here is pure: format checks, slot replacement, the gate
//! decision, and payload assembly. Network outcomes come in from the
//! portal client and leave as a fresh `ValidationState` value; the command
//! layer owns persistence and printing.

use crate::domain::constants::UNI_MAIL_DOMAIN;
use crate::domain::models::{
    GateView, GenerateRequest, PersonRecord, Slot, StudentRecord, ValidationState,
};
use crate::services::portal::PortalError;

/// Exactly 8 digits.
pub fn check_dni_format(dni: &str) -> Result<(), PortalError> {
    if dni.len() == 8 && dni.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PortalError::Format(format!(
            "dni must be exactly 8 digits (got {:?})",
            dni
        )))
    }
}

/// Exactly 8 digits followed by one uppercase letter, e.g. `20220259H`.
pub fn check_uni_format(codigo: &str) -> Result<(), PortalError> {
    let bytes = codigo.as_bytes();
    let ok = bytes.len() == 9
        && bytes[..8].iter().all(|b| b.is_ascii_digit())
        && bytes[8].is_ascii_uppercase();
    if ok {
        Ok(())
    } else {
        Err(PortalError::Format(format!(
            "student code must be 8 digits followed by one uppercase letter (got {:?})",
            codigo
        )))
    }
}

pub fn with_identity(state: &ValidationState, outcome: Slot<PersonRecord>) -> ValidationState {
    ValidationState {
        identity: outcome,
        institution: state.institution.clone(),
    }
}

pub fn with_institution(state: &ValidationState, outcome: Slot<StudentRecord>) -> ValidationState {
    ValidationState {
        identity: state.identity.clone(),
        institution: outcome,
    }
}

pub fn gate_open(state: &ValidationState) -> bool {
    state.identity.is_valid() && state.institution.is_valid()
}

pub fn view(state: &ValidationState) -> GateView {
    let open = gate_open(state);
    let overall = if open {
        "ready"
    } else if state.identity.is_valid() || state.institution.is_valid() {
        "partial"
    } else {
        "waiting"
    };
    GateView {
        identity: state.identity.label(),
        institution: state.institution.label(),
        gate_enabled: open,
        overall,
    }
}

/// Builds the combined generation payload, or fails without touching the
/// network when the gate is closed or a selection is missing.
pub fn assemble_request(
    state: &ValidationState,
    carrera: &str,
    ciclo: &str,
) -> Result<GenerateRequest, PortalError> {
    let (person, student) = match (state.identity.record(), state.institution.record()) {
        (Some(p), Some(s)) => (p, s),
        _ => {
            return Err(PortalError::Precondition(
                "gate closed: both dni and student code must validate first".to_string(),
            ))
        }
    };
    if carrera.trim().is_empty() || ciclo.trim().is_empty() {
        return Err(PortalError::Precondition(
            "carrera and ciclo are required".to_string(),
        ));
    }
    Ok(GenerateRequest {
        nombre: person.nombre_completo.clone(),
        codigo: student.codigo.clone(),
        dni: person.dni.clone(),
        carrera: carrera.to_string(),
        ciclo: ciclo.to_string(),
        correo: format!("{}@{}", student.codigo, UNI_MAIL_DOMAIN),
    })
}
