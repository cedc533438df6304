use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Outcome of one external verification. The record travels with the
/// `Valid` arm, so a stored record without a passing verification is
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "record", rename_all = "lowercase")]
pub enum Slot<T> {
    #[default]
    Pending,
    Invalid,
    Valid(T),
}

impl<T> Slot<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Slot::Valid(_))
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Slot::Valid(r) => Some(r),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Pending => "pending",
            Slot::Invalid => "invalid",
            Slot::Valid(_) => "valid",
        }
    }
}

/// Identity record returned by the DNI lookup (`datos_persona` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub nombre_completo: String,
    #[serde(default)]
    pub dni: String,
}

/// Student record returned by the institutional lookup (`data` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub codigo: String,
    #[serde(default)]
    pub carrera: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facultad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Both halves of the generation gate. Each lookup replaces only its own
/// slot; the dependent action is permitted iff both slots are `Valid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationState {
    #[serde(default)]
    pub identity: Slot<PersonRecord>,
    #[serde(default)]
    pub institution: Slot<StudentRecord>,
}

/// Authenticated user profile issued by the external auth portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Everything persisted under `~/.config/tipuy/state.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub validation: ValidationState,
}

/// View of the gate consumed by the printers: slot statuses plus the
/// combined decision.
#[derive(Debug, PartialEq, Serialize)]
pub struct GateView {
    pub identity: &'static str,
    pub institution: &'static str,
    pub gate_enabled: bool,
    pub overall: &'static str,
}

/// Combined payload for `POST /api/generar-constancia`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub nombre: String,
    pub codigo: String,
    pub dni: String,
    pub carrera: String,
    pub ciclo: String,
    pub correo: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateReceipt {
    pub registro_id: Option<String>,
    pub archivo_pdf: Option<String>,
    pub mensaje: Option<String>,
}

/// One row of the portal's tracking table. The backend fills columns
/// progressively, so every field tolerates absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Constancia {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub alumno: String,
    #[serde(default)]
    pub codigo: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub carrera: String,
    #[serde(default)]
    pub ciclo: String,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub autoridad: String,
    #[serde(default)]
    pub firma: String,
    #[serde(default)]
    pub fecha: String,
}

#[derive(Debug, Serialize)]
pub struct TrackingReport {
    pub total: usize,
    pub pendientes: usize,
    pub firmadas: usize,
    pub constancias: Vec<Constancia>,
}

#[derive(Debug, Serialize)]
pub struct DownloadReport {
    pub id: String,
    pub path: String,
    pub bytes: usize,
}

#[derive(Serialize)]
pub struct ValidationReport {
    pub field: &'static str,
    pub status: &'static str,
    pub detail: String,
    pub gate: GateView,
}
