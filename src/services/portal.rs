use crate::domain::models::{Constancia, GenerateReceipt, GenerateRequest, PersonRecord, StudentRecord};
use serde::Deserialize;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum PortalError {
    /// Input failed the client-side shape check; no request was made.
    #[error("{0}")]
    Format(String),
    /// The gate is closed or a required field is missing; no request was made.
    #[error("{0}")]
    Precondition(String),
    /// The portal answered with a failure envelope.
    #[error("portal rejected request: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unreadable portal response: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct PortalClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl PortalClient {
    pub fn new(base: &str, timeout_ms: u64) -> Result<Self, PortalError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn validate_dni(&self, dni: &str) -> Result<PersonRecord, PortalError> {
        let body = self
            .http
            .post(self.url("/api/validar-dni"))
            .json(&serde_json::json!({ "dni": dni }))
            .send()?
            .text()?;
        parse_dni_envelope(&body, dni)
    }

    pub fn validate_uni(&self, codigo: &str) -> Result<StudentRecord, PortalError> {
        let body = self
            .http
            .post(self.url("/api/validar-uni"))
            .json(&serde_json::json!({ "codigo": codigo }))
            .send()?
            .text()?;
        parse_uni_envelope(&body, codigo)
    }

    pub fn generate(&self, req: &GenerateRequest) -> Result<GenerateReceipt, PortalError> {
        let body = self
            .http
            .post(self.url("/api/generar-constancia"))
            .json(req)
            .send()?
            .text()?;
        parse_generate_envelope(&body)
    }

    pub fn sign(&self, registro_id: &str) -> Result<String, PortalError> {
        let body = self
            .http
            .post(self.url("/api/firmar-constancia"))
            .json(&serde_json::json!({ "registro_id": registro_id }))
            .send()?
            .text()?;
        parse_sign_envelope(&body)
    }

    pub fn tracking(&self) -> Result<Vec<Constancia>, PortalError> {
        let body = self
            .http
            .get(self.url("/api/obtener-seguimiento"))
            .send()?
            .text()?;
        let envelope: TrackingEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.constancias)
    }

    pub fn download(&self, id: &str) -> Result<Vec<u8>, PortalError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/descargar-constancia/{}", id)))
            .send()?;
        if !resp.status().is_success() {
            return Err(PortalError::Rejected(format!(
                "download failed for {} (http {})",
                id,
                resp.status()
            )));
        }
        Ok(resp.bytes()?.to_vec())
    }
}

#[derive(Deserialize)]
struct DniEnvelope {
    #[serde(default)]
    success: bool,
    datos_persona: Option<PersonRecord>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct UniEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<StudentRecord>,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct GenerateEnvelope {
    #[serde(default)]
    success: bool,
    registro_id: Option<String>,
    archivo_pdf: Option<String>,
    mensaje: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct SignEnvelope {
    #[serde(default)]
    success: bool,
    mensaje: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct TrackingEnvelope {
    #[serde(default)]
    constancias: Vec<Constancia>,
}

pub fn parse_dni_envelope(body: &str, dni: &str) -> Result<PersonRecord, PortalError> {
    let envelope: DniEnvelope = serde_json::from_str(body)?;
    match envelope {
        DniEnvelope {
            success: true,
            datos_persona: Some(mut record),
            ..
        } => {
            // The lookup page does not always echo the document number back.
            if record.dni.is_empty() {
                record.dni = dni.to_string();
            }
            Ok(record)
        }
        DniEnvelope { error, .. } => Err(PortalError::Rejected(
            error.unwrap_or_else(|| format!("dni not found: {}", dni)),
        )),
    }
}

pub fn parse_uni_envelope(body: &str, codigo: &str) -> Result<StudentRecord, PortalError> {
    let envelope: UniEnvelope = serde_json::from_str(body)?;
    match envelope {
        UniEnvelope {
            success: true,
            data: Some(mut record),
            ..
        } => {
            if record.codigo.is_empty() {
                record.codigo = codigo.to_string();
            }
            Ok(record)
        }
        UniEnvelope { message, error, .. } => Err(PortalError::Rejected(
            message
                .or(error)
                .unwrap_or_else(|| format!("student code not found: {}", codigo)),
        )),
    }
}

pub fn parse_generate_envelope(body: &str) -> Result<GenerateReceipt, PortalError> {
    let envelope: GenerateEnvelope = serde_json::from_str(body)?;
    if envelope.success {
        Ok(GenerateReceipt {
            registro_id: envelope.registro_id,
            archivo_pdf: envelope.archivo_pdf,
            mensaje: envelope.mensaje,
        })
    } else {
        Err(PortalError::Rejected(
            envelope
                .error
                .unwrap_or_else(|| "generation failed".to_string()),
        ))
    }
}

pub fn parse_sign_envelope(body: &str) -> Result<String, PortalError> {
    let envelope: SignEnvelope = serde_json::from_str(body)?;
    if envelope.success {
        Ok(envelope
            .mensaje
            .unwrap_or_else(|| "signed".to_string()))
    } else {
        Err(PortalError::Rejected(
            envelope
                .error
                .unwrap_or_else(|| "signing failed".to_string()),
        ))
    }
}
