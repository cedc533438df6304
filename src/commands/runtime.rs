use crate::cli::{Cli, Commands, ValidateCommands};
use crate::domain::models::{Slot, State, ValidationReport};
use crate::services::gate;
use crate::services::output::emit;
use crate::services::portal::PortalClient;
use crate::services::storage;

pub fn handle_runtime_commands(
    cli: &Cli,
    state: &mut State,
    client: &PortalClient,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Validate { command } => match command {
            ValidateCommands::Dni { dni } => {
                let outcome =
                    gate::check_dni_format(dni).and_then(|_| client.validate_dni(dni));
                match outcome {
                    Ok(record) => {
                        state.validation =
                            gate::with_identity(&state.validation, Slot::Valid(record.clone()));
                        storage::save_state(state)?;
                        storage::audit(
                            "validate-dni",
                            serde_json::json!({ "dni": dni, "status": "valid" }),
                        );
                        let report = ValidationReport {
                            field: "dni",
                            status: "valid",
                            detail: format!("{} ({})", record.nombre_completo, record.dni),
                            gate: gate::view(&state.validation),
                        };
                        emit(cli.json, report, render_validation)?;
                    }
                    Err(err) => {
                        state.validation = gate::with_identity(&state.validation, Slot::Invalid);
                        storage::save_state(state)?;
                        storage::audit(
                            "validate-dni",
                            serde_json::json!({ "dni": dni, "status": "invalid" }),
                        );
                        return Err(err.into());
                    }
                }
            }
            ValidateCommands::Uni { codigo } => {
                let outcome =
                    gate::check_uni_format(codigo).and_then(|_| client.validate_uni(codigo));
                match outcome {
                    Ok(record) => {
                        state.validation =
                            gate::with_institution(&state.validation, Slot::Valid(record.clone()));
                        storage::save_state(state)?;
                        storage::audit(
                            "validate-uni",
                            serde_json::json!({ "codigo": codigo, "status": "valid" }),
                        );
                        let report = ValidationReport {
                            field: "uni",
                            status: "valid",
                            detail: format!(
                                "{} ({}, {})",
                                record.nombre, record.codigo, record.carrera
                            ),
                            gate: gate::view(&state.validation),
                        };
                        emit(cli.json, report, render_validation)?;
                    }
                    Err(err) => {
                        state.validation =
                            gate::with_institution(&state.validation, Slot::Invalid);
                        storage::save_state(state)?;
                        storage::audit(
                            "validate-uni",
                            serde_json::json!({ "codigo": codigo, "status": "invalid" }),
                        );
                        return Err(err.into());
                    }
                }
            }
        },
        Commands::Status => {
            let view = gate::view(&state.validation);
            emit(cli.json, view, |v| {
                format!(
                    "dni: {}\nuni: {}\ngate: {} ({})",
                    v.identity,
                    v.institution,
                    if v.gate_enabled { "open" } else { "closed" },
                    v.overall
                )
            })?;
        }
        Commands::Generate { carrera, ciclo } => {
            let request = gate::assemble_request(&state.validation, carrera, ciclo)?;
            let receipt = client.generate(&request)?;
            storage::audit(
                "generate",
                serde_json::json!({
                    "codigo": request.codigo,
                    "registro_id": receipt.registro_id.clone(),
                    "archivo_pdf": receipt.archivo_pdf.clone()
                }),
            );
            emit(cli.json, receipt, |r| {
                format!(
                    "constancia generated: {} (registro {})",
                    r.archivo_pdf.as_deref().unwrap_or("n/a"),
                    r.registro_id.as_deref().unwrap_or("n/a")
                )
            })?;
        }
        Commands::Reset => {
            state.validation = Default::default();
            storage::save_state(state)?;
            emit(cli.json, "reset", |_| "validation state cleared".to_string())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn render_validation(r: &ValidationReport) -> String {
    let gate_line = if r.gate.gate_enabled {
        "gate: open (ready to generate)".to_string()
    } else {
        format!("gate: closed ({})", r.gate.overall)
    };
    format!("{} {}: {}\n{}", r.field, r.status, r.detail, gate_line)
}
