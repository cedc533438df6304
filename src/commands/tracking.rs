use crate::cli::{Cli, Commands};
use crate::domain::models::DownloadReport;
use crate::services::config::ConfigFile;
use crate::services::output::{emit, emit_rows};
use crate::services::portal::PortalClient;
use crate::services::{storage, tracking};
use std::path::PathBuf;

pub fn handle_tracking_commands(
    cli: &Cli,
    client: &PortalClient,
    config: &ConfigFile,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Track { pending } => {
            let rows = client.tracking()?;
            let report = tracking::build_report(rows, *pending);
            emit_rows(
                cli.json,
                report,
                |r| r.constancias.clone(),
                |c| {
                    format!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        c.id, c.alumno, c.codigo, c.estado, c.firma, c.fecha
                    )
                },
                |r| {
                    Some(format!(
                        "total={} pendientes={} firmadas={}",
                        r.total, r.pendientes, r.firmadas
                    ))
                },
            )?;
        }
        Commands::Sign { registro_id } => {
            let mensaje = client.sign(registro_id)?;
            storage::audit("sign", serde_json::json!({ "registro_id": registro_id }));
            emit(cli.json, mensaje, |m| format!("signed {}: {}", registro_id, m))?;
        }
        Commands::Download { id, out } => {
            let bytes = client.download(id)?;
            let path = match out {
                Some(p) => p.clone(),
                None => default_download_path(config, id),
            };
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, &bytes)?;
            let report = DownloadReport {
                id: id.clone(),
                path: path.to_string_lossy().to_string(),
                bytes: bytes.len(),
            };
            storage::audit(
                "download",
                serde_json::json!({ "id": report.id.clone(), "path": report.path.clone() }),
            );
            emit(cli.json, report, |r| {
                format!("downloaded {} ({} bytes)", r.path, r.bytes)
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn default_download_path(config: &ConfigFile, id: &str) -> PathBuf {
    let dir = config
        .portal
        .download_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(format!("constancia_{}.pdf", id))
}
