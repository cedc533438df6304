use crate::domain::models::JsonOut;
use serde::Serialize;

/// Emits one report either as the `{ ok, data }` JSON envelope or through
/// the provided plain-text renderer. Commands print nothing else on the
/// success path, so `--json` output stays machine-parseable.
pub fn emit<T: Serialize>(
    json: bool,
    data: T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

/// Tab-separated rows with an optional footer line, for table-style
/// commands. JSON mode emits the whole report instead.
pub fn emit_rows<T: Serialize, R>(
    json: bool,
    data: T,
    rows: impl FnOnce(&T) -> Vec<R>,
    row: impl Fn(&R) -> String,
    footer: impl FnOnce(&T) -> Option<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for r in rows(&data) {
            println!("{}", row(&r));
        }
        if let Some(line) = footer(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
