use std::io::{self, BufRead, Write};

use ptak_core::{AppConfig, DeleteRequest, Notice};

use crate::commands::common::{normalize_note_identifier, open_notebook, select_note_tab};
use crate::error::CliError;

pub fn run_delete(id: &str, assume_yes: bool, config: &AppConfig) -> Result<(), CliError> {
    let notice = delete_note(id, config, |request| {
        if assume_yes {
            Ok(true)
        } else {
            confirm_on_terminal(request)
        }
    })?;

    println!("{}", notice.message);
    Ok(())
}

/// Delete a note, asking `confirm` before anything is removed.
pub fn delete_note<F>(id: &str, config: &AppConfig, confirm: F) -> Result<Notice, CliError>
where
    F: FnOnce(&DeleteRequest) -> Result<bool, CliError>,
{
    let note_id = normalize_note_identifier(id)?;
    let mut notebook = open_notebook(config)?;
    select_note_tab(&mut notebook, &note_id)?;

    let request = notebook.begin_delete()?;
    if !confirm(&request)? {
        return Err(CliError::Cancelled);
    }

    Ok(notebook.confirm_delete(request)?)
}

fn confirm_on_terminal(request: &DeleteRequest) -> Result<bool, CliError> {
    let stdin = io::stdin();
    let mut stderr = io::stderr();
    read_confirmation(request, &mut stdin.lock(), &mut stderr)
}

pub fn read_confirmation(
    request: &DeleteRequest,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<bool, CliError> {
    write!(output, "{} [y/N] ", request.prompt())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
