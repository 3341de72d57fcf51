//! Subcommand bodies. Output goes to any `Write` so tests can capture it.

use std::io::Write;

use anyhow::{bail, Context, Result};
use flicker_core::{LookupResponse, OmdbClient, TmdbClient, Transport};
use tracing::info;

pub fn search<T: Transport>(
    client: &OmdbClient<T>,
    title: &str,
    year: Option<&str>,
    media_type: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let response = client
        .lookup(title, year, media_type)
        .with_context(|| format!("lookup of {title:?} failed"))?;

    if let Some(message) = response.api_error() {
        bail!("OMDb could not find {title:?}: {message}");
    }
    info!(title, "lookup succeeded");

    if json {
        return print_json(&response, out);
    }
    let summary = response.summary();
    writeln!(out, "Title: {}", summary.title.as_deref().unwrap_or("N/A"))?;
    writeln!(out, "Year: {}", summary.year.as_deref().unwrap_or("N/A"))?;
    Ok(())
}

pub fn tmdb<T: Transport>(
    client: &TmdbClient<T>,
    id: u64,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let response = client
        .movie(id)
        .with_context(|| format!("TMDb lookup of movie {id} failed"))?;

    if response.get("success").and_then(|v| v.as_bool()) == Some(false) {
        let message = response.get_str("status_message").unwrap_or("unknown error");
        bail!("TMDb rejected movie {id}: {message}");
    }

    if json {
        return print_json(&response, out);
    }
    writeln!(out, "Title: {}", response.get_str("title").unwrap_or("N/A"))?;
    writeln!(out, "IMDb ID: {}", response.get_str("imdb_id").unwrap_or("N/A"))?;
    Ok(())
}

fn print_json(response: &LookupResponse, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, response)?;
    writeln!(out)?;
    Ok(())
}
