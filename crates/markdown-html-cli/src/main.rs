use anyhow::{Context, Result};
use markdown_html_config::Config;
use markdown_html_engine::render_document_to_html;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "markdown-html".to_string());

    let (input, output) = match args.as_slice() {
        [_, input] => (PathBuf::from(input), None),
        [_, input, output] => (PathBuf::from(input), Some(PathBuf::from(output))),
        _ => {
            eprintln!("Usage: {program_name} <input.md> [output.html]");
            process::exit(1);
        }
    };

    let output = match output {
        Some(output) => output,
        None => match default_output_path(&input, &Config::config_path()) {
            Ok(output) => output,
            Err(e) => {
                log::error!("Config load failed: {e}");
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
    };

    if let Err(e) = convert_file(&input, &output) {
        log::error!("Conversion failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Picks the output path when none was given on the command line.
///
/// Uses the config file's `output_dir` if one exists, otherwise writes next to
/// the input.
fn default_output_path(input: &Path, config_path: &Path) -> Result<PathBuf> {
    log::info!("Config path: {}", config_path.display());
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Using output dir from config: {}", config.output_dir.display());
            Ok(config.output_path_for(input))
        }
        None => {
            log::info!("No config file found, writing next to the input");
            Ok(input.with_extension("html"))
        }
    }
}

/// Reads `input`, renders it and writes the HTML to `output`.
///
/// Nothing is written if the document fails to convert.
fn convert_file(input: &Path, output: &Path) -> Result<()> {
    log::info!("Reading {}", input.display());
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let html = render_document_to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, html).with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Wrote {}", output.display());
    Ok(())
}
