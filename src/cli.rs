// src/cli.rs
use crate::config::RenderConfig;
use crate::renderer::{catalog, Renderer, TemplateId};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "resumake")]
#[command(about = "Render resume JSON into layout-engine document definitions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a resume file with a template
    Render {
        /// Resume JSON produced by the editor
        input: PathBuf,
        /// Template id (falls back to the configured default)
        #[arg(long)]
        template: Option<String>,
        /// Output path; defaults to output/<name>_<template>_<timestamp>.json
        #[arg(long)]
        output: Option<PathBuf>,
        /// Optional TOML config with page/font/styling overrides
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the document definition to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// List available templates
    Templates,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            input,
            template,
            output,
            config,
            stdout,
        } => {
            let config = match config {
                Some(path) => RenderConfig::from_toml_file(&path)?,
                None => RenderConfig::default(),
            };
            let template = template.unwrap_or_else(|| config.default_template.clone());

            let content = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read resume file: {}", input.display()))?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse resume JSON: {}", input.display()))?;

            let rendered = Renderer::new(config).render_value(&template, &value)?;
            info!(
                "Rendered '{}' with template {}",
                input.display(),
                rendered.template()
            );

            if stdout {
                println!("{}", rendered.to_json()?);
                return Ok(());
            }

            let output_path = match output {
                Some(path) => path,
                None => default_output_path(&input, rendered.template()),
            };
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(&output_path, rendered.to_bytes()?)
                .with_context(|| format!("Failed to write output: {}", output_path.display()))?;
            println!("✓ Wrote document definition to {}", output_path.display());
            Ok(())
        }

        Command::Templates => {
            for entry in catalog() {
                println!("{:<16} {}", entry.id, entry.description);
            }
            Ok(())
        }
    }
}

fn default_output_path(input: &PathBuf, template: TemplateId) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    PathBuf::from("output").join(format!(
        "{}_{}_{}.json",
        stem,
        template,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_shape() {
        let path = default_output_path(&PathBuf::from("data/ada.json"), TemplateId::Modern);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ada_modern_"));
        assert!(name.ends_with(".json"));
    }
}
