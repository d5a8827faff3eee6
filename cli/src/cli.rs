//! Runs the search on the candidates and prints the results.

use crate::args::Args;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use rlifefind_lib::{Config, Finder, Pattern, Status, Template};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Reads a [`Config`] from a file, choosing the format by the extension.
fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text)?,
        Some("yaml" | "yml") => serde_yaml::from_str(&text)?,
        Some("toml") => toml::from_str(&text)?,
        _ => bail!("unknown config format: {}", path.display()),
    };
    Ok(config)
}

/// The config file, if any, overridden by the command-line options.
fn config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => read_config(path)
            .with_context(|| format!("invalid config file {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(ticks) = args.ticks {
        config = config.set_max_ticks(ticks);
    }
    if let Some(margin) = args.margin {
        config = config.set_margin(margin);
    }
    if args.no_absorb {
        config = config.set_absorb_gliders(false);
    }
    Ok(config)
}

fn read_template(path: &Path, binary: bool) -> Result<Template> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    let template = if binary {
        Template::from(&text.parse::<Pattern>()?)
    } else {
        text.parse()?
    };
    Ok(template)
}

/// The candidate files: the path itself if it is a file, otherwise every
/// `.rle` file in the directory, sorted by name.
fn candidates(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?
    {
        let file = entry?.path();
        if file.is_file() && file.extension().map_or(false, |e| e == "rle") {
            files.push(file);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn find(finder: &Finder, path: &Path) -> Result<Status> {
    let text = fs::read_to_string(path).context("failed to read file")?;
    let background: Pattern = text.parse()?;
    debug!(
        "{}: {}x{} with {} living cells",
        path.display(),
        background.width(),
        background.height(),
        background.population()
    );
    Ok(finder.find(&background)?)
}

fn print_text(name: &str, result: &Result<Status>) {
    match result {
        Ok(Status::Found(m)) => println!(
            "{}: found at ({}, {}) [{}%, {}%], tick {}, orientation {} ({})",
            name,
            m.x,
            m.y,
            m.percent_x,
            m.percent_y,
            m.tick,
            m.orientation.index(),
            m.orientation
        ),
        Ok(Status::NotFound) => println!("{}: not found", name),
        Err(e) => println!("{}: error: {:#}", name, e),
    }
}

fn print_json(name: &str, result: &Result<Status>) -> Result<()> {
    let value = match result {
        Ok(status) => serde_json::json!({ "name": name, "status": status }),
        Err(e) => serde_json::json!({ "name": name, "error": format!("{:#}", e) }),
    };
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

/// Searches every candidate for the template.
///
/// Errors in a single candidate are printed and do not stop the others.
pub(crate) fn run(args: &Args) -> Result<()> {
    let config = config(args)?;
    let template = read_template(&args.template, args.binary_template)
        .with_context(|| format!("invalid template {}", args.template.display()))?;
    let finder = config.finder(&template)?;
    let files = candidates(&args.candidates)?;
    info!(
        "looking for a {}x{} template in {} candidates, {} ticks each",
        template.width(),
        template.height(),
        files.len(),
        finder.config().max_ticks
    );

    let mut found = 0;
    for path in &files {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let result = find(&finder, path);
        match &result {
            Ok(Status::Found(_)) => found += 1,
            Ok(Status::NotFound) => (),
            Err(e) => warn!("{}: {:#}", name, e),
        }
        if args.json {
            print_json(&name, &result)?;
        } else {
            print_text(&name, &result);
        }
    }
    info!("found in {} of {} candidates", found, files.len());
    Ok(())
}
