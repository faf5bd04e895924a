use std::time::Instant;

use anyhow::{Result, bail};
use comfy_table::{
    Attribute, Cell, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS as RoundCorners,
    presets::UTF8_FULL,
};
use owo_colors::colored::*;

use crate::{
    anchor::{self, Anchor, Splice},
    config::Config,
    manifest, output,
    project::ProjectTree,
    render,
    tonal::TonalPalette,
};

use super::{parse_seed, project_name_error};

pub struct AddOptions {
    pub project_name: String,
    pub primary: String,
    pub accent: String,
    pub dark: bool,
}

/// Runs one generation request against the project behind `tree`: derive
/// both palettes, write the palette stylesheet, wire it into the global
/// stylesheet, HTML entry point and package manifest.
///
/// Input validation happens up front; nothing is written until both seeds
/// and the project name have been accepted.
pub fn execute(options: &AddOptions, tree: &mut dyn ProjectTree) -> Result<()> {
    let started = Instant::now();

    let name = options.project_name.trim();
    if name.is_empty() {
        bail!("No project name provided");
    }
    if let Some(reason) = project_name_error(name) {
        bail!("Invalid project name '{name}': {reason}");
    }
    let primary_seed = parse_seed("primary", &options.primary)?;
    let accent_seed = parse_seed("accent", &options.accent)?;

    let config = Config::load(tree)?;
    let dark = options.dark || config.theme.dark;

    output::status("Deriving", format!("tonal palettes for '{name}'"));
    let primary = TonalPalette::generate(primary_seed);
    let accent = TonalPalette::generate(accent_seed);

    let palettes = render::render_palettes(name, &primary, &accent)?;
    tree.write(&config.paths.palettes, &palettes)?;
    output::status("Writing", &config.paths.palettes);

    patch_styles(tree, &config, name, &primary, &accent, dark)?;
    patch_entry(tree, &config)?;
    patch_manifest(tree, &config)?;

    print_summary(name, &options.primary, &options.accent, dark, &config);
    output::status(
        "Finished",
        format!("in {}", output::format_duration(started.elapsed())),
    );
    Ok(())
}

fn patch_styles(
    tree: &mut dyn ProjectTree,
    config: &Config,
    name: &str,
    primary: &TonalPalette,
    accent: &TonalPalette,
    dark: bool,
) -> Result<()> {
    let Some(source) = tree.read(&config.paths.styles)? else {
        output::warn(format!(
            "{} not found; skipping stylesheet wiring",
            config.paths.styles
        ));
        return Ok(());
    };

    let use_target = sass_use_path(&config.paths.styles, &config.paths.palettes);
    let mut splices = vec![Splice {
        anchor: Anchor::FileStart,
        content: format!("@use '{use_target}' as palettes;\n"),
        guard: Some(format!("'{use_target}'")),
    }];
    if dark {
        let block = render::render_dark_theme(name, primary, accent)?;
        splices.push(Splice {
            anchor: Anchor::FileEnd,
            content: format!("\n{block}"),
            guard: Some(render::dark_theme_marker(name)),
        });
    }

    let patched = anchor::apply(&source, &splices)?;
    if patched != source {
        tree.write(&config.paths.styles, &patched)?;
        output::status("Patching", &config.paths.styles);
    }
    Ok(())
}

fn patch_entry(tree: &mut dyn ProjectTree, config: &Config) -> Result<()> {
    // Not every project ships an HTML entry point; its absence is fine.
    if !tree.exists(&config.paths.entry) {
        return Ok(());
    }
    let Some(source) = tree.read(&config.paths.entry)? else {
        return Ok(());
    };

    let splices = [Splice {
        anchor: Anchor::BeforeFirst("</head>"),
        content: render::entry_links()?.to_string(),
        guard: Some("fonts.googleapis.com".to_string()),
    }];
    match anchor::apply(&source, &splices) {
        Ok(patched) => {
            if patched != source {
                tree.write(&config.paths.entry, &patched)?;
                output::status("Patching", &config.paths.entry);
            }
        }
        Err(_) => {
            output::warn(format!(
                "{} has no </head>; skipping font links",
                config.paths.entry
            ));
        }
    }
    Ok(())
}

fn patch_manifest(tree: &mut dyn ProjectTree, config: &Config) -> Result<()> {
    let Some(source) = tree.read(&config.paths.manifest)? else {
        output::warn(format!(
            "{} not found; skipping dependency setup",
            config.paths.manifest
        ));
        return Ok(());
    };

    let package = &config.manifest.package;
    if let Some(updated) = manifest::add_dependency(&source, package, &config.manifest.version)? {
        tree.write(&config.paths.manifest, &updated)?;
        output::status(
            "Adding",
            format!(
                "{package} {} to {}",
                config.manifest.version, config.paths.manifest
            ),
        );
    }
    Ok(())
}

/// Sass module path for importing the palette file from the directory that
/// holds the global stylesheet: relative, extension dropped, partial
/// underscore dropped.
fn sass_use_path(styles: &str, palettes: &str) -> String {
    let mut styles_dir: Vec<&str> = styles.split('/').collect();
    styles_dir.pop();
    let target: Vec<&str> = palettes.split('/').collect();

    let mut common = 0;
    while common < styles_dir.len()
        && common + 1 < target.len()
        && styles_dir[common] == target[common]
    {
        common += 1;
    }

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..styles_dir.len() {
        parts.push("..");
    }
    parts.extend(&target[common..target.len() - 1]);

    let file = target[target.len() - 1];
    let file = file.strip_prefix('_').unwrap_or(file);
    let file = file.strip_suffix(".scss").unwrap_or(file);
    parts.push(file);
    parts.join("/")
}

fn print_summary(name: &str, primary: &str, accent: &str, dark: bool, config: &Config) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(RoundCorners)
        .set_width(60)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Details").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![
        Cell::new("Project"),
        Cell::new(format!("{}", name.bright_green())),
    ]);
    table.add_row(vec![
        Cell::new("Primary"),
        Cell::new(format!("{}", primary.cyan())),
    ]);
    table.add_row(vec![
        Cell::new("Accent"),
        Cell::new(format!("{}", accent.cyan())),
    ]);
    table.add_row(vec![
        Cell::new("Dark theme"),
        Cell::new(if dark { "enabled" } else { "skipped" }),
    ]);
    table.add_row(vec![
        Cell::new("Palettes"),
        Cell::new(&config.paths.palettes),
    ]);

    println!("\n{table}");
}
