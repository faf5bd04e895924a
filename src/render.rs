use anyhow::{Context, Result, anyhow};
use handlebars::Handlebars;
use include_dir::{Dir, include_dir};
use serde_json::json;

use crate::tonal::{Stop, Swatch, TonalPalette};

static TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Renders the palette-defining stylesheet: one palette map per seed, each
/// with a nested contrast sub-map. Pure string-in, string-out; writing the
/// result anywhere is the caller's business.
pub fn render_palettes(
    project_name: &str,
    primary: &TonalPalette,
    accent: &TonalPalette,
) -> Result<String> {
    let data = json!({
        "project_name": project_name,
        "primary_entries": map_entries(primary, "  ", Channel::Tone),
        "primary_contrast_entries": map_entries(primary, "    ", Channel::Contrast),
        "accent_entries": map_entries(accent, "  ", Channel::Tone),
        "accent_contrast_entries": map_entries(accent, "    ", Channel::Contrast),
    });
    engine()
        .render_template(template("palettes.scss.hbs")?, &data)
        .context("Failed to render palette stylesheet")
}

/// Renders the dark-theme block appended to the global stylesheet. Its
/// first line is [`dark_theme_marker`], which doubles as the guard that
/// keeps re-runs from inserting the block twice.
pub fn render_dark_theme(
    project_name: &str,
    primary: &TonalPalette,
    accent: &TonalPalette,
) -> Result<String> {
    let data = json!({
        "project_name": project_name,
        "marker": dark_theme_marker(project_name),
        "primary_tone": primary.get(Stop::S200).color.hex8(),
        "accent_tone": accent.get(Stop::S200).color.hex8(),
    });
    engine()
        .render_template(template("dark-theme.scss.hbs")?, &data)
        .context("Failed to render dark theme block")
}

pub fn dark_theme_marker(project_name: &str) -> String {
    format!("// themegen dark theme ({project_name})")
}

/// The font links spliced into the HTML entry point. The snippet is static,
/// so it ships verbatim rather than as a template.
pub fn entry_links() -> Result<&'static str> {
    template("entry-links.html")
}

enum Channel {
    Tone,
    Contrast,
}

fn map_entries(palette: &TonalPalette, indent: &str, channel: Channel) -> String {
    let entry = |swatch: &Swatch| {
        let value = match channel {
            Channel::Tone => swatch.color.hex8(),
            Channel::Contrast => swatch.contrast.hex(),
        };
        format!("{indent}{}: {value},", swatch.stop.name())
    };
    palette
        .swatches()
        .iter()
        .map(entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn engine() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
}

fn template(name: &str) -> Result<&'static str> {
    TEMPLATES
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| anyhow!("Template '{}' not found or not valid UTF-8", name))
}
