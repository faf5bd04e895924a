use anyhow::Result;
use comfy_table::{
    Attribute, Cell, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS as RoundCorners,
    presets::UTF8_FULL,
};
use owo_colors::OwoColorize;

use crate::{
    color::Color,
    tonal::{Stop, TonalPalette},
};

use super::parse_seed;

/// Derives both palettes and prints them as a table. Touches no files.
pub fn execute(primary: &str, accent: &str) -> Result<()> {
    let primary_palette = TonalPalette::generate(parse_seed("primary", primary)?);
    let accent_palette = TonalPalette::generate(parse_seed("accent", accent)?);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(RoundCorners)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Stop").add_attribute(Attribute::Bold),
            Cell::new(format!("Primary ({primary})")).add_attribute(Attribute::Bold),
            Cell::new("Contrast"),
            Cell::new(format!("Accent ({accent})")).add_attribute(Attribute::Bold),
            Cell::new("Contrast"),
        ]);

    for stop in Stop::ALL {
        let primary_swatch = primary_palette.get(stop);
        let accent_swatch = accent_palette.get(stop);
        table.add_row(vec![
            Cell::new(stop.name()),
            Cell::new(format!(
                "{} {}",
                chip(primary_swatch.color),
                primary_swatch.color.hex8()
            )),
            Cell::new(primary_swatch.contrast.hex()),
            Cell::new(format!(
                "{} {}",
                chip(accent_swatch.color),
                accent_swatch.color.hex8()
            )),
            Cell::new(accent_swatch.contrast.hex()),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn chip(color: Color) -> String {
    format!("{}", "  ".on_truecolor(color.r, color.g, color.b))
}
