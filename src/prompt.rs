use anyhow::Result;
use inquire::{
    Text,
    error::CustomUserError,
    ui::{Attributes, Color, ErrorMessageRenderConfig, RenderConfig, StyleSheet, Styled},
    validator::Validation,
};

use crate::{color, commands};

/// Prompt for the target project name when it was not passed as an argument.
pub fn project_name() -> Result<String> {
    let validator = |input: &str| -> Result<Validation, CustomUserError> {
        match commands::project_name_error(input.trim()) {
            Some(reason) => Ok(Validation::Invalid(reason.into())),
            None => Ok(Validation::Valid),
        }
    };

    let name = Text::new("Project name")
        .with_render_config(prompt_theme())
        .with_help_message("lowercase, numbers, '-' or '_', must start with a letter")
        .with_placeholder("my-app")
        .with_validator(validator)
        .prompt()?;

    Ok(name.trim().to_string())
}

/// Prompt for a seed color; `which` is "primary" or "accent".
pub fn seed_color(which: &'static str, placeholder: &'static str) -> Result<String> {
    let validator = |input: &str| -> Result<Validation, CustomUserError> {
        if color::Color::from_hex(input.trim()).is_some() {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid(
                "Expected a 3- or 6-digit hex color like #3f51b5".into(),
            ))
        }
    };

    let value = Text::new(&format!("{which} color"))
        .with_render_config(prompt_theme())
        .with_help_message("hex with a leading '#'")
        .with_placeholder(placeholder)
        .with_validator(validator)
        .prompt()?;

    Ok(value.trim().to_string())
}

fn prompt_theme() -> RenderConfig<'static> {
    let accent = Color::LightCyan;
    let mut config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new(">").with_fg(accent))
        .with_answered_prompt_prefix(Styled::new("ok").with_fg(Color::LightGreen))
        .with_canceled_prompt_indicator(Styled::new("cancelled").with_fg(Color::LightRed))
        .with_error_message(
            ErrorMessageRenderConfig::default_colored()
                .with_prefix(Styled::new("!").with_fg(Color::LightRed)),
        );

    config.prompt = StyleSheet::new()
        .with_fg(Color::White)
        .with_attr(Attributes::BOLD);
    config.answer = StyleSheet::new().with_fg(accent);
    config.placeholder = StyleSheet::new().with_fg(Color::DarkGrey);
    config.help_message = StyleSheet::new().with_fg(Color::DarkGrey);
    config
}
