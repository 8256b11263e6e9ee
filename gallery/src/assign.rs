//! `name=value` assignments from the command line, translated into the
//! interactions a user would perform on the panel.

use std::path::PathBuf;

use patternflow::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Interact(Interaction),
    Upload { name: String, path: PathBuf },
    /// The control already shows the requested value
    Nothing,
}

pub fn split_assignment(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim(), value.trim()))
        }
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

/// Resolves `raw` against the renderer's current widgets. Option widgets
/// accept either an index or an option label/color.
pub fn plan(renderer: &ControlRenderer, raw: &str) -> Result<Action, String> {
    let (name, value) = split_assignment(raw)?;
    let binding = renderer
        .binding(name)
        .ok_or_else(|| format!("'{}' is not a control of this pattern", name))?;
    let name = name.to_string();

    let action = match (&binding.spec.kind, &binding.state) {
        (WidgetKind::Slider { .. }, _) => {
            let value = value
                .parse::<f32>()
                .map_err(|_| format!("'{}' needs a number", name))?;
            Action::Interact(Interaction::Slide { name, value })
        }
        (WidgetKind::Toggle, WidgetState::Toggle { active }) => {
            if parse_bool(value)? == *active {
                Action::Nothing
            } else {
                Action::Interact(Interaction::Toggle { name })
            }
        }
        (WidgetKind::Palette { options }, _) => {
            let index = parse_index(value, options.len(), |_| false)?;
            Action::Interact(Interaction::Choose { name, index })
        }
        (WidgetKind::Color { options }, _) => {
            let index = parse_index(value, options.len(), |i| {
                options[i].eq_ignore_ascii_case(value)
            })?;
            Action::Interact(Interaction::Choose { name, index })
        }
        (WidgetKind::Select { options }, _) => {
            let index =
                parse_index(value, options.len(), |i| options[i] == value)?;
            Action::Interact(Interaction::Select { name, index })
        }
        (WidgetKind::ImageUpload, _) => Action::Upload {
            name,
            path: PathBuf::from(value.trim_start_matches('@')),
        },
        (kind, _) => {
            return Err(format!(
                "'{}' is a {} control in an unexpected state",
                name,
                kind.variant_str()
            ));
        }
    };

    Ok(action)
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(format!("'{}' is not a boolean", value)),
    }
}

fn parse_index(
    value: &str,
    len: usize,
    matches_label: impl Fn(usize) -> bool,
) -> Result<usize, String> {
    if let Some(index) = (0..len).find(|i| matches_label(*i)) {
        return Ok(index);
    }
    match value.parse::<usize>() {
        Ok(index) if index < len => Ok(index),
        _ => Err(format!(
            "'{}' is not one of the {} options (index or label)",
            value, len
        )),
    }
}
