//! Colored plain-text rendering of a [`PanelView`]

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::control_view::{ControlKind, ControlView, PanelView};

const BAR_WIDTH: usize = 20;

pub fn print_panel(panel: &PanelView, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_panel(&mut stdout, panel)
}

pub fn write_panel<W: WriteColor>(
    out: &mut W,
    panel: &PanelView,
) -> io::Result<()> {
    let label_width = panel
        .controls()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);

    for section in &panel.sections {
        if let Some(title) = &section.title {
            out.set_color(ColorSpec::new().set_bold(true))?;
            match section.icon {
                Some(icon) => writeln!(out, "{} {}", icon.glyph(), title)?,
                None => writeln!(out, "{}", title)?,
            }
            out.reset()?;
        }

        for control in &section.controls {
            write!(out, "  {:width$}  ", control.label, width = label_width)?;
            write_control(out, control)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn write_control<W: WriteColor>(
    out: &mut W,
    control: &ControlView,
) -> io::Result<()> {
    match control.kind {
        ControlKind::Slider => {
            let filled = slider_fill(control);
            write!(
                out,
                "[{}{}] ",
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled)
            )?;
            highlight(out, &control.display)
        }
        ControlKind::Toggle => {
            let color = if control.value == "true" {
                Color::Green
            } else {
                Color::Red
            };
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{}", control.display)?;
            out.reset()
        }
        ControlKind::Palette => {
            for (i, colors) in control.swatches.iter().enumerate() {
                write_marker(out, control.active == Some(i))?;
                for color in colors {
                    write_swatch(out, color)?;
                }
                write!(out, " ")?;
            }
            Ok(())
        }
        ControlKind::Color => {
            for (i, color) in control.options.iter().enumerate() {
                write_marker(out, control.active == Some(i))?;
                write_swatch(out, color)?;
                write!(out, " ")?;
            }
            Ok(())
        }
        ControlKind::Select => {
            for (i, option) in control.options.iter().enumerate() {
                if i > 0 {
                    write!(out, " | ")?;
                }
                if control.active == Some(i) {
                    highlight(out, option)?;
                } else {
                    write!(out, "{}", option)?;
                }
            }
            Ok(())
        }
        ControlKind::ImageUpload => {
            if control.show_upload {
                out.set_color(ColorSpec::new().set_dimmed(true))?;
                write!(out, "{}", control.display)?;
                out.reset()
            } else {
                highlight(out, &control.display)
            }
        }
    }
}

fn slider_fill(control: &ControlView) -> usize {
    let span = control.max - control.min;
    let Ok(value) = control.value.parse::<f32>() else {
        return 0;
    };
    if span <= 0.0 {
        return BAR_WIDTH;
    }
    let ratio = ((value - control.min) / span).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f32).round() as usize
}

fn highlight<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

fn write_marker<W: WriteColor>(out: &mut W, active: bool) -> io::Result<()> {
    write!(out, "{}", if active { "(*)" } else { "( )" })
}

fn write_swatch<W: WriteColor>(out: &mut W, color: &str) -> io::Result<()> {
    match parse_hex_color(color) {
        Some(rgb) => {
            out.set_color(ColorSpec::new().set_fg(Some(rgb)))?;
            write!(out, "██")?;
            out.reset()
        }
        None => write!(out, "{}", color),
    }
}

/// `#rgb` and `#rrggbb` only; anything else is printed verbatim
fn parse_hex_color(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let mut next = || digits.next().flatten().map(|d| (d * 17) as u8);
            Some(Color::Rgb(next()?, next()?, next()?))
        }
        6 => Some(Color::Rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::control::renderer::ControlRenderer;
    use crate::control::schema::SchemaBuilder;

    fn render(renderer: &ControlRenderer) -> String {
        let mut buffer = Buffer::no_color();
        write_panel(&mut buffer, &PanelView::from_renderer(renderer)).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_writes_panel() {
        let schema = SchemaBuilder::new()
            .slider("speed", "Speed", 5.0, (0.0, 10.0), 0.5)
            .group("Look", None)
            .toggle("glow", "Glow", true)
            .select("mode", "Mode", 1, &["lines", "dots"])
            .color("tint", "Tint", 0, &["#fff", "red"])
            .build();
        let mut renderer = ControlRenderer::detached();
        renderer.generate_controls(&schema);

        let output = render(&renderer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "  Speed  [##########----------] 5");
        assert_eq!(lines[1], "Look");
        assert_eq!(lines[2], "  Glow   On");
        assert_eq!(lines[3], "  Mode   lines | dots");
        assert_eq!(lines[4], "  Tint   (*)██ ( )red ");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#a855f7"), Some(Color::Rgb(168, 85, 247)));
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("rgb(0,0,0)"), None);
    }
}
