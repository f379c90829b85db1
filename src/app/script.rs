// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/script.rs
//
// Line-based pointer scripts used to drive the picker without a window.

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

use crate::app::model::FocalGeometry;
use crate::domain::focal::Point;
use crate::ui::Surface;

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `down X Y`: pointer pressed on the marker.
    Down(Point),
    /// `move X Y`: pointer moved while pressed.
    Move(Point),
    /// `up X Y`: pointer released.
    Up(Point),
    /// `preview W H`: request a preview size.
    Preview { width: f64, height: f64 },
    /// `preview off`.
    ClearPreview,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = parts.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("down", [x, y]) => Command::Down(parse_point(x, y)?),
            ("move", [x, y]) => Command::Move(parse_point(x, y)?),
            ("up", [x, y]) => Command::Up(parse_point(x, y)?),
            ("preview", ["off"]) => Command::ClearPreview,
            // Sizes are passed through unchecked; the picker decides validity.
            ("preview", [w, h]) => Command::Preview {
                width: parse_size(w),
                height: parse_size(h),
            },
            ("down" | "move" | "up", _) => bail!("`{verb}` expects two coordinates"),
            ("preview", _) => bail!("`preview` expects `W H` or `off`"),
            _ => bail!("unknown command `{verb}`"),
        };
        Ok(command)
    }
}

fn parse_point(x: &str, y: &str) -> anyhow::Result<Point> {
    let x: f64 = x.parse().with_context(|| format!("invalid x coordinate `{x}`"))?;
    let y: f64 = y.parse().with_context(|| format!("invalid y coordinate `{y}`"))?;
    Ok(Point::new(x, y))
}

fn parse_size(value: &str) -> f64 {
    value.parse().unwrap_or(f64::NAN)
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> anyhow::Result<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            line.parse::<Command>()
                .with_context(|| format!("line {number}: `{line}`"))
        })
        .collect()
}

/// Apply one command to the picker.
pub fn apply<S: Surface>(picker: &mut FocalGeometry<S>, command: Command) {
    match command {
        Command::Down(pointer) => {
            if let Err(e) = picker.begin_drag(pointer) {
                log::warn!("{e}");
            }
        }
        Command::Move(pointer) => {
            picker.update_drag(pointer);
        }
        Command::Up(pointer) => {
            picker.end_drag(pointer);
        }
        Command::Preview { width, height } => picker.set_preview(width, height),
        Command::ClearPreview => picker.clear_preview(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::model::FocalOptions;
    use crate::ui::Scene;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "down 10 20".parse::<Command>().expect("down"),
            Command::Down(Point::new(10.0, 20.0))
        );
        assert_eq!(
            "MOVE -5.5 3".parse::<Command>().expect("move"),
            Command::Move(Point::new(-5.5, 3.0))
        );
        assert_eq!(
            "preview off".parse::<Command>().expect("preview off"),
            Command::ClearPreview
        );
    }

    #[test]
    fn unparsable_preview_sizes_become_nan() {
        let command = "preview abc 9".parse::<Command>().expect("preview");
        let Command::Preview { width, height } = command else {
            panic!("expected preview");
        };
        assert!(width.is_nan());
        assert_eq!(height, 9.0);
    }

    #[test]
    fn rejects_bad_commands() {
        assert!("jump 1 2".parse::<Command>().is_err());
        assert!("down 1".parse::<Command>().is_err());
        assert!("up x 2".parse::<Command>().is_err());
        assert!("preview".parse::<Command>().is_err());
    }

    #[test]
    fn script_skips_comments_and_reports_line_numbers() {
        let commands = parse_script("# setup\npreview 16 9\n\ndown 0 0 # grab\nup 5 5\n")
            .expect("valid script");
        assert_eq!(commands.len(), 3);

        let err = parse_script("down 0 0\n\nwiggle\n").expect_err("invalid script");
        assert!(format!("{err:#}").contains("line 3"));
    }

    #[test]
    fn applies_script_to_picker() {
        let mut picker =
            FocalGeometry::new(Scene::new(800.0, 600.0), FocalOptions::default()).expect("picker");
        let script = parse_script("preview 100 100\ndown 0 0\nmove 50 0\ndown 9 9\nup 100 0\n")
            .expect("script");
        for command in script {
            apply(&mut picker, command);
        }

        assert_eq!(picker.point(), Point::new(500.0, 300.0));
        assert!(!picker.is_dragging());
        assert!(picker.surface().has_preview());
    }
}
