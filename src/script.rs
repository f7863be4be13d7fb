//! A line-oriented touch script, used to drive a [`Session`] without a UI.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! pencil red
//! width 12
//! begin 10 10
//! move 20 10
//! end
//! share
//! ```

use crate::engine::{Color, ParseColorError, Pencil};
use crate::session::{Session, ShareSink};
use glam::{vec2, Vec2};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum ScriptError {
	#[error("unknown command {0:?}")]
	UnknownCommand(String),

	#[error("{command} expects {expected} argument(s)")]
	WrongArgumentCount {
		command: &'static str,
		expected: usize,
	},

	#[error("invalid number {0:?}")]
	InvalidNumber(String),

	#[error("unknown pencil {0:?}")]
	UnknownPencil(String),

	#[error(transparent)]
	InvalidColor(#[from] ParseColorError),

	#[error("line {line}: {source}")]
	AtLine {
		line: usize,
		#[source]
		source: Box<ScriptError>,
	},
}

static_assertions::assert_impl_all!(ScriptError: std::error::Error, Send, Sync);

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	Begin(Vec2),
	Move(Vec2),
	End,
	Cancel,
	Pencil(Pencil),
	Color(Color),
	Width(f32),
	Opacity(f32),
	Reset,
	Share,
}

fn parse_number(word: &str) -> Result<f32, ScriptError> {
	word
		.parse::<f32>()
		.ok()
		.filter(|v| v.is_finite())
		.ok_or_else(|| ScriptError::InvalidNumber(word.to_owned()))
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), ScriptError> {
	if args.len() == expected {
		Ok(())
	} else {
		Err(ScriptError::WrongArgumentCount { command, expected })
	}
}

impl FromStr for Command {
	type Err = ScriptError;

	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let mut words = line.split_whitespace();
		let name = words.next().unwrap_or_default();
		let args: Vec<&str> = words.collect();
		let point = |command| -> Result<Vec2, ScriptError> {
			expect_args(command, &args, 2)?;
			Ok(vec2(parse_number(args[0])?, parse_number(args[1])?))
		};
		let number = |command| -> Result<f32, ScriptError> {
			expect_args(command, &args, 1)?;
			parse_number(args[0])
		};
		Ok(match name.to_ascii_lowercase().as_str() {
			"begin" => Command::Begin(point("begin")?),
			"move" => Command::Move(point("move")?),
			"end" => {
				expect_args("end", &args, 0)?;
				Command::End
			}
			"cancel" => {
				expect_args("cancel", &args, 0)?;
				Command::Cancel
			}
			"pencil" => {
				expect_args("pencil", &args, 1)?;
				Command::Pencil(
					Pencil::from_name(args[0])
						.ok_or_else(|| ScriptError::UnknownPencil(args[0].to_owned()))?,
				)
			}
			// CSS colours may contain spaces, e.g. `rgb(0, 0, 255)`.
			"color" => Command::Color(Color::parse(&args.join(" "))?),
			"width" => Command::Width(number("width")?),
			"opacity" => Command::Opacity(number("opacity")?),
			"reset" => {
				expect_args("reset", &args, 0)?;
				Command::Reset
			}
			"share" => {
				expect_args("share", &args, 0)?;
				Command::Share
			}
			_ => return Err(ScriptError::UnknownCommand(name.to_owned())),
		})
	}
}

/// Parses a whole script, skipping blank lines and lines starting with `#`.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
	source
		.lines()
		.enumerate()
		.map(|(index, line)| (index + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
		.map(|(line, text)| {
			text.parse().map_err(|source| ScriptError::AtLine {
				line,
				source: Box::new(source),
			})
		})
		.collect()
}

impl Command {
	pub fn apply(&self, session: &mut Session, sink: &mut impl ShareSink) {
		match *self {
			Command::Begin(point) => session.on_touch_begin(Some(point)),
			Command::Move(point) => session.on_touch_move(Some(point)),
			Command::End => session.on_touch_end(),
			Command::Cancel => session.on_touch_cancel(),
			Command::Pencil(pencil) => session.select_pencil(pencil),
			Command::Color(color) => session.set_brush(session.brush().with_color(color)),
			Command::Width(width) => session.set_brush(session.brush().with_width(width)),
			Command::Opacity(opacity) => session.set_brush(session.brush().with_opacity(opacity)),
			Command::Reset => session.reset(),
			Command::Share => {
				session.share(sink);
			}
		}
	}
}
