//! Line-oriented driver for the conversion form.
//!
//! Each input line is one user action: editing a field, pressing a preset
//! button, or asking for the current view. The rendered form is written out
//! only when an action actually changed it.

use crate::core::sync::{parse_field, FormState};
use crate::domain::model::{ColorScale, OutputFormat, Preset, Reading, Snapshot, Unit};
use crate::domain::ports::{ConfigProvider, RandomSource};
use crate::utils::error::{CalcError, Result};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
commands:
  f <value>        set Fahrenheit
  c <value>        set Celsius
  k <value>        set Kelvin
  preset <name>    ice | boiling | random | absolute-zero
  show             print the current form
  help             print this message
  quit             leave";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Edit(Reading),
    Preset(Preset),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "preset" => Command::Preset(rest.parse()?),
        other => {
            if let Ok(preset) = other.parse::<Preset>() {
                Command::Preset(preset)
            } else {
                let unit: Unit = other.parse().map_err(|_| CalcError::InvalidCommandError {
                    command: line.to_string(),
                    reason: "unknown command".to_string(),
                })?;
                if rest.is_empty() {
                    return Err(CalcError::InvalidCommandError {
                        command: line.to_string(),
                        reason: format!("missing value for {}", unit),
                    });
                }
                Command::Edit(Reading::new(parse_field(rest), unit))
            }
        }
    };

    Ok(Some(command))
}

pub fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(snapshot.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
    }
}

pub struct Session<R: RandomSource> {
    state: FormState,
    scale: ColorScale,
    format: OutputFormat,
    random_range: (i32, i32),
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C, rng: R) -> Self {
        Self {
            state: FormState::default(),
            scale: config.color_scale(),
            format: config.output_format(),
            random_range: config.random_range(),
            rng,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(&self.scale)
    }

    /// Applies one command and returns the text to print, if any.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        let edit = match command {
            Command::Edit(reading) => reading,
            Command::Preset(preset) => {
                let reading = preset.to_reading(&mut self.rng, self.random_range);
                tracing::debug!(?preset, value = reading.value, unit = ?reading.unit, "preset applied");
                reading
            }
            Command::Show => return render(&self.snapshot(), self.format).map(Some),
            Command::Help => return Ok(Some(HELP.to_string())),
            Command::Quit => return Ok(None),
        };

        let transition = self.state.apply(edit);
        self.state = transition.state;
        if !transition.changed {
            return Ok(None);
        }
        render(&self.snapshot(), self.format).map(Some)
    }

    /// Handles one raw input line. Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e @ CalcError::InvalidCommandError { .. }) => {
                tracing::warn!("⚠️ {}", e);
                writeln!(output, "error: {}", e.user_friendly_message())?;
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        if command == Command::Quit {
            return Ok(false);
        }

        if let Some(text) = self.execute(command)? {
            writeln!(output, "{}", text)?;
        }
        Ok(true)
    }

    /// Reads commands until end of input or `quit`.
    pub fn run<B: BufRead, W: Write>(&mut self, input: B, output: &mut W) -> Result<()> {
        tracing::info!("🌡️ Interactive session started");
        writeln!(output, "{}", render(&self.snapshot(), self.format)?)?;

        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, output)? {
                break;
            }
            output.flush()?;
        }

        tracing::info!("👋 Interactive session finished");
        Ok(())
    }
}
