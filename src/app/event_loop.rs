use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;
use tracing::warn;

use crate::app::{App, Command, Outcome, USAGE, execute};
use crate::persist;

impl App {
    /// Run the interactive loop until `quit` or end of input.
    ///
    /// Commands are read one per line from `input`; listings, prompts and
    /// error messages go to `output`. Editing errors are reported and the
    /// loop carries on.
    ///
    /// # Errors
    /// Returns an error only if reading `input` or writing `output` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut lines = input.lines();

        writeln!(
            output,
            "linedit - editing {}",
            self.session.buffer.path().display()
        )?;
        writeln!(output, "Type 'help' for commands")?;

        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.report_error(&mut output, err)?;
                    continue;
                }
            };

            match execute(&mut self.session, command) {
                Ok(Outcome::Quit) => {
                    if self.confirm_quit(&mut lines, &mut output)? {
                        writeln!(output, "Goodbye!")?;
                        return Ok(());
                    }
                }
                Ok(outcome) => self.render(&mut output, &outcome)?,
                Err(err) => self.report_error(&mut output, err)?,
            }
        }
        Ok(())
    }

    /// Offer to save unsaved changes. Returns `false` if the loop should continue.
    fn confirm_quit<I, W>(&mut self, lines: &mut I, output: &mut W) -> Result<bool>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        if !self.session.buffer.is_modified() {
            return Ok(true);
        }

        write!(output, "File has unsaved changes. Save before quitting? (y/n): ")?;
        output.flush()?;
        let Some(answer) = lines.next().transpose()? else {
            warn!("input closed at quit prompt, discarding unsaved changes");
            return Ok(true);
        };

        let answer = answer.trim().to_lowercase();
        if answer == "y" || answer == "yes" {
            if let Err(err) = persist::save(&mut self.session.buffer) {
                self.report_error(output, format!("Failed to save: {err}"))?;
                return Ok(false);
            }
        } else {
            warn!(
                path = %self.session.buffer.path().display(),
                "quitting with unsaved changes"
            );
        }
        Ok(true)
    }

    fn render<W: Write>(&self, output: &mut W, outcome: &Outcome) -> Result<()> {
        let buffer = &self.session.buffer;
        match outcome {
            Outcome::Listing => {
                writeln!(output, "\n=== File: {} ===", buffer.path().display())?;
                for (idx, line) in buffer.lines().iter().enumerate() {
                    writeln!(output, "{:4}: {line}", idx + 1)?;
                }
                writeln!(output, "=== Total lines: {} ===", buffer.line_count())?;
            }
            Outcome::Edited | Outcome::Quit => {}
            Outcome::Matches(positions) if positions.is_empty() => {
                writeln!(output, "No matches found")?;
            }
            Outcome::Matches(positions) => {
                let list = positions
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(output, "Found matches at lines: [{list}]")?;
            }
            Outcome::Substituted(count) => writeln!(output, "Replaced {count} line(s)")?,
            Outcome::Copied(count) => writeln!(output, "Copied {count} line(s) to clipboard")?,
            Outcome::Pasted(count) => writeln!(output, "Pasted {count} line(s)")?,
            Outcome::Saved => writeln!(output, "File saved successfully")?,
            Outcome::Help => write!(output, "{USAGE}")?,
        }
        Ok(())
    }

    fn report_error<W: Write>(&self, output: &mut W, message: impl Display) -> Result<()> {
        if self.color {
            writeln!(output, "{} {message}", "ERROR:".red().bold())?;
        } else {
            writeln!(output, "ERROR: {message}")?;
        }
        Ok(())
    }
}
