//! Interactive menu loop for stepping through generations

use crate::config::Settings;
use crate::game_of_life::{save_grid_to_file, Grid};
use crate::utils::{is_valid_integer_string, ColorOutput, GridFormatter};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "Press q to quit, w to save to disk\n\
                    n to iterate multiple times, or any other\n\
                    key to continue to the next generation";

/// A single line of menu input, interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    Save,
    Iterate,
    Step,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        match input {
            "q" => MenuCommand::Quit,
            "w" => MenuCommand::Save,
            "n" => MenuCommand::Iterate,
            _ => MenuCommand::Step,
        }
    }
}

/// Drives a grid from line-oriented input, writing every generation to `output`
pub struct Session<R, W> {
    grid: Grid,
    generation: u64,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(grid: Grid, settings: Settings, input: R, output: W) -> Self {
        Self { grid, generation: 0, settings, input, output }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced since the session started
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_inner(self) -> (Grid, W) {
        (self.grid, self.output)
    }

    /// Run until the user quits or input is exhausted
    pub fn run(&mut self) -> Result<()> {
        self.print_grid()?;

        loop {
            writeln!(self.output, "{}", MENU)?;

            let Some(line) = self.read_line()? else {
                info!(generation = self.generation, "input closed, ending session");
                return Ok(());
            };

            match MenuCommand::parse(&line) {
                MenuCommand::Quit => {
                    info!(generation = self.generation, "session ended by user");
                    return Ok(());
                }
                MenuCommand::Save => self.save()?,
                MenuCommand::Iterate => self.iterate()?,
                MenuCommand::Step => self.step()?,
            }
        }
    }

    /// Read one line with the trailing newline removed; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_grid(&mut self) -> Result<()> {
        let text = GridFormatter::format_generation(&self.grid, self.generation, self.settings.output.show_generation);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        self.grid.advance();
        self.generation += 1;
        debug!(generation = self.generation, living = self.grid.living_count(), "advanced");
        self.print_grid()
    }

    fn iterate(&mut self) -> Result<()> {
        writeln!(self.output, "How many iterations? ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(());
        };

        match self.parse_iterations(&answer) {
            Some(count) => {
                info!(count, "advancing multiple generations");
                for _ in 0..count {
                    self.step()?;
                }
            }
            None => {
                warn!(input = %answer, "rejected iteration count");
                writeln!(
                    self.output,
                    "{}",
                    ColorOutput::error(&format!(
                        "Invalid Input: iteration value must be an integer between 0 and {}",
                        self.settings.simulation.max_iterations
                    ))
                )?;
            }
        }
        Ok(())
    }

    fn parse_iterations(&self, answer: &str) -> Option<usize> {
        if !is_valid_integer_string(answer) {
            return None;
        }
        answer
            .parse::<usize>()
            .ok()
            .filter(|&count| count <= self.settings.simulation.max_iterations)
    }

    fn save(&mut self) -> Result<()> {
        writeln!(self.output, "Enter a file name. ")?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        if name.trim().is_empty() {
            writeln!(self.output, "{}", ColorOutput::error("Error: file name cannot be empty"))?;
            return Ok(());
        }

        let path = self.settings.output.save_directory.join(&name);
        match save_grid_to_file(&self.grid, &path, self.settings.output.pretty_json) {
            Ok(()) => writeln!(self.output, "{}", ColorOutput::success(&format!("Saved to {}", path.display())))?,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                writeln!(self.output, "{}", ColorOutput::error(&format!("Error: {:#}", e)))?;
            }
        }
        Ok(())
    }
}
