//! Interactive stdin prompts for whatever the command line left out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use cropwatch_stages::{Crop, CropCatalog};

use crate::cli::CropSelect;
use crate::render;

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Picks a crop from `--crop`/`--choice`, or by showing the menu.
    pub fn crop<'c>(&mut self, select: &CropSelect, catalog: &'c CropCatalog) -> Result<&'c Crop> {
        if let Some(name) = &select.crop {
            return Ok(catalog.by_name(name)?);
        }
        if let Some(choice) = select.choice {
            return Ok(catalog.by_choice(choice)?);
        }

        write!(
            self.output,
            "--- Crop Growth Tracker ---\nSelect a crop:\n{}\nEnter your choice (1-{}): ",
            render::crop_menu(catalog),
            catalog.len()
        )?;
        let answer = self.read_line()?;
        let Ok(choice) = answer.parse::<usize>() else {
            bail!("invalid choice: {answer:?} is not a menu number");
        };
        Ok(catalog.by_choice(choice)?)
    }

    /// Returns `given`, or asks for a sowing date.
    pub fn sowing_date(&mut self, given: Option<&str>) -> Result<String> {
        if let Some(text) = given {
            return Ok(text.to_string());
        }
        write!(self.output, "Enter sowing date (YYYY-MM-DD): ")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if n == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim().to_string())
    }
}
