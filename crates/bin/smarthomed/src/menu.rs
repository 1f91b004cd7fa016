//! Interactive text menu — the operator's front end to the controller.
//!
//! Reads one choice per line from any [`BufRead`] and writes prompts and
//! results to any [`Write`]. End of input ends the session like `0` does.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use smarthome_app::controller::Controller;
use smarthome_domain::ac_mode::AcMode;
use smarthome_domain::appliance_type::ApplianceType;
use smarthome_domain::command::Command;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::event::Event;

const MAIN_MENU: &str = "
======= SMART HOME CONTROL SYSTEM =======
1. Toggle light
2. Fan controls
3. Set AC mode
4. Display status
5. Turn off all appliances
0. Exit

Enter your choice:";

const FAN_MENU: &str = "Fan Control Options:
1. Increase fan speed
2. Decrease fan speed

Enter option:";

/// A top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ToggleLight,
    FanControls,
    SetAcMode,
    DisplayStatus,
    TurnOffAll,
    Exit,
}

/// Input that names no menu entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::ToggleLight),
            "2" => Ok(Self::FanControls),
            "3" => Ok(Self::SetAcMode),
            "4" => Ok(Self::DisplayStatus),
            "5" => Ok(Self::TurnOffAll),
            "0" => Ok(Self::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

/// One operator session over an input and an output stream.
pub struct Session<'a, R, W> {
    controller: &'a Controller,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(controller: &'a Controller, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    /// Run until the operator exits or input ends.
    ///
    /// Controller errors are printed and the session continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Starting Smart Home Control System")?;
        self.print_status()?;

        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => self.handle(choice)?,
                Err(_) => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting Smart Home Control System")?;
        self.output.flush()
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::ToggleLight => {
                let result = self
                    .controller
                    .execute_action(ApplianceType::Light, Command::Toggle, None);
                self.report(result)
            }
            MenuChoice::FanControls => self.fan_controls(),
            MenuChoice::SetAcMode => self.set_ac_mode(),
            MenuChoice::DisplayStatus => self.print_status(),
            MenuChoice::TurnOffAll => {
                let events = self.controller.turn_off_all_appliances();
                self.report(Ok(events))
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn fan_controls(&mut self) -> io::Result<()> {
        writeln!(self.output, "{FAN_MENU}")?;
        let command = match self.read_line()?.as_deref().map(str::trim) {
            Some("1") => Command::IncreaseSpeed,
            Some("2") => Command::DecreaseSpeed,
            _ => return writeln!(self.output, "Invalid fan control option"),
        };
        let result = self
            .controller
            .execute_action(ApplianceType::Fan, command, None);
        self.report(result)
    }

    fn set_ac_mode(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available AC modes:")?;
        for mode in AcMode::ALL {
            writeln!(self.output, "{mode} = {}", mode.code())?;
        }
        writeln!(self.output, "Enter AC mode (0-4):")?;
        let value = self.read_line()?;
        let result = self.controller.execute_action(
            ApplianceType::Ac,
            Command::SetMode,
            value.as_deref(),
        );
        self.report(result)
    }

    fn print_status(&mut self) -> io::Result<()> {
        writeln!(self.output, "Current appliance status:")?;
        for line in self.controller.display_status() {
            writeln!(self.output, "  {line}")?;
        }
        Ok(())
    }

    fn report(&mut self, result: Result<Vec<Event>, SmartHomeError>) -> io::Result<()> {
        match result {
            Ok(events) if events.is_empty() => writeln!(self.output, "Nothing to do"),
            Ok(events) => {
                for event in events {
                    writeln!(self.output, "{event}")?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
