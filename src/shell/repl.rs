//! Line-oriented terminal front end for the calculator engine.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::error_latch::ErrorLatch;
use super::tokenize::{Input, parse_line};
use crate::calculator::{Calculator, CalculatorView, Command, ScientificFunction};
use crate::config::Config;

/// Width the display lines are right-aligned to.
const DISPLAY_WIDTH: usize = 28;

/// How views are written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per view.
    Json,
}

/// The terminal shell: forwards input to the engine and renders its views.
pub struct Shell<W: Write> {
    calculator: Calculator,
    latch: ErrorLatch,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(config: &Config, format: OutputFormat, out: W) -> Self {
        let mut calculator = Calculator::with_options(config.angle_mode, config.history_capacity);
        calculator.set_scientific_mode(config.scientific_mode);

        Self {
            calculator,
            latch: ErrorLatch::new(config.error_display()),
            format,
            out,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn latch(&self) -> &ErrorLatch {
        &self.latch
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process one line of input received at `now`.
    ///
    /// Commands run in order; the first failing command stops the rest of
    /// the line so the error stays visible. The resulting view is rendered
    /// once at the end.
    pub fn handle_line(&mut self, line: &str, now: Instant) -> Result<ControlFlow<()>> {
        let inputs = parse_line(line);
        if inputs.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        let mut view = None;
        for input in inputs {
            match input {
                Input::Engine(command) => {
                    // New input always wins over a pending auto-clear.
                    self.latch.disarm();
                    let next = self.calculator.dispatch(command);
                    let failed = next.is_error();
                    view = Some(next);
                    if failed {
                        self.latch.arm(now);
                        break;
                    }
                }
                Input::ShowHistory => self.write_history()?,
                Input::Help => self.write_help()?,
                Input::Quit => return Ok(ControlFlow::Break(())),
                Input::Unknown(token) => {
                    warn!(%token, "unknown input");
                    writeln!(self.out, "unknown input: {token}")?;
                }
            }
        }

        if let Some(view) = view {
            self.render(&view)?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Clear the calculator if a displayed error has outlived its delay.
    pub fn expire_error(&mut self, now: Instant) -> Result<bool> {
        if !self.latch.take_expired(now) {
            return Ok(false);
        }

        debug!("error display expired, clearing");
        let view = self.calculator.dispatch(Command::Clear);
        self.render(&view)?;
        Ok(true)
    }

    /// Run a single line non-interactively and render the result.
    ///
    /// Fails if the final state is an error.
    pub fn eval(&mut self, line: &str) -> Result<()> {
        self.handle_line(line, Instant::now())?;
        let view = self.calculator.view();
        if view.is_error() {
            anyhow::bail!("calculation failed");
        }
        Ok(())
    }

    /// Interactive loop over lines arriving on `lines`.
    ///
    /// Waits for either the next line or the pending error deadline,
    /// whichever comes first. Ends when the sender hangs up or on `quit`.
    pub async fn run(mut self, lines: flume::Receiver<String>) -> Result<()> {
        let view = self.calculator.view();
        self.render(&view)?;

        loop {
            let deadline = self.latch.deadline();
            tokio::select! {
                line = lines.recv_async() => {
                    let Ok(line) = line else {
                        debug!("input closed");
                        break;
                    };
                    if self.handle_line(&line, Instant::now())?.is_break() {
                        break;
                    }
                }
                _ = sleep_until(deadline) => {
                    self.expire_error(Instant::now())?;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, view: &CalculatorView) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string(view).context("Failed to serialize view")?;
                writeln!(self.out, "{json}")?;
            }
            OutputFormat::Text => {
                writeln!(self.out, "{}", render_text(view))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_history(&mut self) -> Result<()> {
        let history = self.calculator.state().history.to_vec();
        if history.is_empty() {
            writeln!(self.out, "No calculations yet")?;
        }
        for (index, entry) in history.iter().enumerate() {
            writeln!(self.out, "#{index:<3} {entry}")?;
        }
        Ok(())
    }

    fn write_help(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "digits 0-9 and .   operators + - * / ^   = to evaluate\n\
             c clear   ce clear entry   back backspace   neg toggle sign\n\
             mc mr m+ m- ms memory   history   #N recall entry N   hc clear history\n\
             deg rad set angle mode   angle toggle it   mode toggle scientific keypad   quit"
        )?;

        if self.calculator.state().scientific_mode {
            let names: Vec<&str> = ScientificFunction::ALL
                .iter()
                .map(|func| func.name())
                .collect();
            writeln!(self.out, "functions: {}", names.join(" "))?;
        }
        Ok(())
    }
}

/// Two right-aligned lines: secondary display, then primary with indicators.
pub fn render_text(view: &CalculatorView) -> String {
    let mut indicators = vec![view.angle_mode.to_string()];
    if view.memory_active {
        indicators.push("M".to_string());
    }
    if !view.scientific_mode {
        indicators.push("basic".to_string());
    }

    format!(
        "{:>width$}\n{:>width$}  [{}]",
        view.secondary,
        view.primary,
        indicators.join(" "),
        width = DISPLAY_WIDTH
    )
}

/// Forward stdin lines over a channel from a blocking reader thread.
pub fn spawn_stdin_reader() -> flume::Receiver<String> {
    let (tx, rx) = flume::unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
