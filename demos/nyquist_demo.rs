//! Interactive terminal view of sampling and sinc reconstruction.
//!
//! LEFT/RIGHT change the signal frequency, DOWN/UP the sampling frequency.
//! TAB switches between the sampling and reconstruction views, C toggles the
//! individual sinc components, SPACE pauses the cursor, R rewinds it.
//! Press Q or ESC to quit.
//!
//! Pass a TOML file as the first argument to override the defaults. Logs go
//! to `nyquist-demo.log` in the temp directory (`RUST_LOG` sets the level).

mod common;

use anyhow::Result;
use common::{KeyAction, is_quit_key, run_animated_example};
use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    event::{KeyCode, KeyEvent},
    terminal::{self, Clear, ClearType},
};
use nyquist::{AnimationClock, Curve, DemoConfig, Frame, Parameters, SignalModel, Viewport};
use std::io::{Write, stdout};
use tracing_subscriber::EnvFilter;

/// Rows reserved below the plot for status text
const STATUS_ROWS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Sampling,
    Reconstruction,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Sampling => View::Reconstruction,
            View::Reconstruction => View::Sampling,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            View::Sampling => "Sampling",
            View::Reconstruction => "Reconstruction",
        }
    }
}

struct DemoState {
    config: DemoConfig,
    model: SignalModel,
    params: Parameters,
    clock: AnimationClock,
    view: View,
    paused: bool,
    frame: Frame,
}

impl DemoState {
    fn new(config: DemoConfig) -> Result<Self> {
        let model = config.model()?;
        let params = config.initial_parameters();
        let clock = AnimationClock::new(config.tick.increment, config.window)?;
        let frame = model.frame(&params, clock.time())?;
        Ok(Self {
            config,
            model,
            params,
            clock,
            view: View::Sampling,
            paused: false,
            frame,
        })
    }

    /// Applies new parameters and recomputes the frame.
    fn set_params(&mut self, params: Parameters) -> Result<()> {
        let was_aliasing = self.frame.verdict.is_aliasing;
        self.frame = self.model.frame(&params, self.clock.time())?;
        self.params = params;
        if self.frame.verdict.is_aliasing != was_aliasing {
            tracing::info!(
                signal_freq = params.signal_freq,
                sampling_freq = params.sampling_freq,
                "{}",
                self.frame.verdict
            );
        }
        Ok(())
    }

    fn nudge_signal(&mut self, delta: i32) -> Result<()> {
        let params = Parameters {
            signal_freq: self
                .config
                .signal_range
                .nudge(self.params.signal_freq, delta),
            ..self.params
        };
        self.set_params(params)
    }

    fn nudge_sampling(&mut self, delta: i32) -> Result<()> {
        let params = Parameters {
            sampling_freq: self
                .config
                .sampling_range
                .nudge(self.params.sampling_freq, delta),
            ..self.params
        };
        self.set_params(params)
    }

    fn toggle_components(&mut self) -> Result<()> {
        let params = Parameters {
            show_components: !self.params.show_components,
            ..self.params
        };
        self.set_params(params)
    }

    fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.frame.time = self.clock.tick();
    }
}

/// A character grid the plot is rasterised into.
struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn put(&mut self, x: f64, y: f64, ch: char) {
        let (col, row) = (x.round(), y.round());
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = ch;
        }
    }

    fn plot_curve(&mut self, curve: &Curve, viewport: &Viewport, ch: char) {
        for point in curve {
            let (x, y) = viewport.to_screen(*point);
            self.put(x, y, ch);
        }
    }

    fn cursor(&mut self, x: f64) {
        let col = x.round();
        if col < 0.0 || col as usize >= self.width {
            return;
        }
        let col = col as usize;
        for row in 0..self.height {
            let cell = &mut self.cells[row * self.width + col];
            if *cell == ' ' {
                *cell = '|';
            }
        }
    }

    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| row.iter().collect())
    }
}

fn draw(state: &DemoState) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let width = usize::from(cols.max(20));
    let height = usize::from(rows.saturating_sub(STATUS_ROWS).max(5));
    let viewport = Viewport::fit(
        state.model.window(),
        width as f64 - 1.0,
        height as f64 - 1.0,
        0.0,
    );

    let frame = &state.frame;
    let mut canvas = Canvas::new(width, height);
    if state.view == View::Reconstruction {
        if let Some(components) = &frame.components {
            for component in components {
                canvas.plot_curve(component, &viewport, ':');
            }
        }
        canvas.plot_curve(&frame.continuous, &viewport, '.');
        canvas.plot_curve(&frame.reconstruction, &viewport, '*');
    } else {
        canvas.plot_curve(&frame.continuous, &viewport, '~');
    }
    let marker = if frame.verdict.is_aliasing { 'x' } else { 'o' };
    for sample in &frame.samples {
        let (x, y) = viewport.to_screen(sample.point());
        canvas.put(x, y, marker);
    }
    canvas.cursor(viewport.cursor_x(frame.time));

    let mut out = stdout();
    out.queue(Clear(ClearType::All))?;
    for (row, line) in canvas.rows().enumerate() {
        out.queue(MoveTo(0, row as u16))?;
        write!(out, "{}", line)?;
    }

    let verdict = &frame.verdict;
    let mut status = vec![
        format!(
            "[{}]  t = {:.2} s{}",
            state.view.name(),
            frame.time,
            if state.paused { "  (paused)" } else { "" }
        ),
        format!("Signal Frequency: {:.1} Hz", state.params.signal_freq),
        format!("Sampling Frequency: {:.1} Hz", state.params.sampling_freq),
        format!(
            "Nyquist Frequency: {:.1} Hz   Samples per cycle: {:.1}",
            verdict.nyquist, verdict.samples_per_cycle
        ),
        verdict.to_string(),
    ];
    if verdict.is_aliasing {
        status[2].push_str(&format!(
            "  (Aliasing detected! appears as {:.1} Hz)",
            verdict.alias_frequency()
        ));
    }
    status.push(format!(
        "Components: {}   LEFT/RIGHT signal  DOWN/UP sampling  TAB view  C components  SPACE pause  R rewind  Q quit",
        if state.params.show_components { "on" } else { "off" }
    ));
    for (i, line) in status.iter().enumerate() {
        out.queue(MoveTo(0, (height + 1 + i) as u16))?;
        let visible: String = line.chars().take(width).collect();
        write!(out, "{}", visible)?;
    }
    out.flush()?;
    Ok(())
}

fn handle_key(state: &mut DemoState, key_event: &KeyEvent) -> Result<KeyAction> {
    match key_event.code {
        KeyCode::Right => state.nudge_signal(1)?,
        KeyCode::Left => state.nudge_signal(-1)?,
        KeyCode::Up => state.nudge_sampling(1)?,
        KeyCode::Down => state.nudge_sampling(-1)?,
        KeyCode::Char('c') | KeyCode::Char('C') => state.toggle_components()?,
        KeyCode::Tab => state.view = state.view.next(),
        KeyCode::Char(' ') => state.paused = !state.paused,
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.clock.reset();
            state.frame.time = state.clock.time();
        }
        code if is_quit_key(code) => return Ok(KeyAction::Exit),
        _ => {}
    }
    Ok(KeyAction::Continue)
}

fn main() -> Result<()> {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), "nyquist-demo.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };
    tracing::info!(?config, "starting demo");

    let tick_interval = config.tick.interval();
    let state = DemoState::new(config)?;
    run_animated_example(state, tick_interval, DemoState::tick, draw, handle_key)
}
