//! Main TUI application.
//!
//! Handles terminal setup/teardown, the render loop, key dispatch, and the
//! explicit "Predict Now" trigger. The two providers initialize
//! independently at startup: a failed dataset load only disables the
//! exploration area, a failed model load only disables prediction.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::adapters::{csv_file::CsvDatasetProvider, model_file::JsonModelProvider};
use crate::application::{explore, predict, ExplorationStats, InferenceError};
use crate::domain::{AppConfig, PredictionResult};
use crate::ports::{DatasetProvider, LoadError, ModelProvider};
use crate::tui::styles::ClinicalTheme;
use crate::tui::ui::{
    explore::render_exploration,
    form::{render_form, FormState},
    render_footer,
    results::{render_current_inputs, render_results},
};

use std::time::Duration;

/// Main application state.
pub struct App<M: ModelProvider> {
    config: AppConfig,
    model_provider: M,
    form: FormState,

    /// Outcome of the latest "Predict Now"; absent until first trigger,
    /// overwritten by each new trigger.
    prediction: Option<Result<PredictionResult, InferenceError>>,

    /// Exploration aggregates, computed once at startup from the cached
    /// dataset (or the load failure to display instead).
    exploration: Result<ExplorationStats, LoadError>,

    should_quit: bool,
}

impl App<JsonModelProvider> {
    /// Application with providers at their default locations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_providers(
            JsonModelProvider::from_default_location(),
            CsvDatasetProvider::from_default_location(),
        )
    }
}

impl Default for App<JsonModelProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ModelProvider> App<M> {
    /// Application with injected providers (Composition Root pattern).
    ///
    /// Both providers load here, independently; neither failure is fatal.
    /// The dataset provider is consumed: its table is aggregated once and
    /// only the aggregates are kept.
    #[must_use]
    pub fn with_providers<D: DatasetProvider>(model_provider: M, dataset_provider: D) -> Self {
        let config = AppConfig::default();

        if let Err(e) = model_provider.load() {
            tracing::warn!("Model unavailable, prediction disabled: {e}");
        }

        let exploration = match dataset_provider.load() {
            Ok(table) => Ok(explore(table)),
            Err(e) => {
                tracing::warn!("Dataset unavailable, exploration disabled: {e}");
                Err(e)
            }
        };

        Self {
            form: FormState::new(&config),
            config,
            model_provider,
            prediction: None,
            exploration,
            should_quit: false,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Short poll keeps the loop responsive without spinning.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut ratatui::Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(42), Constraint::Min(0)])
            .split(outer[0]);

        render_form(f, body[0], &self.form);
        self.draw_main_panel(f, body[1]);
        render_footer(f, outer[1]);
    }

    fn draw_main_panel(&self, f: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(9),  // Current inputs
                Constraint::Length(7),  // Results
                Constraint::Min(10),    // Exploration
            ])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(" ", ClinicalTheme::text()),
            Span::styled("Cardioscope", ClinicalTheme::title()),
            Span::styled(" │ ", ClinicalTheme::text_muted()),
            Span::styled("Heart Disease Prediction", ClinicalTheme::text_secondary()),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(ClinicalTheme::border()),
        );
        f.render_widget(header, chunks[0]);

        // The record is rebuilt from widget state on every render pass.
        let record = self.form.collect();
        render_current_inputs(f, chunks[1], &record);
        render_results(f, chunks[2], self.prediction.as_ref());
        render_exploration(f, chunks[3], self.exploration.as_ref());
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::Up => self.form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form.next_field(),
            KeyCode::Right => self.form.increase(),
            KeyCode::Left => self.form.decrease(),
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => self.trigger_prediction(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.form.reset(&self.config),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// "Predict Now": run the pipeline over the current form state and
    /// replace any previous outcome.
    fn trigger_prediction(&mut self) {
        let record = self.form.collect();
        let model = self.model_provider.load().ok();

        let outcome = predict(&record, model, &self.config);
        if let Err(e) = &outcome {
            tracing::warn!("Prediction attempt failed: {e}");
        }

        self.prediction = Some(outcome);
    }
}
