use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use news_core::{update, Msg, ViewState};
use news_logging::news_debug;

use super::effects::EffectRunner;
use super::ui::commands::{parse_command, UiCommand, HELP};
use super::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Drive the client from stdin until `quit` or end of input.
///
/// All state transitions happen on this thread; stdin is read on a helper
/// thread and fetches complete on the engine thread.
pub fn run_event_loop(state: ViewState, runner: &EffectRunner) -> anyhow::Result<()> {
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let stdout = io::stdout();
    let mut app = App::new(state, runner, stdout.lock());
    app.print(HELP)?;
    app.dispatch(Msg::Refresh)?;

    let mut input_open = true;
    loop {
        app.pump_events()?;

        if !input_open {
            // Let in-flight fetches land before exiting on end of input.
            if !app.state.is_loading() {
                break;
            }
            if let Some(msg) = app.runner.poll_timeout(POLL_INTERVAL) {
                app.dispatch(msg)?;
            }
            continue;
        }

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if !app.handle_line(&line)? {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => input_open = false,
        }
    }
    Ok(())
}

struct App<'a, W: Write> {
    state: ViewState,
    runner: &'a EffectRunner,
    out: W,
}

impl<'a, W: Write> App<'a, W> {
    fn new(state: ViewState, runner: &'a EffectRunner, out: W) -> Self {
        Self { state, runner, out }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match parse_command(line) {
            Ok(None) => {}
            Ok(Some(UiCommand::Quit)) => return Ok(false),
            Ok(Some(UiCommand::Help)) => self.print(HELP)?,
            Ok(Some(UiCommand::Dispatch(msg))) => self.dispatch(msg)?,
            Err(err) => self.print(&err.to_string())?,
        }
        Ok(true)
    }

    fn pump_events(&mut self) -> io::Result<()> {
        while let Some(msg) = self.runner.poll() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() {
            let view = self.state.view();
            news_debug!("render page={} articles={}", view.page, view.articles.len());
            write!(self.out, "{}", render(&view))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
