use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use news_core::{update, Msg, ViewState};

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.lines.lock().unwrap())
}

// One test per binary: the logger is process-global.
#[test]
fn each_issued_fetch_is_logged_once_with_its_ticket() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let (state, _) = update(ViewState::new(), Msg::Refresh);
    let (_, effects) = update(state, Msg::CategorySelected("sports".into()));
    assert_eq!(effects.len(), 1);

    let info: Vec<String> = take_lines()
        .into_iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, line)| line)
        .collect();
    assert_eq!(
        info,
        vec![
            "issue fetch 1/1: browse category=technology sort=publishedAt page=1".to_string(),
            "issue fetch 2/2: browse category=sports sort=publishedAt page=1".to_string(),
        ]
    );
}
