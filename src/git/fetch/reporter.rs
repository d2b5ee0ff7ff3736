use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::formatter::format_bytes_count;

pub struct State {
    last_report: Option<Instant>,
    last_length: usize,
    receive_done: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            last_report: None,
            last_length: 0,
            receive_done: false,
        }
    }
}

pub fn report_fetch(state: &mut State, progress: git2::Progress<'_>) {
    let received = progress.received_objects();
    let total = progress.total_objects();
    let indexed = progress.indexed_deltas();
    let deltas = progress.total_deltas();

    if total == 0 {
        return;
    }

    let receive_finished = received == total;
    let receive_just_finished = receive_finished && !state.receive_done;
    let index_finished = receive_finished && deltas > 0 && indexed == deltas;

    let now = Instant::now();
    let throttled = state
        .last_report
        .is_some_and(|ts| now.duration_since(ts) < Duration::from_millis(100));
    if throttled && !receive_just_finished && !index_finished {
        return;
    }

    let mut line = if state.receive_done {
        if deltas == 0 {
            return;
        }

        let percent = (100 * indexed) / deltas;
        let end = if index_finished { ", done.\n" } else { "\r" };

        format!("Resolving deltas: {percent:3}% ({indexed}/{deltas}){end}")
    } else {
        state.receive_done = receive_finished;

        let percent = (100 * received) / total;
        let bytes = format_bytes_count(progress.received_bytes());
        let end = if receive_finished { ", done.\n" } else { "\r" };

        format!("Receiving objects: {percent:3}% ({received}/{total}), {bytes}{end}")
    };

    // pad with spaces so a shorter line fully overwrites the previous one
    let length = line.len();
    if length < state.last_length {
        line.insert_str(length - 1, &" ".repeat(state.last_length - length + 1));
    }

    eprint!("{line}");
    let _ = io::stderr().flush();

    state.last_report = Some(now);
    state.last_length = length;
}
