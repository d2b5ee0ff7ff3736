mod formatter;
mod reporter;

use std::cell::RefCell;
use std::io::{self, Write};

use git2::{ErrorClass, Repository};

use crate::error::Error;
use reporter::{report_fetch, State};

pub fn fetch_remote(repo: &Repository, remote_name: &str) -> Result<(), Error> {
    let mut remote = repo.find_remote(remote_name)?;

    println!("fetching remote {}", remote_name);

    let state = RefCell::new(State::new());

    let mut callbacks = git2::RemoteCallbacks::new();
    callbacks.transfer_progress(|stats| {
        let mut state = state.borrow_mut();
        report_fetch(&mut state, stats.to_owned());
        true
    });
    callbacks.sideband_progress(|text| {
        if let Ok(text) = std::str::from_utf8(text) {
            eprint!("remote: {text}");
            let _ = io::stderr().flush();
        }
        true
    });

    let mut options = git2::FetchOptions::new();
    options.remote_callbacks(callbacks);

    match remote.fetch::<&str>(&[], Some(&mut options), None) {
        // errors of class Callback originate in the progress side-channel,
        // not in the transfer itself
        Err(err) if err.class() == ErrorClass::Callback => Ok(()),
        result => Ok(result?),
    }
}
