//! Runner wired to the real global config store, with a stub browser.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use skaffold_config::GlobalConfig;
use skaffold_survey::{BrowserOpener, GlobalSurveyStore, Runner, SurveyError, SurveyRegistry};

struct CountingBrowser {
    opened: Rc<Cell<usize>>,
    fail: bool,
}

impl BrowserOpener for CountingBrowser {
    fn open(&self, _url: &str) -> io::Result<()> {
        self.opened.set(self.opened.get() + 1);
        if self.fail {
            return Err(io::Error::other("no display"));
        }
        Ok(())
    }
}

fn runner(
    path: &std::path::Path,
    fail: bool,
) -> (Runner<GlobalSurveyStore, CountingBrowser>, Rc<Cell<usize>>) {
    let opened = Rc::new(Cell::new(0));
    let runner = Runner::with_parts(
        path,
        SurveyRegistry::builtin().clone(),
        GlobalSurveyStore,
        CountingBrowser {
            opened: Rc::clone(&opened),
            fail,
        },
    );
    (runner, opened)
}

#[test]
fn open_form_records_taken_in_config_file() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("config.toml");
    let (runner, opened) = runner(&path, false);
    let mut out = Vec::<u8>::new();

    runner.open_form(&mut out, "hats").expect("should succeed");

    assert_eq!(opened.get(), 1);
    let config = GlobalConfig::read_file(&path).expect("should read");
    assert!(config.survey.is_taken("hats"));
    assert!(config.survey.last_taken.is_some());
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.contains("https://forms.gle/BMTbGQXLWSdn7vEs6"));
}

#[test]
fn failed_browser_leaves_config_untouched() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("config.toml");
    let (runner, opened) = runner(&path, true);

    let err = runner
        .open_form(&mut Vec::<u8>::new(), "hats")
        .expect_err("should fail");

    assert!(matches!(err, SurveyError::BrowserOpen(_)));
    assert_eq!(opened.get(), 1);
    assert!(!path.exists());
}

#[test]
fn display_prompt_on_plain_buffer_only_records() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("config.toml");
    let (runner, opened) = runner(&path, false);
    let mut out = Vec::<u8>::new();

    runner.display_prompt(&mut out).expect("should succeed");

    assert!(out.is_empty());
    assert_eq!(opened.get(), 0);
    let config = GlobalConfig::read_file(&path).expect("should read");
    assert!(config.survey.last_prompted.is_some());
    assert!(!config.survey.should_display_prompt(chrono::Utc::now()));
}

#[test]
fn unknown_id_does_not_create_config() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("config.toml");
    let (runner, opened) = runner(&path, false);

    let err = runner
        .open_form(&mut Vec::<u8>::new(), "nope")
        .expect_err("should fail");

    assert!(matches!(err, SurveyError::UnknownId { .. }));
    assert_eq!(opened.get(), 0);
    assert!(!path.exists());
}

