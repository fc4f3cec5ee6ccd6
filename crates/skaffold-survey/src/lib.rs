//! # skaffold-survey
//!
//! Survey registry and prompt runner for Skaffold.
//!
//! - [`SurveyRegistry`]: the static table of known surveys with lookup,
//!   activity and relevance checks.
//! - [`Runner`]: shows the default survey prompt and opens a survey form,
//!   recording "prompted" / "taken" markers through a [`SurveyStore`].
//!
//! Collaborators (config store, browser, output sink) sit behind the traits
//! in [`runner`] so the ordering of side effects can be tested without a
//! terminal or a browser.

pub mod definition;
pub mod error;
pub mod registry;
pub mod runner;

pub use definition::{HATS_SURVEY, RelevanceFn, Survey};
pub use error::SurveyError;
pub use registry::SurveyRegistry;
pub use runner::{
    BrowserOpener, GlobalSurveyStore, OutputSink, Runner, SurveyStore, SystemBrowser, form_text,
};
