pub mod config;
pub mod survey;

pub use config::{ConfigCommands, ConfigSetArgs};
pub use survey::{SurveyArgs, SurveyCommands, SurveyListArgs};
