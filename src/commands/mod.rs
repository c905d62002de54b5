//! Command implementations for the depstage CLI

pub mod completions;
pub mod deps;
pub mod helpers;
pub mod layout;
pub mod run;
pub mod stage;
pub mod version;
