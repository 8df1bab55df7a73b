// Library interface for seoprobe
// This allows integration tests to access the modules

pub mod collectors;
pub mod error;
pub mod intents;
pub mod metrics;
pub mod network;
pub mod options;
pub mod quick;
pub mod report;
pub mod sections;
pub mod site;
pub mod source;
pub mod storage;
pub mod summary;
pub mod utils;
