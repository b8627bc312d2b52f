pub mod calendar;
pub mod cli;
pub mod error;
pub mod git;
pub mod heat;
pub mod logging;
pub mod model;
pub mod repos;
pub mod scan;
