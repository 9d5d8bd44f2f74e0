pub mod attendance;
pub mod dashboard;
pub mod report;
pub mod site;
pub mod worker;
