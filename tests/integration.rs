#[path = "integration/driver.rs"]
mod driver;
#[path = "integration/worker.rs"]
mod worker;
