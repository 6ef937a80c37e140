pub mod appointment;
pub mod audit;
pub mod backup;
pub mod dispatch;
pub mod menu;
pub mod patient;
pub mod report;
pub mod rollback;
pub mod shared;
