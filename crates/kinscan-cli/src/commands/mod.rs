pub mod analyze;
pub mod ancestors;
pub mod completion;
pub mod find;
pub mod home;
pub mod session;
