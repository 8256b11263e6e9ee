pub mod registry;
pub mod session;
pub mod settings;
pub mod storage;
pub mod watch;
