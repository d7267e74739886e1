pub mod init;
pub mod report;
pub mod shell;

pub use init::init_config;
pub use report::{run_report, ReportConfig};
pub use shell::run_shell;
