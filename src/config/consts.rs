// src/config/consts.rs

// Sources
pub const MASTER_FILE: &str = "data-master.json";
pub const DETAIL_FILE: &str = "data.json";

// Local store (debug log lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Net
pub const NET_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "datausa_catalog/0.3";

// Live acquisition: job name -> loader script, run in this order.
pub const JOB_STATES: &str = "acquire-states";
pub const JOB_COUNTIES: &str = "acquire-counties";
pub const JOB_UNIVERSITIES: &str = "acquire-universities";

pub const DEFAULT_JOBS: &[(&str, &str)] = &[
    (JOB_STATES, "loader-master-states.py"),
    (JOB_COUNTIES, "loader-master-counties.py"),
    (JOB_UNIVERSITIES, "loader-master-universities.py"),
];

#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "python3";

// Display
pub const NOT_AVAILABLE: &str = "N/A";

// Export
pub const DEFAULT_EXPORT_STEM: &str = "catalog";
