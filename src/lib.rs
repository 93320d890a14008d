pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::Config;
pub use frameworks::server::{StartupError, build_state, run, run_with_lookup, serve};
