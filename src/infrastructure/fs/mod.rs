//! Filesystem locations

mod home;

pub use home::{default_local_cache, home_dir, ssh_dir, user_config_path, TEST_HOME_VAR};
