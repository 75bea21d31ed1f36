#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing - this should never panic
        if let Ok(config) = toml::from_str::<artifact_deploy::Config>(content) {
            let _ = config.deploy_options();
            let _ = config.remote_repositories();
        }
    }
});
