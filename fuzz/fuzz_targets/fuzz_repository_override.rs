#![no_main]

use libfuzzer_sys::fuzz_target;

use artifact_deploy::domain::value_objects::RepositoryTarget;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        if let Ok(target) = RepositoryTarget::parse_override(spec) {
            assert!(!target.id.is_empty());
            assert!(!target.layout.is_empty());
            assert!(!target.url.is_empty());
            let _ = target.uses_secure_shell();
        }
    }
});
