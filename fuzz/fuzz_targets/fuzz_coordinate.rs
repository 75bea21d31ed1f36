#![no_main]

use libfuzzer_sys::fuzz_target;

use artifact_deploy::domain::value_objects::Coordinate;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fuzz coordinate parsing - this should never panic
        if let Ok(coordinate) = text.parse::<Coordinate>() {
            let _ = coordinate.descriptor();
            let _ = coordinate.management_key();
        }
    }
});
