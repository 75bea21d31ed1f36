#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use artifact_deploy::domain::ports::DescriptorStore;
use artifact_deploy::domain::services::{merge_inheritance, prepare_for_publication};
use artifact_deploy::infrastructure::TomlDescriptorStore;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let store = TomlDescriptorStore::new();
        // Parsing, self-merging and rendering should never panic
        if let Ok(document) = store.parse(content, Path::new("fuzz.pom.toml")) {
            let merged = merge_inheritance(&document, &document);
            let published = prepare_for_publication(merged, &document);
            let _ = store.render(&published);
        }
    }
});
