#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Artifact parsing must reject bad input with an error, never a panic
        if let Ok(set) = apexdeploy::ArtifactSet::from_json_str(content) {
            let _ = set.entries().filter_map(apexdeploy::CodeEntry::complete).count();
            let _ = set.metadata_or_empty();
        }
    }
});
