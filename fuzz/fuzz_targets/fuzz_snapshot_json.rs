#![no_main]

use libfuzzer_sys::fuzz_target;
use taxon::Snapshot;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = Snapshot::from_json(content) else {
        return;
    };
    // A validated taxonomy captures back to a snapshot that validates again
    if let Ok(taxonomy) = snapshot.into_taxonomy() {
        let again = Snapshot::capture(&taxonomy)
            .into_taxonomy()
            .expect("captured snapshot must validate");
        assert_eq!(again.categories.len(), taxonomy.categories.len());
    }
});
