use std::fs;

use pretty_assertions::assert_eq;
use reckon::evaluate;
use walkdir::WalkDir;

#[test]
fn demo_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        assert_eq!(evaluate(&script),
                   expected.lines().collect::<Vec<_>>(),
                   "demo {path:?} produced unexpected output");
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
