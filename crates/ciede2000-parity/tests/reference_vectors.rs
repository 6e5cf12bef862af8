//! Published CIEDE2000 samples
//!
//! `tests/data/reference_vectors.json` holds sample pairs in `lab(L, a, b)`
//! notation with their ΔE2000 rounded to 11 decimals. Every one of them must
//! be reproduced within the cross-implementation tolerance.

use std::path::Path;

use ciede2000_core::{Lab, delta_e_2000};
use ciede2000_parity::compare::agrees;
use ciede2000_parity::{DatasetWriter, Silent, TestRecord, Verdict, compare};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReferenceVector {
    source: String,
    target: String,
    delta_e: f64,
}

fn load_vectors() -> Vec<(Lab, Lab, f64)> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("reference_vectors.json");
    let text = std::fs::read_to_string(&path).expect("reference vectors missing");
    let vectors: Vec<ReferenceVector> = serde_json::from_str(&text).expect("invalid JSON");

    vectors
        .into_iter()
        .map(|v| {
            let source: Lab = v.source.parse().expect("invalid source notation");
            let target: Lab = v.target.parse().expect("invalid target notation");
            (source, target, v.delta_e)
        })
        .collect()
}

#[test]
fn all_reference_vectors_agree() {
    let vectors = load_vectors();
    assert!(vectors.len() >= 500, "only {} vectors loaded", vectors.len());

    let mut failures = Vec::new();
    for (source, target, expected) in &vectors {
        let actual = delta_e_2000(*source, *target);
        if !agrees(*expected, actual) {
            failures.push(format!("{} vs {}: expected {}, got {}", source, target, expected, actual));
        }
    }

    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn reference_vectors_are_symmetric() {
    for (source, target, expected) in load_vectors() {
        let backward = delta_e_2000(target, source);
        assert!(agrees(expected, backward), "{} vs {} reversed gave {}", target, source, backward);
    }
}

#[test]
fn identical_pairs_are_exactly_zero() {
    let identical: Vec<_> = load_vectors()
        .into_iter()
        .filter(|(source, target, _)| source == target)
        .collect();
    assert!(!identical.is_empty());

    for (source, target, expected) in identical {
        assert_eq!(expected, 0.0);
        assert_eq!(delta_e_2000(source, target), 0.0);
    }
}

#[test]
fn published_samples() {
    let samples = [
        ("lab(63.772, 124.0, -126.8218)", "lab(63.772, 124.0, -126.8218)", 0.0),
        ("lab(25.1, 76.9193, 125.25)", "lab(25.1, 76.96, 125.25)", 0.01492233121),
        ("lab(94.201, -34.0861, -68.724)", "lab(97.78, -34.0861, -68.724)", 2.12199684635),
        ("lab(20.0979, -118.76, -72.5)", "lab(117.3548, 102.9, -25.5)", 144.61949405486),
    ];

    for (source, target, expected) in samples {
        let source: Lab = source.parse().unwrap();
        let target: Lab = target.parse().unwrap();
        let actual = delta_e_2000(source, target);
        assert!(
            (actual - expected).abs() <= 1e-10,
            "{} vs {}: expected {}, got {}",
            source,
            target,
            expected,
            actual
        );
    }
}

#[test]
fn reference_vectors_as_a_dataset() {
    // The same samples written in the file format pass a full comparison
    let vectors = load_vectors();
    let mut writer = DatasetWriter::new(Vec::new());
    for (source, target, expected) in &vectors {
        writer.write(&TestRecord::new(*source, *target, *expected)).unwrap();
    }
    let text = writer.finish().unwrap();

    let comparison = compare(text.as_slice(), &delta_e_2000, &mut Silent).unwrap();
    assert_eq!(comparison.verdict, Verdict::Passed { records: vectors.len() });
    assert!(comparison.stats.has_spread());
}
