use std::fs;
use std::path::Path;

use crf_tracker::aggregator::{self, aggregate};
use crf_tracker::config::AggregatorConfig;
use crf_tracker::models::*;
use crf_tracker::TrackerError;
use speculate2::speculate;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("Failed to create fixture directory");
    fs::write(path, content).expect("Failed to write fixture");
}

fn ids(records: &[Record]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.get("id").and_then(|v| v.as_str()).unwrap_or("<none>"))
        .collect()
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("examples");
        fs::create_dir_all(&root).expect("Failed to create examples dir");
    }

    describe "classification" {
        it "puts domain.json into domains regardless of content" {
            write(&root, "personal/domain.json", r#"{"id": "personal", "name": "x"}"#);

            let report = aggregate(&root);
            assert_eq!(ids(&report.collection.domains), vec!["personal"]);
            assert!(report.collection.roles.is_empty());
        }

        it "puts any file with a roles key into domains" {
            write(&root, "work/index.json", r#"{"id": "work", "roles": ["engineer"]}"#);

            let report = aggregate(&root);
            assert_eq!(ids(&report.collection.domains), vec!["work"]);
        }

        it "puts everything else into roles" {
            write(&root, "personal/roles/student.json", r#"{"id": "student"}"#);
            write(&root, "personal/roles/job-seeker.json", r#"{"id": "job-seeker"}"#);

            let report = aggregate(&root);
            assert!(report.collection.domains.is_empty());
            assert_eq!(ids(&report.collection.roles), vec!["job-seeker", "student"]);
        }

        it "places each parseable file in exactly one bucket" {
            write(&root, "a/domain.json", r#"{"id": "a"}"#);
            write(&root, "a/roles/one.json", r#"{"id": "one"}"#);
            write(&root, "a/roles/two.json", r#"{"id": "two", "roles": []}"#);
            write(&root, "b/three.json", r#"{"id": "three"}"#);

            let report = aggregate(&root);
            assert_eq!(report.collection.len(), 4);
            assert_eq!(ids(&report.collection.domains), vec!["a", "two"]);
            assert_eq!(ids(&report.collection.roles), vec!["one", "three"]);
        }
    }

    describe "provenance" {
        it "appends the source path as the last key" {
            write(&root, "personal/domain.json", r#"{"id": "personal", "version": "1.0.0"}"#);

            let report = aggregate(&root);
            let record = &report.collection.domains[0];
            let (last_key, last_value) = record.iter().last().expect("record has keys");

            assert_eq!(last_key, PROVENANCE_FIELD);
            let path = last_value.as_str().expect("provenance is a string");
            assert!(path.ends_with("domain.json"));
            assert!(path.contains("personal"));
        }

        it "keeps the source key order" {
            write(&root, "r.json", r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);

            let report = aggregate(&root);
            let keys: Vec<&str> = report.collection.roles[0].keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["zeta", "alpha", "mid", PROVENANCE_FIELD]);
        }
    }

    describe "bad input" {
        it "skips unparseable files and keeps the rest" {
            write(&root, "good.json", r#"{"id": "good"}"#);
            write(&root, "broken.json", r#"{"id": "#);

            let report = aggregate(&root);
            assert_eq!(ids(&report.collection.roles), vec!["good"]);
            assert_eq!(report.skipped.len(), 1);
            assert!(report.skipped[0].path.ends_with("broken.json"));
            assert!(matches!(report.skipped[0].error, TrackerError::Json { .. }));
        }

        it "rejects non-object content instead of tagging it" {
            write(&root, "list/domain.json", r#"["not", "an", "object"]"#);
            write(&root, "scalar.json", "42");

            let report = aggregate(&root);
            assert!(report.collection.is_empty());
            assert_eq!(report.skipped.len(), 2);
            for skipped in &report.skipped {
                assert!(matches!(skipped.error, TrackerError::NotAnObject { .. }));
            }
        }

        it "ignores non-json and hidden files" {
            write(&root, "notes.md", "# notes");
            write(&root, ".cache/stale.json", r#"{"id": "stale"}"#);
            write(&root, "role.json", r#"{"id": "role"}"#);

            let report = aggregate(&root);
            assert_eq!(ids(&report.collection.roles), vec!["role"]);
        }

        it "treats a missing directory as empty" {
            let report = aggregate(&dir.path().join("absent"));
            assert!(report.collection.is_empty());
            assert!(report.skipped.is_empty());
        }
    }

    describe "run" {
        it "writes a script assigning the collection to the global" {
            write(&root, "personal/domain.json", r#"{"id": "personal"}"#);
            write(&root, "personal/roles/student.json", r#"{"id": "student"}"#);
            let output = dir.path().join("data.js");

            let config = AggregatorConfig {
                examples_dir: root.clone(),
                output: output.clone(),
                ..Default::default()
            };
            let report = aggregator::run(&config).expect("run succeeds");
            assert_eq!(report.collection.domains.len(), 1);
            assert_eq!(report.collection.roles.len(), 1);

            let script = fs::read_to_string(&output).expect("output written");
            let json = script
                .strip_prefix("window.CRF_DATA = ")
                .and_then(|s| s.strip_suffix(';'))
                .expect("script wraps the JSON literal");
            let parsed: Collection = serde_json::from_str(json).expect("valid JSON");
            assert_eq!(parsed, report.collection);
        }

        it "overwrites previous output byte for byte" {
            write(&root, "b/domain.json", r#"{"id": "b", "roles": ["x"]}"#);
            write(&root, "a/roles/x.json", r#"{"id": "x"}"#);
            let output = dir.path().join("data.js");
            fs::write(&output, "stale content that is much longer than anything else").unwrap();

            let config = AggregatorConfig {
                examples_dir: root.clone(),
                output: output.clone(),
                ..Default::default()
            };
            aggregator::run(&config).expect("first run");
            let first = fs::read(&output).unwrap();
            aggregator::run(&config).expect("second run");
            let second = fs::read(&output).unwrap();

            assert_eq!(first, second);
            assert!(!String::from_utf8_lossy(&first).contains("stale"));
        }

        it "fails when the output cannot be written" {
            let config = AggregatorConfig {
                examples_dir: root.clone(),
                output: dir.path().join("missing-dir").join("data.js"),
                ..Default::default()
            };
            let err = aggregator::run(&config).unwrap_err();
            assert!(matches!(err, TrackerError::Io { .. }));
        }
    }
}

#[cfg(unix)]
mod symlinks {
    use super::*;
    use std::os::unix::fs::symlink;

    #[test]
    fn follows_linked_files_and_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("examples");
        let shared = dir.path().join("shared");
        write(&root, "plain.json", r#"{"id": "plain"}"#);
        write(&shared, "engineer.json", r#"{"id": "engineer"}"#);
        fs::create_dir_all(root.join("work")).unwrap();
        symlink(shared.join("engineer.json"), root.join("work/engineer.json")).unwrap();
        symlink(&shared, root.join("linked")).unwrap();

        let report = aggregate(&root);

        assert_eq!(ids(&report.collection.roles), vec!["engineer", "plain", "engineer"]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn link_loops_do_not_hang_or_fail() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("examples");
        write(&root, "nested/role.json", r#"{"id": "role"}"#);
        symlink(&root, root.join("nested/back")).unwrap();

        let report = aggregate(&root);

        assert_eq!(ids(&report.collection.roles), vec!["role"]);
    }
}
