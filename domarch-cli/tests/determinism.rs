mod common;

use std::fs;

use tempfile::NamedTempFile;

use crate::common::{fixture, run_domarch_with_threads, sha256_file, similarity};

struct RunArtifacts {
    summary: NamedTempFile,
    domains: NamedTempFile,
    undefined: NamedTempFile,
}

impl RunArtifacts {
    fn labelled(&self) -> [(&'static str, &NamedTempFile); 3] {
        [
            ("summary", &self.summary),
            ("domains", &self.domains),
            ("undefined", &self.undefined),
        ]
    }
}

// Full pipeline run (pattern extraction plus undefined scan) with a pinned
// Rayon worker count.
fn full_run(threads: usize) -> RunArtifacts {
    let summary = NamedTempFile::new().unwrap();
    let domains = NamedTempFile::new().unwrap();
    let undefined = NamedTempFile::new().unwrap();
    run_domarch_with_threads(
        &fixture("proteins.fasta"),
        &fixture("hits.tsv"),
        &fixture("families.tsv"),
        summary.path().to_str().unwrap(),
        &[
            domains.path().to_str().unwrap(),
            "-d",
            "NB-LRR",
            "-u",
            undefined.path().to_str().unwrap(),
            "-q",
        ],
        threads,
    )
    .unwrap();
    RunArtifacts {
        summary,
        domains,
        undefined,
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = full_run(2);
    let second = full_run(2);

    for ((name, a), (_, b)) in first.labelled().into_iter().zip(second.labelled()) {
        assert_eq!(
            sha256_file(a.path()).unwrap(),
            sha256_file(b.path()).unwrap(),
            "artifact '{name}' differs between identical runs"
        );
    }
}

#[test]
fn thread_count_does_not_change_output() {
    let single = full_run(1);
    let parallel = full_run(4);

    for ((name, a), (_, b)) in single.labelled().into_iter().zip(parallel.labelled()) {
        let a_text = fs::read_to_string(a.path()).unwrap();
        let b_text = fs::read_to_string(b.path()).unwrap();
        let ratio = similarity(&a_text, &b_text);
        assert_eq!(
            sha256_file(a.path()).unwrap(),
            sha256_file(b.path()).unwrap(),
            "thread-dependent drift in '{name}' (similarity {ratio}):\n{a_text}\n---\n{b_text}"
        );
    }
}
