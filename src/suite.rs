use crate::cases::TestCase;
use crate::config::SuiteConfig;
use log::{error, info};

/// Result of one suite entry.
#[derive(Debug)]
pub struct SuiteOutcome {
    pub case: TestCase,
    pub file_size: u64,
    pub passed: bool,
    /// Failure reasons or the case error, when not passed
    pub detail: Option<String>,
}

/// Run every configured case in order. A failing case does not stop the run;
/// the caller decides what to do with the collected outcomes.
pub fn run(config: &SuiteConfig) -> Vec<SuiteOutcome> {
    config
        .cases
        .iter()
        .map(|spec| {
            let params = spec.params(config);
            match spec.case.run(&params) {
                Ok(outcome) => {
                    let passed = outcome.passed();
                    if passed {
                        info!("case {} passed", spec.case.name());
                    } else {
                        error!(
                            "case {} failed: {}",
                            spec.case.name(),
                            outcome.detail().unwrap_or_default()
                        );
                    }
                    SuiteOutcome {
                        case: spec.case,
                        file_size: params.file_size,
                        passed,
                        detail: outcome.detail(),
                    }
                }
                Err(e) => {
                    error!("case {} errored: {}", spec.case.name(), e);
                    SuiteOutcome {
                        case: spec.case,
                        file_size: params.file_size,
                        passed: false,
                        detail: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaseSpec;
    use crate::tests::{init, mirror_roots};
    use bytesize::ByteSize;

    fn spec(case: TestCase, file_size: u64, write_length: u64) -> CaseSpec {
        CaseSpec {
            case,
            file_size: ByteSize(file_size),
            write_length: ByteSize(write_length),
        }
    }

    #[test]
    fn test_suite_write_then_read() {
        init();
        let (local_root, remote_root) = mirror_roots();
        let config = SuiteConfig {
            local_path: local_root.path().to_path_buf(),
            remote_path: remote_root.path().to_path_buf(),
            cases: vec![
                spec(TestCase::CreateSparse, 65536, 4096),
                spec(TestCase::WriteData, 4096, 512),
                spec(TestCase::ReadData, 4096, 512),
            ],
        };

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.passed), "{:?}", outcomes);
    }

    #[test]
    fn test_suite_reports_failure_and_continues() {
        init();
        let (local_root, remote_root) = mirror_roots();
        let config = SuiteConfig {
            local_path: local_root.path().to_path_buf(),
            remote_path: remote_root.path().to_path_buf(),
            cases: vec![
                // read before anything was written: the files don't exist
                spec(TestCase::ReadData, 4096, 512),
                spec(TestCase::WriteData, 4096, 512),
                spec(TestCase::ReadData, 4096, 512),
            ],
        };

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].passed);
        assert!(outcomes[0].detail.is_some());
        assert!(outcomes[1].passed);
        assert!(outcomes[2].passed);
    }

    #[test]
    fn test_suite_invalid_params() {
        init();
        let (local_root, remote_root) = mirror_roots();
        let config = SuiteConfig {
            local_path: local_root.path().to_path_buf(),
            remote_path: remote_root.path().to_path_buf(),
            // write_length larger than the file
            cases: vec![spec(TestCase::CreateSparse, 512, 4096)],
        };

        let outcomes = run(&config);
        assert!(!outcomes[0].passed);
    }
}
