//! Test utilities for skill-triggers integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// A rule file exercising every priority, an invalid priority and an
/// invalid intent pattern
pub const SAMPLE_RULES: &str = r#"{
  "version": "1.0",
  "skills": {
    "security-review": {
      "type": "domain",
      "enforcement": "suggest",
      "priority": "critical",
      "description": "Security review checklist",
      "promptTriggers": {
        "keywords": ["vulnerability", "CVE"]
      }
    },
    "debug-helper": {
      "priority": "high",
      "promptTriggers": {
        "keywords": ["traceback", "stack trace"]
      }
    },
    "git-helper": {
      "priority": "medium",
      "promptTriggers": {
        "intentPatterns": ["how do I (revert|undo) a commit"]
      }
    },
    "docs-writer": {
      "priority": "low",
      "promptTriggers": {
        "keywords": ["readme"],
        "intentPatterns": ["(unclosed", "write (the )?docs"]
      }
    },
    "mystery": {
      "priority": "urgent",
      "promptTriggers": {
        "keywords": ["mystery"]
      }
    }
  }
}"#;

/// Write a rule file into a directory and return its path
pub fn write_rules(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// The banner line framing every report
pub fn banner() -> String {
    "━".repeat(42)
}
