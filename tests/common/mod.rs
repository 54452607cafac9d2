//! Common test utilities

#![allow(dead_code)]

use scaffold::runner::{ExitInfo, Invocation, ProcessRunner};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a templates root holding one template with the given files
pub fn create_templates(template: &str, files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    let template_dir = root.path().join(template);
    fs::create_dir_all(&template_dir).unwrap();

    for (name, content) in files {
        let path = template_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    root
}

/// Count occurrences of `needle` in the file at `path`
pub fn count_in_file(path: &Path, needle: &str) -> usize {
    fs::read_to_string(path).unwrap().matches(needle).count()
}

/// Process runner that records calls and returns a fixed exit
pub struct FakeRunner {
    exit: ExitInfo,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new(exit: ExitInfo) -> Arc<Self> {
        Arc::new(FakeRunner {
            exit,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation, _cwd: &Path) -> io::Result<ExitInfo> {
        self.calls.lock().unwrap().push(invocation.display());
        Ok(self.exit)
    }
}
