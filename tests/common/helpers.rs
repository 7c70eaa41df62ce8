use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;
use linebar::{ProgressBar, ProgressBarBuilder};

// Common test constants
pub const TEST_MAX_SIZE: u64 = 200;
pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';

// === Output Capture Helpers ===

/// An in-memory writer whose contents outlive the bar that writes into it.
///
/// Clones share the same buffer, so output written from `Drop` can still be
/// inspected after the bar is gone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("Output should be UTF-8")
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Forget everything written so far.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

/// Creates an enabled bar writing into a fresh shared buffer
pub fn create_captured_bar(max_size: u64) -> (ProgressBar<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = ProgressBarBuilder::new()
        .max_size(max_size)
        .build_with_writer(buffer.clone());
    (bar, buffer)
}

/// Creates a disabled bar writing into a fresh shared buffer
pub fn create_hidden_bar(max_size: u64) -> (ProgressBar<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = ProgressBarBuilder::hidden()
        .max_size(max_size)
        .build_with_writer(buffer.clone());
    (bar, buffer)
}

/// Number of renders in the output (each ends in a carriage return)
pub fn count_renders(output: &str) -> usize {
    output.bytes().filter(|b| *b == CARRIAGE_RETURN).count()
}

/// The percentage labels of all renders in the output, in order
pub fn rendered_percents(output: &str) -> Vec<u64> {
    output
        .split('\r')
        .filter_map(|line| line.trim_start_matches('\n').split("] ").nth(1))
        .map(|tail| {
            tail.trim_end_matches("% ")
                .trim()
                .parse::<u64>()
                .expect("Percentage should be numeric")
        })
        .collect()
}

// === File Helpers ===

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

// === Assertion Helpers ===

/// Asserts that nothing at all was written
pub fn assert_no_output(buffer: &SharedBuffer) {
    assert!(
        buffer.is_empty(),
        "Expected no output, got {:?}",
        buffer.contents()
    );
}

/// Asserts that the output ends with a finished 100% bar and a line feed
pub fn assert_finished_output(output: &str) {
    let expected = format!("[{}] 100% \r\n", "=".repeat(70));
    assert!(
        output.ends_with(&expected),
        "Output should end with a finished bar: {:?}",
        output
    );
}
