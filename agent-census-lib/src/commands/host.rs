use crate::progress::Progress;
use std::io::Write;
use std::sync::Arc;

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    // where to send normal output (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Where progress lines of a collection run go.
    fn progress(&self) -> Arc<dyn Progress>;
}

/// Test host that captures output and progress in memory
#[cfg(test)]
#[derive(Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub progress: Arc<RecordingProgress>,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Progress for RecordingProgress {
    fn println(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
impl TestHost {
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn progress(&self) -> Arc<dyn Progress> {
        Arc::clone(&self.progress) as Arc<dyn Progress>
    }
}
