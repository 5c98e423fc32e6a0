use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

use fskit::DirOps;

/// Appends written bytes into a shared in-memory buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(level: &str, f: F) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(level)).with(layer);

    // Scoped so the test does not install a global subscriber.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).into_owned()
}

#[test]
fn copy_emits_summary_at_info() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let logs = capture("info", || {
        DirOps::default().copy(&src, None).unwrap();
    });
    assert!(logs.contains("Copied directory tree"), "logs were: {logs}");
    assert!(logs.contains("files=1"), "logs were: {logs}");
    assert!(!logs.contains("copied file"), "debug events leaked: {logs}");
}

#[test]
fn per_file_events_at_debug() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let logs = capture("debug", || {
        DirOps::default().copy(&src, Some(&td.path().join("dst"))).unwrap();
    });
    assert!(logs.contains("copied file"), "logs were: {logs}");
    assert!(logs.contains("listed directory"), "logs were: {logs}");
}
