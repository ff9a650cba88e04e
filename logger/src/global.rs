use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, MutexGuard, PoisonError},
};

use lazy_static::lazy_static;

use crate::{printer::LevelPrinter, record::LogRecord, severity::Severity};

pub type BoxedSink = Box<dyn Write + Send>;

lazy_static! {
    static ref PRINTER: Mutex<LevelPrinter<BoxedSink>> =
        Mutex::new(LevelPrinter::new(Box::new(io::stdout()) as BoxedSink));
}

// A panic while holding the lock leaves the printer itself intact.
fn printer() -> MutexGuard<'static, LevelPrinter<BoxedSink>> {
    PRINTER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lets debug and info lines through on the process wide printer.
pub fn set_verbose(verbose: bool) {
    printer().config_mut().verbose = verbose;
}

pub fn set_color(color: bool) {
    printer().config_mut().color = color;
}

/// Redirects the process wide printer, returning the previous sink.
pub fn set_output(sink: BoxedSink) -> BoxedSink {
    printer().set_output(sink)
}

/// The lock is released while the message is formatted, so a `Display`
/// impl may log through the same printer.
pub fn emit(severity: Severity, args: fmt::Arguments<'_>) {
    let config = *printer().config();
    if !config.enabled(severity) {
        return;
    }

    let line = LogRecord::new(severity, args).render(config.color);
    printer().write_line(severity, &line);
}

#[cfg(test)]
mod tests {
    use std::{
        fmt::Display,
        sync::{mpsc, Arc},
        thread,
        time::Duration,
    };

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn take(&self) -> String {
            let bytes = std::mem::take(&mut *self.0.lock().unwrap());
            String::from_utf8(bytes).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Chatty;

    impl Display for Chatty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            crate::warn!("nested");
            write!(f, "outer")
        }
    }

    // Everything touching the shared printer lives in one test.
    #[test]
    fn process_wide_printer() {
        let buffer = SharedBuffer::default();
        let previous = set_output(Box::new(buffer.clone()));
        set_color(false);

        set_verbose(false);
        crate::debug!("hidden {}", 1);
        crate::info!("hidden too");
        assert_eq!(buffer.take(), "");

        crate::error!("boom {}", 2);
        let text = buffer.take();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("[ERROR] boom 2\n"), "{text:?}");

        set_verbose(true);
        crate::info!("value={}", 42);
        crate::debug!("shown");
        let text = buffer.take();
        assert!(text.contains("[ INFO] value=42\n"));
        assert!(text.contains("[DEBUG] shown\n"));

        set_color(true);
        crate::warn!("careful");
        assert!(buffer.take().contains("[\x1b[33m WARN\x1b[0m] careful\n"));

        set_color(false);
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            crate::warn!("{}", Chatty);
            let _ = done_tx.send(());
        });
        assert!(
            done_rx.recv_timeout(Duration::from_secs(3)).is_ok(),
            "logging from inside a Display impl must not block"
        );
        let text = buffer.take();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "{text:?}");
        assert!(lines[0].ends_with("[ WARN] nested"));
        assert!(lines[1].ends_with("[ WARN] outer"));

        set_verbose(false);
        set_color(crate::config::DEFAULT_COLOR);
        set_output(previous);
    }
}
