use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// An index fell outside the valid positions of a sequence.
    ///
    /// `len` is the current logical length; for insertion the valid range is `0..=len`,
    /// for everything else `0..len`.
    pub fn out_of_range(op: &'static str, index: usize, len: usize) -> Error {
        log::debug!("{op}: index {index} out of range (len {len})");
        Error(ErrorKind::OutOfRange { op, index, len }.into())
    }

    pub fn capacity_exceeded(op: &'static str, capacity: usize) -> Error {
        log::debug!("{op}: capacity {capacity} exhausted");
        Error(ErrorKind::CapacityExceeded { op, capacity }.into())
    }

    pub fn underflow(op: &'static str) -> Error {
        log::debug!("{op}: sequence is empty");
        Error(ErrorKind::Underflow { op }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        let name = name.into();
        let message = message.into();
        log::debug!("invalid argument {name}: {message}");
        Error(ErrorKind::InvalidArgument { name, message }.into())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("{op}: index {index} is out of range for length {len}")]
    OutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{op}: capacity of {capacity} elements exceeded")]
    CapacityExceeded { op: &'static str, capacity: usize },

    #[error("{op}: sequence is empty")]
    Underflow { op: &'static str },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct CapturingLogger(Mutex<Vec<String>>);

    impl log::Log for CapturingLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Debug
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger(Mutex::new(Vec::new()));

    #[test]
    fn test_every_constructor_logs() {
        // A logger can be installed once per process.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);

        let _ = Error::invalid_arg("width", "width > 0");
        let _ = Error::out_of_range("get", 4, 2);
        let _ = Error::capacity_exceeded("append", 8);
        let _ = Error::underflow("remove_last");
        let _ = crate::result::verify_arg(false, "k", "k >= 1");

        let lines = LOGGER.0.lock().unwrap();
        for expected in [
            "invalid argument width: width > 0",
            "get: index 4 out of range (len 2)",
            "append: capacity 8 exhausted",
            "remove_last: sequence is empty",
            "invalid argument k: k >= 1",
        ] {
            assert!(
                lines.iter().any(|line| line == expected),
                "missing log line {expected:?}"
            );
        }
    }

    #[test]
    fn test_messages_carry_context() {
        let e = Error::out_of_range("remove_at", 7, 3);
        assert_eq!(
            e.to_string(),
            "remove_at: index 7 is out of range for length 3"
        );
        assert_eq!(
            e.into_kind(),
            ErrorKind::OutOfRange {
                op: "remove_at",
                index: 7,
                len: 3
            }
        );

        let e = Error::capacity_exceeded("append", 4);
        assert_eq!(e.to_string(), "append: capacity of 4 elements exceeded");

        let e = Error::underflow("remove_last");
        assert!(matches!(e.kind(), ErrorKind::Underflow { op: "remove_last" }));

        let e = Error::invalid_arg("k", "k <= values.len()");
        assert_eq!(e.to_string(), "invalid argument k: k <= values.len()");
    }
}
