
use autolog::{log_to, DecorationFlags as F, Logger, Severity, SinkKind};

#[test]
fn test_append_with_identity_and_pid() {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = Logger::builder()
        .interactive(true)
        .identity("myproc")
        .build();
    let path = dir.child("x.log");
    logger.set_file_path(&path);
    assert_eq!(logger.sink_kind(), SinkKind::File);
    assert_eq!(logger.file_path().as_deref(), Some(path.as_path()));

    log_to!(logger, Severity::Info, "hello {}", 42);
    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("hello 42"));
    assert!(lines[0].contains(&format!("myproc[{}]: ", test_utils::pid())));

    log_to!(logger, Severity::Info, "hello {}", 43);
    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("hello 42"));
    assert!(lines[1].contains("hello 43"));
}

#[test]
fn test_all_severities_at_debug() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "all_severities");
    logger.set_threshold(Severity::Debug);

    for severity in Severity::ALL {
        log_to!(logger, severity, "message with severity {}", severity.name());
    }

    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 8);
    for (line, severity) in lines.iter().zip(Severity::ALL) {
        assert!(
            line.contains(&format!(" {:<5} all_severities[", severity.name())),
            "{line}"
        );
    }
}

#[test]
fn test_suppressed_severities_write_nothing() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "suppressed");

    for threshold in Severity::ALL {
        logger.set_threshold(threshold);
        for severity in Severity::ALL.into_iter().filter(|s| *s > threshold) {
            log_to!(logger, severity, "must not appear");
        }
    }
    assert!(!path.exists());

    logger.set_threshold(Severity::Emergency);
    log_to!(logger, Severity::Emergency, "the only line");
    assert_eq!(test_utils::read_lines(&path).len(), 1);
}

#[test]
fn test_suppressed_arguments_are_not_evaluated() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, _path) = test_utils::file_logger(&dir, "lazy");
    logger.set_threshold(Severity::Error);

    let mut evaluated = false;
    log_to!(logger, Severity::Debug, "{}", {
        evaluated = true;
        "expensive"
    });
    assert!(!evaluated);
}

#[test]
fn test_threshold_round_trip() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "round_trip");
    logger.set_threshold(Severity::Debug);
    log_to!(logger, Severity::Debug, "first");

    logger.set_threshold(Severity::Warning);
    log_to!(logger, Severity::Debug, "suppressed");
    log_to!(logger, Severity::Info, "suppressed");

    logger.set_threshold(Severity::Debug);
    log_to!(logger, Severity::Debug, "second");
    log_to!(logger, Severity::Info, "third");

    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.contains("suppressed")));
}

#[test]
fn test_location_annotation() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "location");

    logger.set_flags(F::APPEND_NEWLINE | F::INCLUDE_FULL_PATH);
    logger.emit("src/server/net.rs", 117, Severity::Error, format_args!("full"));

    logger.set_flags(F::APPEND_NEWLINE | F::INCLUDE_FILE_LINE);
    logger.emit("src/server/net.rs", 118, Severity::Error, format_args!("short"));

    logger.set_flags(F::APPEND_NEWLINE | F::INCLUDE_FILE_LINE | F::INCLUDE_FULL_PATH);
    logger.emit("src/server/net.rs", 119, Severity::Error, format_args!("both"));

    logger.set_flags(F::APPEND_NEWLINE);
    logger.emit("src/server/net.rs", 120, Severity::Error, format_args!("none"));

    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("]: (src/server/net.rs:117) full"), "{}", lines[0]);
    assert!(lines[1].ends_with("]: (net.rs:118) short"), "{}", lines[1]);
    assert!(!lines[1].contains("src/server"));
    assert!(lines[2].ends_with("]: (src/server/net.rs:119) both"), "{}", lines[2]);
    assert!(lines[3].ends_with("]: none"), "{}", lines[3]);
    assert!(!lines[3].contains("net.rs"));
}

#[test]
fn test_macro_captures_location() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "macro_location");
    logger.set_flags(F::APPEND_NEWLINE | F::INCLUDE_FILE_LINE);

    let line = line!() + 1;
    log_to!(logger, Severity::Notice, "where am I");

    let lines = test_utils::read_lines(&path);
    assert!(
        lines[0].ends_with(&format!("(test_file_sink.rs:{line:3}) where am I")),
        "{}",
        lines[0]
    );
}

#[test]
fn test_newline_flag() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "newline");
    logger.set_flags(F::empty());
    log_to!(logger, Severity::Info, "a");
    log_to!(logger, Severity::Info, "b");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\n'));
    assert_eq!(content.matches("newline[").count(), 2);
}

#[test]
fn test_set_identity() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "before");
    logger.set_identity("myproc");
    assert_eq!(logger.identity().as_str(), "myproc");
    log_to!(logger, Severity::Info, "tagged");

    logger.set_identity("a_very_long_process_name_that_exceeds_the_limit");
    log_to!(logger, Severity::Info, "truncated");

    let lines = test_utils::read_lines(&path);
    assert!(lines[0].contains(&format!(" myproc[{}]: ", test_utils::pid())));
    assert!(lines[1].contains(&format!(
        " a_very_long_process_name_that_e[{}]: ",
        test_utils::pid()
    )));
}

#[test]
fn test_clear_file_path_reverts_to_terminal() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, path) = test_utils::file_logger(&dir, "revert");
    log_to!(logger, Severity::Info, "into the file");

    logger.set_file_path("");
    assert_eq!(logger.sink_kind(), SinkKind::Terminal);
    assert!(logger.file_path().is_none());
    log_to!(logger, Severity::Info, "onto the terminal");

    let lines = test_utils::read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("into the file"));
}

#[test]
fn test_clear_file_path_reverts_to_syslog() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("revert_syslog.log");
    let logger = Logger::builder()
        .interactive(false)
        .identity("autolog-revert")
        .build();
    assert_eq!(logger.sink_kind(), SinkKind::Syslog);

    logger.set_file_path(&path);
    assert_eq!(logger.sink_kind(), SinkKind::File);
    log_to!(logger, Severity::Info, "into the file");

    logger.clear_file_path();
    assert_eq!(logger.sink_kind(), SinkKind::Syslog);
    log_to!(logger, Severity::Debug, "not to be seen");
    log_to!(logger, Severity::Info, "into the syslog");

    assert_eq!(test_utils::read_lines(&path).len(), 1);
}

#[test]
fn test_switch_between_files() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (logger, first) = test_utils::file_logger(&dir, "first");
    log_to!(logger, Severity::Info, "one");

    let second = dir.child("second.log");
    logger.set_file_path(&second);
    log_to!(logger, Severity::Info, "two");

    assert_eq!(test_utils::read_lines(&first).len(), 1);
    let lines = test_utils::read_lines(&second);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("two"));
}

#[test]
fn test_unwritable_file_is_silent() {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = Logger::builder().interactive(true).build();
    let path = dir.child("missing_dir").join("x.log");
    logger.set_file_path(&path);
    log_to!(logger, Severity::Error, "dropped");
    assert!(!path.exists());
}
