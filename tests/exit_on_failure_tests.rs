//! Process-level behavior of `new_logger_or_exit`
//!
//! The failing call ends the process, so the test re-runs this binary on
//! itself with `EXIT_CHILD_ENV` set and inspects the child's exit status.

use rust_logger_fanout::core::config::{with_secondary_sink, with_set_default};
use rust_logger_fanout::new_logger_or_exit;
use std::process::Command;

const EXIT_CHILD_ENV: &str = "RUST_LOGGER_FANOUT_EXIT_CHILD";

#[test]
fn test_unreachable_secondary_sink_exits_with_status_one() {
    if std::env::var_os(EXIT_CHILD_ENV).is_some() {
        let _logger = new_logger_or_exit([
            with_secondary_sink(true, "no-port-here"),
            with_set_default(false),
        ]);
        // Reaching this point means the process kept running; the parent sees status 0.
        return;
    }

    let output = Command::new(std::env::current_exe().expect("test binary path"))
        .args([
            "--exact",
            "test_unreachable_secondary_sink_exits_with_status_one",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(EXIT_CHILD_ENV, "1")
        .output()
        .expect("re-run test binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "child stderr: {}", stderr);
    assert!(stderr.contains("failed to connect to secondary sink"));
    assert!(stderr.contains("no-port-here"));
}

#[test]
fn test_reachable_secondary_sink_returns_logger() {
    let collector = std::net::UdpSocket::bind("127.0.0.1:0").expect("bind collector");
    let address = collector.local_addr().expect("collector address").to_string();

    let logger = new_logger_or_exit([with_secondary_sink(true, address), with_set_default(false)]);

    assert_eq!(logger.appender().name(), "fanout");
}
