//! Process startup, in its own test binary since the global subscriber can
//! only be installed once

use tracing::Level;

#[test]
fn test_init_process_installs_subscriber() {
    assert!(!tracing::enabled!(Level::ERROR));

    invest_utils::init_process();

    assert!(tracing::enabled!(Level::ERROR));
}
