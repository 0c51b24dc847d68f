use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("roundprobe/", env!("CARGO_PKG_VERSION"));

/// Paths requested every round when none are configured.
pub const DEFAULT_PATHS: [&str; 7] = [
    "/",
    "/js/",
    "/js/atree/img/computer/ico_admin.gif",
    "/js/atree/img/computer/ico_alert.gif",
    "/js/atree/img/computer/ico_computer2.gif",
    "/php/info.php",
    "/upload.html",
];

pub const DEFAULT_ROUNDS: usize = 20;
pub const DEFAULT_STATUS: u16 = 200;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound on a single "wait for the next completion" cycle.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(1);
