use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `roundprobe` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_roundprobe<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = roundprobe_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("ROUNDPROBE_TARGET")
        .output()
        .map_err(|err| format!("run roundprobe failed: {}", err))
}

fn roundprobe_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_roundprobe").map_or_else(
        || Err("CARGO_BIN_EXE_roundprobe missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
