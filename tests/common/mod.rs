use assert_cmd::Command;
use std::path::Path;

pub fn motto_cmd() -> Command {
    let mut cmd = Command::cargo_bin("motto").unwrap();
    cmd.env_remove("MOTTO_HOME");
    cmd.env_remove("MOTTO_SESSION");
    cmd
}

/// Command scoped to a store directory, with the session cache isolated
/// inside that directory so tests never share session state.
pub fn motto_cmd_in(dir: &Path) -> Command {
    let mut cmd = motto_cmd();
    cmd.current_dir(dir);
    cmd.env("TMPDIR", dir);
    cmd.env("MOTTO_SESSION", "test");
    cmd
}
