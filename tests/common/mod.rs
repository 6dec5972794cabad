use assert_cmd::Command;

pub fn tagline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagline").unwrap();
    cmd.env_remove("TAGLINE_ROOT");
    cmd
}
