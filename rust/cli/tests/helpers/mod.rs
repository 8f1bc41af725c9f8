#![allow(dead_code)]

use std::io::Cursor;

pub const ENV_KEYS: &[&str] = &[
    "EXPEDITIONS_CONFIG",
    "EXPEDITIONS_SEED",
    "EXPEDITIONS_ROUNDS",
    "EXPEDITIONS_VARIANT",
    "EXPEDITIONS_LEGALITY",
    "EXPEDITIONS_AI",
];

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process with `input` as stdin.
pub fn run_cli(args: &[&str], input: &str) -> CliOutput {
    let mut argv = vec!["expeditions"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = expeditions_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

/// Removes every configuration variable; callers must be `#[serial]`.
pub fn clear_env() {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}
