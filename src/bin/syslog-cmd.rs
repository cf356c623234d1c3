#![deny(unsafe_code)]

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use channel::Channel;
use commands::{Reply, dispatch};

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run(&argv, &mut stdout, &mut stderr)
}

fn run(argv: &[String], stdout: &mut impl Write, stderr: &mut impl Write) -> ExitCode {
    match dispatch(Channel::global(), argv) {
        Ok(Reply::None) => ExitCode::SUCCESS,
        Ok(Reply::IsOpen(open)) => {
            if writeln!(stdout, "{}", i32::from(open)).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(Reply::Pairs(pairs)) => {
            for (flag, value) in pairs {
                if writeln!(stdout, "{flag} {value}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let name = process_name();
            let _ = writeln!(stderr, "{name}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn process_name() -> String {
    env::args()
        .next()
        .as_deref()
        .and_then(|arg0| {
            std::path::Path::new(arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "syslog-cmd".to_owned())
}
