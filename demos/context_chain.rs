//! Building and printing a chain of context.
//!
//! This demo shows:
//! 1. Turning a failed system call into an `IoError`
//! 2. Converting it into a `Report` with `?`
//! 3. Adding context at every layer it travels through
//! 4. Printing the whole chain to standard error
//!
//! Run it with `NO_COLOR=1` or `FORCE_COLOR=3` to see the color detection at
//! work.

use violet::{
    io::{self, ErrorKind, IoError},
    prelude::*,
};

fn open_settings(path: &str) -> io::Result<std::fs::File> {
    std::fs::File::open(path).map_err(IoError::from)
}

fn parse_port(raw: &str) -> Result<u16, Report> {
    let port: u16 = raw
        .parse()
        .with_context(|| format!("`{raw}` is not a port number"))?;
    if port == 0 {
        bail!("port 0 is reserved");
    }
    Ok(port)
}

fn load_settings(path: &str) -> Result<u16, Report> {
    let _file = open_settings(path).context("while opening the settings file")?;
    parse_port("eighty").context("while reading the `port` setting")
}

fn start() -> Result<(), Report> {
    load_settings("/does/not/exist/settings.toml").context("while starting the server")?;
    Ok(())
}

fn main() {
    println!("=== A system error with two layers of context ===");
    if let Err(report) = start() {
        report.print();
    }

    println!("\n=== Inspecting the chain ===");
    if let Err(report) = start() {
        println!("one line: {report:#}");
        println!("frames: {}", report.node_count());
        if let Some(error) = report.find::<IoError>() {
            println!("root kind: {}", error.kind());
        }
    }

    println!("\n=== An error that never touched the operating system ===");
    let report = Report::new(IoError::with_message(ErrorKind::InvalidData, "bad magic"))
        .context("while decoding the snapshot");
    report.print_to(violet::terminal::StreamSource::Stdout);

    println!("\n=== Missing values ===");
    let port: Option<u16> = None;
    if let Err(report) = port.context("the `port` setting is required") {
        report.print();
    }
}
