//! Example reading several files behind a single progress bar.
//!
//! ```text
//! cargo run --example read_files -- Cargo.toml src/lib.rs
//! ```

use color_eyre::Result;
use linebar::ProgressBarBuilder;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let mut bar = ProgressBarBuilder::new()
        .files(&paths)?
        .enabled(io::stderr().is_terminal())
        .build();

    let mut checksum: u64 = 0;
    for path in &paths {
        let file = File::open(path)?;
        let mut reader = bar.wrap_read(BufReader::with_capacity(64, file));
        let mut sink = ByteSum::default();
        io::copy(&mut reader, &mut sink)?;
        reader.segment_done()?;
        checksum = checksum.wrapping_add(sink.0);

        // Make room for a status line, the bar comes back on the next update.
        bar.erase()?;
        eprintln!("Read {}", path);
    }
    bar.finish()?;

    println!("Read {} files, byte sum {}", paths.len(), checksum);
    Ok(())
}

/// Sink adding up every byte written to it.
#[derive(Default)]
struct ByteSum(u64);

impl Write for ByteSum {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 = buf
            .iter()
            .fold(self.0, |sum, b| sum.wrapping_add(u64::from(*b)));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
