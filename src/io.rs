// File: src/io.rs
//! Input/output endpoints for the command-line tool. A missing path means
//! standard input or standard output.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

pub fn read_input(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    open_input(path)?.read_to_string(&mut text)?;
    Ok(text)
}

pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    let mut out = open_output(path)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
