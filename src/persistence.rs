// File: src/persistence.rs
use crate::core::frequency::FrequencyProfile;
use crate::error::{CipherError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk encodings of a frequency profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFormat {
    /// `{"a": 12, "b": 3}`
    Json,
    /// One `"<symbol> - <count>"` line per symbol.
    Table,
    /// bincode of the symbol -> count map.
    Binary,
}

impl ProfileFormat {
    /// Picks a format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") | Some("tbl") => ProfileFormat::Table,
            Some("bin") => ProfileFormat::Binary,
            _ => ProfileFormat::Json,
        }
    }
}

pub fn save_profile(profile: &FrequencyProfile, path: &Path, format: ProfileFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write_profile(profile, &mut writer, format)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| CipherError::Io(e.error))?;
    log::info!(
        "Saved frequency profile ({} symbols, {} total) to '{}'",
        profile.len(),
        profile.total(),
        path.display()
    );
    Ok(())
}

pub fn load_profile(path: &Path, format: ProfileFormat) -> Result<FrequencyProfile> {
    let file = File::open(path)?;
    let profile = read_profile(BufReader::new(file), format)?;
    log::debug!(
        "Loaded frequency profile with {} symbols from '{}'",
        profile.len(),
        path.display()
    );
    Ok(profile)
}

/// Loads the profile at `path`, or starts an empty one if the file does not
/// exist yet.
pub fn load_or_new(path: &Path, format: ProfileFormat) -> Result<FrequencyProfile> {
    if path.exists() {
        load_profile(path, format)
    } else {
        Ok(FrequencyProfile::new())
    }
}

pub fn write_profile<W: Write>(
    profile: &FrequencyProfile,
    mut writer: W,
    format: ProfileFormat,
) -> Result<()> {
    match format {
        ProfileFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, profile)?;
            writeln!(writer)?;
        }
        ProfileFormat::Table => {
            for (symbol, count) in profile.iter() {
                writeln!(writer, "{symbol} - {count}")?;
            }
        }
        ProfileFormat::Binary => bincode::serialize_into(writer, profile)?,
    }
    Ok(())
}

pub fn read_profile<R: BufRead>(reader: R, format: ProfileFormat) -> Result<FrequencyProfile> {
    match format {
        ProfileFormat::Json => Ok(serde_json::from_reader(reader)?),
        ProfileFormat::Table => parse_table(reader),
        ProfileFormat::Binary => Ok(bincode::deserialize_from(reader)?),
    }
}

pub fn to_json_string(profile: &FrequencyProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

pub fn from_json_str(json: &str) -> Result<FrequencyProfile> {
    Ok(serde_json::from_str(json)?)
}

fn parse_table<R: BufRead>(reader: R) -> Result<FrequencyProfile> {
    let mut profile = FrequencyProfile::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        // The symbol itself may be a space or a dash, so split from the right.
        let (symbol, count) = line.rsplit_once(" - ").ok_or_else(|| CipherError::MalformedProfile {
            line: line_no,
            reason: format!("expected '<symbol> - <count>', got {line:?}"),
        })?;

        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(CipherError::MalformedProfile {
                    line: line_no,
                    reason: format!("expected a single symbol, got {symbol:?}"),
                })
            }
        };

        let count = count.trim().parse().map_err(|_| CipherError::MalformedProfile {
            line: line_no,
            reason: format!("count {count:?} is not a non-negative integer"),
        })?;
        profile.insert(symbol, count);
    }
    Ok(profile)
}
