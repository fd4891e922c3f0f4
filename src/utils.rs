use std::path::{Path, PathBuf};

/// Leading format number of every stage file
pub const STAGE_MAGIC: u32 = 1020;

/// Sentinel that closes a well-formed stage file
pub const END_MARKER: u32 = 123456789;

/// Extension given to encoded output files
pub const STAGE_EXTENSION: &str = "stg4_1020";

/// Detect if data is a stage file by checking the magic number
pub fn is_stage_data(data: &[u8]) -> bool {
    data.len() >= 4 && data[0..4] == STAGE_MAGIC.to_le_bytes()
}

/// Name given to an encoded file when the input name has nothing before `.json`
pub const DEFAULT_STAGE_STEM: &str = "stage_new";

/// What a converter should do with an input file, judged by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `.stg4` or `.stg4_<digits>`
    Stage,
    /// `.json`
    Json,
}

impl InputKind {
    /// Classify a file name; matching is case-insensitive and a name that is
    /// only the suffix (`.json`) still counts.
    pub fn from_file_name(name: &str) -> Option<InputKind> {
        let name = file_name(name).to_ascii_lowercase();
        if name.ends_with(".json") {
            Some(InputKind::Json)
        } else if stage_suffix_len(&name).is_some() {
            Some(InputKind::Stage)
        } else {
            None
        }
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Byte length of a trailing `.stg4` / `.stg4_<digits>` in a lowercased name
fn stage_suffix_len(name: &str) -> Option<usize> {
    let start = name.rfind(".stg4")?;
    let rest = &name[start + ".stg4".len()..];
    if rest.is_empty() {
        return Some(name.len() - start);
    }
    let digits = rest.strip_prefix('_')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(name.len() - start)
    } else {
        None
    }
}

fn sibling_with_name(input: &Path, name: String) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// `stage.stg4_1020` becomes `stage.json`
pub fn json_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match stage_suffix_len(&name.to_ascii_lowercase()) {
        Some(len) => &name[..name.len() - len],
        None => name.as_str(),
    };
    sibling_with_name(input, format!("{}.json", stem))
}

/// `stage.json` becomes `stage.stg4_1020`, and a bare `.json` becomes
/// `stage_new.stg4_1020`
pub fn stage_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = if name.to_ascii_lowercase().ends_with(".json") {
        &name[..name.len() - ".json".len()]
    } else {
        name.as_str()
    };
    let stem = if stem.is_empty() { DEFAULT_STAGE_STEM } else { stem };
    sibling_with_name(input, format!("{}.{}", stem, STAGE_EXTENSION))
}
