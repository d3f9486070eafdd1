use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    let Some(home) = dirs_next::home_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&home) {
        Ok(stripped) => PathBuf::from("~").join(stripped).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Whitespace-separated values from `reader`, in order.
pub fn read_values<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input.split_whitespace().map(str::to_string).collect())
}
