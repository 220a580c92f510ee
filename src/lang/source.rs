use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// ## Source line supplier
///
/// Both passes walk the same lines, so the supplier must rewind.
#[derive(Debug, Default)]
pub struct Source {
    lines: Vec<String>,
    cursor: usize,
}

impl Source {
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Source> {
        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Source { lines, cursor: 0 })
    }

    pub fn next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line.as_str())
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Source {
        Source {
            lines: text.lines().map(|s| s.to_string()).collect(),
            cursor: 0,
        }
    }
}
