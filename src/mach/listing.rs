use super::Address;
use crate::lang::Error;

/// ## Translation listing
///
/// One entry per pass 2 line: the location, the encoded contents (or
/// blank), the original statement, and any diagnostics the line drew.
#[derive(Debug, Default)]
pub struct Listing {
    lines: Vec<Line>,
}

#[derive(Debug)]
pub struct Line {
    pub location: Option<Address>,
    pub contents: Option<String>,
    pub statement: String,
    pub errors: Vec<Error>,
}

impl Listing {
    pub fn push(&mut self, location: Option<Address>, contents: Option<String>, statement: &str, errors: Vec<Error>) {
        self.lines.push(Line {
            location,
            contents,
            statement: statement.to_string(),
            errors,
        });
    }

    /// Fatal diagnostics arrive after the last echoed line.
    pub fn push_error(&mut self, error: Error) {
        self.lines.push(Line {
            location: None,
            contents: None,
            statement: String::new(),
            errors: vec![error],
        });
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.lines.iter().flat_map(|line| line.errors.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Translation of Program:")?;
        writeln!(f, "Location\tContents\tOriginal Statement")?;
        for line in &self.lines {
            match line.location {
                Some(location) => writeln!(
                    f,
                    "{}\t\t{}\t\t{}",
                    location,
                    line.contents.as_deref().unwrap_or(""),
                    line.statement
                )?,
                None => {
                    if !line.statement.is_empty() || line.errors.is_empty() {
                        writeln!(f, "\t\t\t\t{}", line.statement)?;
                    }
                }
            }
            for error in &line.errors {
                writeln!(f, "ERROR: {}", error)?;
            }
        }
        Ok(())
    }
}
