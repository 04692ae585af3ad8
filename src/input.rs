// std imports
use std::{
    fs::File,
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// ---

pub type InputStream = Box<dyn BufRead>;

// ---

/// A reference to an input file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Opens the input for reading.
    pub fn open(&self) -> io::Result<InputStream> {
        match self {
            Self::Stdin => Ok(Box::new(stdin().lock())),
            Self::File(path) => {
                let file = File::open(path)
                    .map_err(|e| io::Error::new(e.kind(), format!("failed to open {}: {}", self.description(), e)))?;
                if file.metadata()?.is_dir() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("failed to open {}: is a directory", self.description()),
                    ));
                }

                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Returns a description of the input reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path),
        }
    }
}

impl From<PathBuf> for InputReference {
    /// Converts a command line argument, `-` stands for stdin.
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

// ---
