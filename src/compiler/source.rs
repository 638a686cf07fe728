use std::io::Read;
use std::path::PathBuf;

/// Anything program text can be read from
pub trait Source {
    fn for_message(&self) -> String;
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<()>;
}

#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct StringSource(String);

impl StringSource {
    pub fn new<C: Into<String>>(content: C) -> Self {
        Self(content.into())
    }
}

impl Source for StringSource {
    fn for_message(&self) -> String {
        String::from("<string>")
    }

    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<()> {
        buf.push_str(&self.0);
        Ok(())
    }
}

/// The file is only opened when it is read
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn for_message(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<()> {
        let mut file = std::fs::File::open(&self.path)?;
        file.read_to_string(buf)?;
        Ok(())
    }
}

impl From<&str> for StringSource {
    fn from(s: &str) -> Self {
        StringSource::new(s)
    }
}
