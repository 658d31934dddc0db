use serde::Deserialize;

/// Contact-form payload. Built from the incoming request, forwarded
/// verbatim as a single spreadsheet row, never persisted locally.
#[derive(Deserialize, Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// The row appended to the sheet: [name, email, message].
    pub fn as_row(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.message]
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct FrontMatter {
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image: String,
    pub date: String,
    pub draft: bool,
    pub permalink: String,
    pub excerpt: String,
}
