use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::models::FrontMatter;

pub const BLOG_DIR: &str = "content/blog";
const DEFAULT_AUTHOR: &str = "Dhanraj Padmashali";
const DEFAULT_IMAGE: &str = "../../images/default.jpeg";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Folder {0} already exists.")]
    FolderExists(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct CreatedPost {
    pub folder: PathBuf,
    pub file: PathBuf,
}

/// Lowercase the name and collapse whitespace runs into hyphens.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// The next sequential index is simply the number of existing post folders.
pub fn next_post_index(root: &Path) -> Result<usize, std::io::Error> {
    let mut count = 0;
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            count += 1;
        }
    }
    Ok(count)
}

impl FrontMatter {
    pub fn for_new_post(name: &str, now: DateTime<Utc>) -> Self {
        FrontMatter {
            title: name.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: vec![String::new()],
            image: DEFAULT_IMAGE.to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            draft: true,
            permalink: slugify(name),
            excerpt: String::new(),
        }
    }
}

pub fn render_front_matter(fm: &FrontMatter) -> String {
    format!(
        "---\n\
         title: \"{}\"\n\
         author: \"{}\"\n\
         tags: [\"{}\"]\n\
         image: \"{}\"\n\
         date: \"{}\"\n\
         draft: {}\n\
         permalink: \"{}\"\n\
         excerpt: '{}'\n\
         ---\n",
        fm.title,
        fm.author,
        fm.tags.join("\", \""),
        fm.image,
        fm.date,
        fm.draft,
        fm.permalink,
        fm.excerpt,
    )
}

/// Create `<root>/<n>. <name>/<slug>.md` with templated front-matter.
/// Refuses to touch anything if the target folder is already there.
pub fn create_post(root: &Path, name: &str) -> Result<CreatedPost, ScaffoldError> {
    let index = next_post_index(root)?;
    let folder = root.join(format!("{}. {}", index, name));
    let file = folder.join(format!("{}.md", slugify(name)));

    if folder.exists() {
        return Err(ScaffoldError::FolderExists(folder.display().to_string()));
    }

    let front_matter = FrontMatter::for_new_post(name, Utc::now());
    fs::create_dir_all(&folder)?;
    fs::write(&file, render_front_matter(&front_matter))?;

    Ok(CreatedPost { folder, file })
}
