//! Insert a `url: '#',` field after every `readTime: '...',` assignment.

pub mod exec;

pub use exec::{exec, rewrite_file};

use crate::error::Result;
use regex::Regex;

/// Page rewritten when no path is given.
pub const DEFAULT_TARGET: &str = "frontend/src/pages/NewsHomePage.tsx";

const READ_TIME_PATTERN: &str = r"readTime: '(.*?)',";
const URL_FIELD: &str = "\n    url: '#',";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replacements: usize,
    pub skipped: usize,
}

pub struct UrlInserter {
    read_time: Regex,
    existing_url: Regex,
}

impl UrlInserter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            read_time: Regex::new(READ_TIME_PATTERN)?,
            existing_url: Regex::new(r"^[ \t]*\r?\n[ \t]*url:")?,
        })
    }

    /// Rewrite `content`. With `skip_existing`, matches whose next line already
    /// assigns `url:` are left as they are.
    pub fn apply(&self, content: &str, skip_existing: bool) -> Rewrite {
        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        let mut replacements = 0;
        let mut skipped = 0;

        for m in self.read_time.find_iter(content) {
            out.push_str(&content[last..m.end()]);
            last = m.end();

            if skip_existing && self.existing_url.is_match(&content[m.end()..]) {
                skipped += 1;
                continue;
            }
            out.push_str(URL_FIELD);
            replacements += 1;
        }
        out.push_str(&content[last..]);

        Rewrite {
            content: out,
            replacements,
            skipped,
        }
    }
}
