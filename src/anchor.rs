use aho_corasick::AhoCorasick;
use anyhow::{Result, bail};

/// A named insertion point in a target file.
///
/// Target files are modeled as a small set of anchors resolved up front
/// against the unmodified source, never as running index arithmetic over a
/// document that is being edited.
#[derive(Debug, Clone)]
pub enum Anchor {
    FileStart,
    FileEnd,
    /// Immediately before the first occurrence of the pattern.
    BeforeFirst(&'static str),
}

/// Content to insert at an anchor. When `guard` is present and the source
/// already contains it, the splice is skipped, which is what makes re-runs
/// idempotent.
#[derive(Debug, Clone)]
pub struct Splice {
    pub anchor: Anchor,
    pub content: String,
    pub guard: Option<String>,
}

/// Applies every splice to `source` and returns the patched document.
///
/// All anchors resolve against the original source; insertions happen
/// back-to-front so earlier offsets stay valid. An anchor whose pattern is
/// missing from the source is an error for the caller to map to
/// skip-or-abort.
pub fn apply(source: &str, splices: &[Splice]) -> Result<String> {
    let mut resolved = Vec::new();
    for (index, splice) in splices.iter().enumerate() {
        if let Some(guard) = &splice.guard
            && locate(source, guard).is_some()
        {
            continue;
        }
        let offset = resolve(source, &splice.anchor)?;
        resolved.push((offset, index, splice.content.as_str()));
    }

    // Descending offset, and for equal offsets descending declaration
    // order, so the emitted order matches the declaration order.
    resolved.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut patched = source.to_string();
    for (offset, _, content) in resolved {
        patched.insert_str(offset, content);
    }
    Ok(patched)
}

fn resolve(source: &str, anchor: &Anchor) -> Result<usize> {
    match anchor {
        Anchor::FileStart => Ok(0),
        Anchor::FileEnd => Ok(source.len()),
        Anchor::BeforeFirst(pattern) => match locate(source, pattern) {
            Some(offset) => Ok(offset),
            None => bail!("Anchor pattern '{}' not found", pattern),
        },
    }
}

fn locate(haystack: &str, needle: &str) -> Option<usize> {
    let searcher = AhoCorasick::new([needle]).ok()?;
    searcher.find(haystack).map(|m| m.start())
}
