use super::fences::scan_fenced_blocks;
use crate::artifact::ArtifactKind;

/// Which recognizer produced a candidate. Ordered by how much the engine
/// trusts the structure it found: an author-declared path beats a loose
/// marker beats pure content inference beats handing back everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStrategy {
    PathAnnotatedFence,
    CommentSection,
    KeywordSection,
    UnqualifiedFence,
    WholeResponse,
}

impl SourceStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SourceStrategy::PathAnnotatedFence => "path-annotated-fence",
            SourceStrategy::CommentSection => "comment-section",
            SourceStrategy::KeywordSection => "keyword-section",
            SourceStrategy::UnqualifiedFence => "unqualified-fence",
            SourceStrategy::WholeResponse => "whole-response",
        }
    }

    /// The last two rungs mean no declared structure survived; worth a log
    /// line, never an error.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            SourceStrategy::UnqualifiedFence | SourceStrategy::WholeResponse
        )
    }
}

/// A named-or-anonymous body on its way to the namer.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub raw_name: Option<String>,
    pub body: String,
    pub strategy: SourceStrategy,
}

/// A body counts as genuine source when it carries the PHP preamble, a
/// class or function declaration, or a route registration. Route files
/// contain none of the first three, so `Route::` qualifies on its own.
pub(crate) fn has_source_marker(body: &str) -> bool {
    body.contains("<?php")
        || body.contains("class ")
        || body.contains("function ")
        || body.contains("Route::")
}

/// `// app/Models/Post.php` or `# database/seeders/PostSeeder.php`.
fn path_comment(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix("//")
        .or_else(|| trimmed.strip_prefix('#'))?;
    let token = rest.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    token.ends_with(".php").then(|| token.to_string())
}

/// `Model: Post.php`, `Controller: PostController.php`, and friends —
/// the keywords are the artifact-kind vocabulary itself.
fn keyword_header(line: &str) -> Option<String> {
    let trimmed = line.trim();
    for kind in ArtifactKind::ALL {
        if let Some(rest) = trimmed.strip_prefix(kind.keyword()) {
            if let Some(name) = rest.strip_prefix(':') {
                let name = name.trim();
                if !name.is_empty()
                    && !name.contains(char::is_whitespace)
                    && name.ends_with(".php")
                {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

/// Strategy 1: fenced blocks whose first line is a path comment.
fn path_annotated_fences(text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for block in scan_fenced_blocks(text) {
        let Some(header) = block.header_line() else {
            continue;
        };
        let Some(path) = path_comment(header) else {
            continue;
        };
        let header = header.to_string();
        let body = block.body_without_header(&header);
        if has_source_marker(&body) {
            candidates.push(Candidate {
                raw_name: Some(path),
                body,
                strategy: SourceStrategy::PathAnnotatedFence,
            });
        }
    }

    candidates
}

/// Walk marker lines over the full text; each marker opens a section that
/// runs until the next marker or end of input.
fn delimited_sections(
    text: &str,
    marker: fn(&str) -> Option<String>,
    strategy: SourceStrategy,
) -> Vec<Candidate> {
    fn flush(
        section: Option<(String, Vec<&str>)>,
        strategy: SourceStrategy,
        out: &mut Vec<Candidate>,
    ) {
        if let Some((name, lines)) = section {
            let body = lines.join("\n").trim().to_string();
            if has_source_marker(&body) {
                out.push(Candidate {
                    raw_name: Some(name),
                    body,
                    strategy,
                });
            }
        }
    }

    let mut candidates = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(name) = marker(line) {
            flush(current.take(), strategy, &mut candidates);
            current = Some((name, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    flush(current, strategy, &mut candidates);

    candidates
}

/// Strategy 2: comment-delimited sections outside any recognized fence
/// structure.
fn comment_sections(text: &str) -> Vec<Candidate> {
    delimited_sections(text, path_comment, SourceStrategy::CommentSection)
}

/// Strategy 3: keyword-delimited sections.
fn keyword_sections(text: &str) -> Vec<Candidate> {
    delimited_sections(text, keyword_header, SourceStrategy::KeywordSection)
}

/// Strategy 4: fenced blocks again, headers ignored; names will be
/// inferred from content alone.
fn unqualified_fences(text: &str) -> Vec<Candidate> {
    scan_fenced_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let body = block.body.trim().to_string();
            has_source_marker(&body).then(|| Candidate {
                raw_name: None,
                body,
                strategy: SourceStrategy::UnqualifiedFence,
            })
        })
        .collect()
}

/// Strategy 5: no structure recognized — hand back the whole reply
/// verbatim as a single anonymous candidate.
fn whole_response(text: &str) -> Vec<Candidate> {
    vec![Candidate {
        raw_name: None,
        body: text.to_string(),
        strategy: SourceStrategy::WholeResponse,
    }]
}

type Strategy = fn(&str) -> Vec<Candidate>;

const CHAIN: &[(SourceStrategy, Strategy)] = &[
    (SourceStrategy::PathAnnotatedFence, path_annotated_fences),
    (SourceStrategy::CommentSection, comment_sections),
    (SourceStrategy::KeywordSection, keyword_sections),
    (SourceStrategy::UnqualifiedFence, unqualified_fences),
];

/// Run the chain top to bottom; the first strategy to produce candidates
/// wins outright. Partial results from different strategies are never
/// merged, so one logical file can never appear twice under two
/// recognizers.
pub fn run_chain(text: &str) -> (SourceStrategy, Vec<Candidate>) {
    for (strategy, recognize) in CHAIN {
        let candidates = recognize(text);
        if !candidates.is_empty() {
            return (*strategy, candidates);
        }
    }
    (SourceStrategy::WholeResponse, whole_response(text))
}
