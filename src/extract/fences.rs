/// A fenced code region lifted out of generated text.
///
/// `info` is whatever followed the opening backticks (usually a language
/// tag, often nothing). `body` is the raw text between the fences, without
/// the delimiter lines. An unterminated fence runs to the end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct FencedBlock {
    pub info: String,
    pub body: String,
}

impl FencedBlock {
    /// First non-blank line of the body, if any. Strategy 1 inspects this
    /// for a path comment.
    pub fn header_line(&self) -> Option<&str> {
        self.body.lines().find(|line| !line.trim().is_empty())
    }

    /// Body with the given header line removed, for when the header was
    /// consumed as a filename rather than content.
    pub fn body_without_header(&self, header: &str) -> String {
        let mut seen = false;
        let lines: Vec<&str> = self
            .body
            .lines()
            .filter(|line| {
                if !seen && *line == header {
                    seen = true;
                    false
                } else {
                    true
                }
            })
            .collect();
        lines.join("\n").trim().to_string()
    }
}

fn fence_delimiter(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed.strip_prefix("```").map(|rest| rest.trim())
}

/// Walk the text line by line collecting fenced regions. Generated replies
/// regularly interleave prose with fences, nest nothing, and sometimes
/// forget the closing delimiter; that last case still yields a block.
pub fn scan_fenced_blocks(text: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(open_info) = fence_delimiter(line) {
            match current.take() {
                Some((info, lines)) => blocks.push(FencedBlock {
                    info,
                    body: lines.join("\n"),
                }),
                None => current = Some((open_info.to_string(), Vec::new())),
            }
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((info, lines)) = current {
        blocks.push(FencedBlock {
            info,
            body: lines.join("\n"),
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_block() {
        let text = "Here is the file:\n```php\n<?php\necho 'hi';\n```\nDone.";
        let blocks = scan_fenced_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].info, "php");
        assert_eq!(blocks[0].body, "<?php\necho 'hi';");
    }

    #[test]
    fn test_scan_multiple_blocks_with_prose() {
        let text = "First:\n```php\nclass A {}\n```\nand second:\n```\nclass B {}\n```";
        let blocks = scan_fenced_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "class A {}");
        assert_eq!(blocks[1].info, "");
        assert_eq!(blocks[1].body, "class B {}");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let text = "```php\nclass A {}\nno closing fence";
        let blocks = scan_fenced_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "class A {}\nno closing fence");
    }

    #[test]
    fn test_no_fences() {
        assert!(scan_fenced_blocks("just prose, no code").is_empty());
        assert!(scan_fenced_blocks("").is_empty());
    }

    #[test]
    fn test_header_line_skips_blanks() {
        let block = FencedBlock {
            info: "php".to_string(),
            body: "\n\n// app/Models/Post.php\nclass Post {}".to_string(),
        };
        assert_eq!(block.header_line(), Some("// app/Models/Post.php"));
    }

    #[test]
    fn test_body_without_header() {
        let block = FencedBlock {
            info: "php".to_string(),
            body: "// app/Models/Post.php\n<?php\nclass Post {}".to_string(),
        };
        let body = block.body_without_header("// app/Models/Post.php");
        assert_eq!(body, "<?php\nclass Post {}");
    }
}
