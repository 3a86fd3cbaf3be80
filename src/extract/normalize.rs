use super::strategies::has_source_marker;
use serde::{Deserialize, Serialize};

/// Declared content language of a finished file record. Derived from the
/// resolved filename alone, never from another look at the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Php,
    Html,
    Text,
}

impl Language {
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".blade.php") {
            Language::Html
        } else if filename.ends_with(".php") {
            Language::Php
        } else {
            Language::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Php => "php",
            Language::Html => "html",
            Language::Text => "text",
        }
    }
}

/// Blade templates open with a directive (`@extends`, `@section`, ...).
/// They are markup, not PHP source, and must not grow a `<?php` preamble.
fn is_template(body: &str) -> bool {
    body.trim_start().starts_with('@')
}

/// Give executable-source bodies their `<?php` opening if the model left
/// it off. Running this over already-normalized content is a no-op, so the
/// whole pipeline stays idempotent.
pub fn normalize_body(body: &str) -> String {
    if is_template(body) {
        return body.to_string();
    }
    if has_source_marker(body) && !body.trim_start().starts_with("<?php") {
        return format!("<?php\n\n{}", body);
    }
    body.to_string()
}
