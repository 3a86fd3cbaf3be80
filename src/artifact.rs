use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The file roles the generator knows how to ask for and how to recognize.
/// The prompt composer and the extraction classifier share this vocabulary,
/// so a kind that can be requested can also be named on the way back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ArtifactKind {
    Model,
    Migration,
    Controller,
    Seeder,
    Factory,
    Request,
    Resource,
    Routes,
    View,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 9] = [
        ArtifactKind::Model,
        ArtifactKind::Migration,
        ArtifactKind::Controller,
        ArtifactKind::Seeder,
        ArtifactKind::Factory,
        ArtifactKind::Request,
        ArtifactKind::Resource,
        ArtifactKind::Routes,
        ArtifactKind::View,
    ];

    /// Short description used when restating the request in a prompt.
    pub fn description(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "Eloquent model class",
            ArtifactKind::Migration => "Database migration file",
            ArtifactKind::Controller => "Resource controller",
            ArtifactKind::Seeder => "Database seeder",
            ArtifactKind::Factory => "Model factory",
            ArtifactKind::Request => "Form request validation class",
            ArtifactKind::Resource => "API resource transformer",
            ArtifactKind::Routes => "Route definitions",
            ArtifactKind::View => "Blade view template",
        }
    }

    /// Label the extraction engine accepts as a section header, e.g. `Model: Post.php`.
    pub fn keyword(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "Model",
            ArtifactKind::Migration => "Migration",
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Seeder => "Seeder",
            ArtifactKind::Factory => "Factory",
            ArtifactKind::Request => "Request",
            ArtifactKind::Resource => "Resource",
            ArtifactKind::Routes => "Routes",
            ArtifactKind::View => "View",
        }
    }
}

/// One attribute of the resource being generated, e.g. `title: string (unique)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub column_type: String,
    pub options: Vec<String>,
}

impl Field {
    /// Render the field the way the prompt restates it.
    pub fn describe(&self) -> String {
        if self.options.is_empty() {
            format!("- {}: {}", self.name, self.column_type)
        } else {
            format!("- {}: {} ({})", self.name, self.column_type, self.options.join(", "))
        }
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    /// Parses the CLI shape `name:type` or `name:type:opt1|opt2`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or("").trim();
        let column_type = parts.next().unwrap_or("").trim();

        if name.is_empty() || column_type.is_empty() {
            return Err(anyhow!(
                "Invalid field '{}': expected name:type or name:type:opt1|opt2",
                s
            ));
        }

        let options = parts
            .next()
            .map(|opts| {
                opts.split('|')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Field {
            name: name.to_string(),
            column_type: column_type.to_string(),
            options,
        })
    }
}

/// What the user asked for. Immutable once built; the constructors own
/// input validation so the composer downstream never sees an empty request.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    Resource {
        name: String,
        fields: Vec<Field>,
        kinds: Vec<ArtifactKind>,
    },
    Custom {
        description: String,
    },
}

impl GenerationRequest {
    pub const MAX_DESCRIPTION_LEN: usize = 4000;

    pub fn resource(name: String, fields: Vec<Field>, kinds: Vec<ArtifactKind>) -> Result<Self> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(anyhow!("Resource name cannot be empty"));
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(anyhow!(
                "Resource name '{}' must be alphanumeric (StudlyCase, e.g. BlogPost)",
                name
            ));
        }
        if kinds.is_empty() {
            return Err(anyhow!("Select at least one artifact kind to generate"));
        }
        Ok(GenerationRequest::Resource { name, fields, kinds })
    }

    pub fn custom(description: String) -> Result<Self> {
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(anyhow!("Description cannot be empty"));
        }
        if description.len() > Self::MAX_DESCRIPTION_LEN {
            return Err(anyhow!(
                "Description is too long ({} chars, max {})",
                description.len(),
                Self::MAX_DESCRIPTION_LEN
            ));
        }
        Ok(GenerationRequest::Custom { description })
    }

    /// The resource name the namer derives filenames from, when one exists.
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            GenerationRequest::Resource { name, .. } => Some(name),
            GenerationRequest::Custom { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        let field: Field = "title:string".parse().unwrap();
        assert_eq!(field.name, "title");
        assert_eq!(field.column_type, "string");
        assert!(field.options.is_empty());

        let field: Field = "email:string:unique|nullable".parse().unwrap();
        assert_eq!(field.options, vec!["unique", "nullable"]);

        assert!("title".parse::<Field>().is_err());
        assert!(":string".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_describe() {
        let field: Field = "price:decimal:8,2".parse().unwrap();
        assert_eq!(field.describe(), "- price: decimal (8,2)");
    }

    #[test]
    fn test_resource_request_validation() {
        assert!(GenerationRequest::resource(
            "  ".to_string(),
            vec![],
            vec![ArtifactKind::Model]
        )
        .is_err());

        assert!(GenerationRequest::resource("Post".to_string(), vec![], vec![]).is_err());

        assert!(GenerationRequest::resource(
            "Blog Post".to_string(),
            vec![],
            vec![ArtifactKind::Model]
        )
        .is_err());

        let req = GenerationRequest::resource(
            "Post".to_string(),
            vec![],
            vec![ArtifactKind::Model, ArtifactKind::Migration],
        )
        .unwrap();
        assert_eq!(req.resource_name(), Some("Post"));
    }

    #[test]
    fn test_custom_request_validation() {
        assert!(GenerationRequest::custom("".to_string()).is_err());
        assert!(GenerationRequest::custom("x".repeat(4001)).is_err());

        let req = GenerationRequest::custom("a blog with posts".to_string()).unwrap();
        assert_eq!(req.resource_name(), None);
    }
}
