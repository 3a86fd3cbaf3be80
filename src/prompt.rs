//! Builds the one prompt string sent to the generation service. The prompt
//! does two jobs: restate the request precisely, and pin down the reply
//! format so the extraction engine has declared structure to find.

use crate::artifact::{ArtifactKind, Field, GenerationRequest};

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &GenerationRequest) -> String {
        match request {
            GenerationRequest::Resource { name, fields, kinds } => {
                Self::resource_prompt(name, fields, kinds)
            }
            GenerationRequest::Custom { description } => Self::custom_prompt(description),
        }
    }

    /// Field-based flow: a named resource with typed attributes and an
    /// explicit list of artifact kinds.
    fn resource_prompt(name: &str, fields: &[Field], kinds: &[ArtifactKind]) -> String {
        let field_list = if fields.is_empty() {
            "- (no explicit fields; choose sensible ones for this resource)".to_string()
        } else {
            fields
                .iter()
                .map(Field::describe)
                .collect::<Vec<_>>()
                .join("\n")
        };

        let kind_list = kinds
            .iter()
            .map(|kind| format!("{} ({})", kind.keyword().to_lowercase(), kind.description()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Generate Laravel boilerplate code for a resource named "{name}" with the following fields:

{field_list}

Generate the following Laravel files: {kind_list}.

CRITICAL: Follow these Laravel best practices strictly:

**Naming conventions:**
- Controller: singular ({name}Controller, not {name}sController)
- Model: singular ({name})
- Table: plural, snake_case ({table})
- Methods and variables: camelCase
- Database columns: snake_case

**Architecture principles:**
- Single responsibility per class and method
- Fat models, skinny controllers: database logic lives on the model
- Validate with Form Request classes, never inside controllers
- Use dependency injection, proper type hints and return types

**Code quality:**
- Use Eloquent over Query Builder and raw SQL
- Use mass assignment with fillable properties
- Define relationships and scopes on the model
- Use appropriate column types, indexes and constraints in migrations

{contract}"#,
            name = name,
            field_list = field_list,
            kind_list = kind_list,
            table = format!("{}s", name.to_lowercase()),
            contract = Self::format_contract(),
        )
    }

    /// Free-form flow: one description, a whole module back.
    fn custom_prompt(description: &str) -> String {
        format!(
            r#"Generate a complete Laravel module based on this requirement:

"{description}"

Follow Laravel best practices strictly: single responsibility per class, fat
models and skinny controllers, Form Request validation, Eloquent over raw
SQL, camelCase methods, snake_case columns, singular model and controller
names, plural snake_case table names.

Generate every file the module needs: models with relationships and scopes,
migrations with proper column types and constraints, thin CRUD controllers,
Form Request classes, seeders with realistic sample data, factories, API
resources if endpoints are needed, routes, and Blade views if a web
interface is needed.

{contract}"#,
            description = description,
            contract = Self::format_contract(),
        )
    }

    /// The output contract the extraction engine's first strategy relies
    /// on: one fenced block per file, path comment on the first line.
    fn format_contract() -> &'static str {
        r#"IMPORTANT RESPONSE FORMAT:
Provide each file in the following format:

```php
// app/Models/Example.php
<?php

namespace App\Models;

class Example extends Model
{
    // code here
}
```

Make sure each file is wrapped in its own ```php code block with a comment
showing the file path as the first line inside the block. Make the code
production-ready and follow all Laravel conventions exactly."#
    }
}
