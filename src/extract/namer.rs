use super::strategies::Candidate;

/// Resolves each candidate to a final filename.
///
/// Candidates that arrived with a raw path keep its last segment verbatim.
/// Anonymous candidates run through a prioritized rule table keyed on body
/// content; the first matching rule names the file. The numbered templates
/// share one counter scoped to this batch, so parallel extractions never
/// interfere.
pub struct Namer {
    resource: Option<String>,
    next_index: usize,
}

struct Rule {
    matches: fn(&str) -> bool,
    name: fn(&mut Namer) -> String,
}

const RULES: &[Rule] = &[
    Rule { matches: is_model, name: model_name },
    Rule { matches: is_controller, name: controller_name },
    Rule { matches: is_migration, name: migration_name },
    Rule { matches: is_seeder, name: seeder_name },
    Rule { matches: is_factory, name: factory_name },
    Rule { matches: is_form_request, name: form_request_name },
    Rule { matches: is_json_resource, name: json_resource_name },
    Rule { matches: is_routes, name: routes_name },
    Rule { matches: is_view, name: view_name },
];

impl Namer {
    pub fn new(resource: Option<&str>) -> Self {
        Self {
            resource: resource.map(str::to_string),
            next_index: 1,
        }
    }

    pub fn resolve(&mut self, candidate: &Candidate) -> String {
        if let Some(raw) = candidate.raw_name.as_deref() {
            let name = basename(raw);
            if !name.is_empty() {
                return name;
            }
        }
        self.infer(&candidate.body)
    }

    fn infer(&mut self, body: &str) -> String {
        for rule in RULES {
            if (rule.matches)(body) {
                return (rule.name)(self);
            }
        }
        format!("generated_file_{}.php", self.take_index())
    }

    fn take_index(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// `<Resource><suffix>.php` when a resource name is known, otherwise
    /// the indexed `<Kind>_<n>.php` shape the free-form flow uses.
    fn resource_or_indexed(&mut self, suffix: &str, kind: &str) -> String {
        match &self.resource {
            Some(resource) => format!("{}{}.php", resource, suffix),
            None => format!("{}_{}.php", kind, self.take_index()),
        }
    }
}

fn basename(raw: &str) -> String {
    raw.rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw)
        .trim()
        .to_string()
}

fn is_model(body: &str) -> bool {
    body.contains("extends Model")
}

fn is_controller(body: &str) -> bool {
    body.contains("extends Controller")
}

fn is_migration(body: &str) -> bool {
    body.contains("extends Migration")
}

fn is_seeder(body: &str) -> bool {
    body.contains("extends Seeder")
}

fn is_factory(body: &str) -> bool {
    body.contains("extends Factory")
}

fn is_form_request(body: &str) -> bool {
    body.contains("extends FormRequest")
}

fn is_json_resource(body: &str) -> bool {
    body.contains("extends JsonResource")
}

fn is_routes(body: &str) -> bool {
    body.contains("Route::")
}

fn is_view(body: &str) -> bool {
    body.contains("@extends") || body.contains("@section")
}

fn model_name(namer: &mut Namer) -> String {
    namer.resource_or_indexed("", "Model")
}

fn controller_name(namer: &mut Namer) -> String {
    namer.resource_or_indexed("Controller", "Controller")
}

fn migration_name(namer: &mut Namer) -> String {
    match &namer.resource {
        Some(resource) => format!("create_{}s_table.php", resource.to_lowercase()),
        None => format!("Migration_{}.php", namer.take_index()),
    }
}

fn seeder_name(namer: &mut Namer) -> String {
    namer.resource_or_indexed("Seeder", "Seeder")
}

fn factory_name(namer: &mut Namer) -> String {
    namer.resource_or_indexed("Factory", "Factory")
}

fn form_request_name(namer: &mut Namer) -> String {
    match &namer.resource {
        Some(resource) => format!("Store{}Request.php", resource),
        None => format!("Request_{}.php", namer.take_index()),
    }
}

fn json_resource_name(namer: &mut Namer) -> String {
    namer.resource_or_indexed("Resource", "Resource")
}

fn routes_name(_namer: &mut Namer) -> String {
    "routes.php".to_string()
}

fn view_name(namer: &mut Namer) -> String {
    format!("view_{}.blade.php", namer.take_index())
}
