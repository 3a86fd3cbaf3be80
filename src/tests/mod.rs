use crate::config::{AIConfig, AIProvider, Config, DisplayConfig, GeneratorConfig};

mod pipeline;

// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    /// A well-behaved reply: prose around path-annotated fenced blocks,
    /// the shape the prompt contract asks for.
    pub fn two_file_response() -> &'static str {
        "Here's the Laravel boilerplate for your Post resource:\n\n\
         ```php\n\
         // app/Models/Post.php\n\
         <?php\n\n\
         namespace App\\Models;\n\n\
         use Illuminate\\Database\\Eloquent\\Model;\n\n\
         class Post extends Model\n\
         {\n\
             protected $fillable = ['title', 'body'];\n\
         }\n\
         ```\n\n\
         And the controller:\n\n\
         ```php\n\
         // app/Http/Controllers/PostController.php\n\
         <?php\n\n\
         namespace App\\Http\\Controllers;\n\n\
         class PostController extends Controller\n\
         {\n\
             public function index()\n\
             {\n\
                 return Post::latest()->paginate();\n\
             }\n\
         }\n\
         ```\n\n\
         Let me know if you need anything else!"
    }

    /// A reply that ignored the fence contract and used bare comment
    /// markers instead.
    pub fn comment_marker_response() -> &'static str {
        "// Post.php\n\
         <?php\n\
         class Post extends Model {}\n\n\
         // PostSeeder.php\n\
         <?php\n\
         class PostSeeder extends Seeder {}\n"
    }

    pub fn test_config(api_url: String) -> Config {
        Config {
            ai: AIConfig {
                provider: AIProvider::Anthropic,
                model: "claude-3-opus-20240229".to_string(),
                max_tokens: 2000,
                anthropic_api_key: Some("test_key".to_string()),
                openai_api_key: None,
                api_url: Some(api_url),
            },
            generator: GeneratorConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}
