// recipe-pantry - keeps your recipes so your browser tabs don't have to
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use recipe_pantry_lib::{
    core::{image_loader, RecipeStore},
    render::Renderer,
    FileBackend, KvBackend, PantryError, RecipeInput, Result,
};
use std::env;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "add" => handle_add(&args[2..]).await,
        "list" => handle_list(),
        "search" => handle_search(&args[2..]),
        "view" => handle_view(&args[2..]),
        "edit" => handle_edit(&args[2..]).await,
        "delete" => handle_delete(&args[2..]),
        "version" | "-v" | "--version" => {
            println!("recipe-pantry v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

/// Recipe fields collected from command-line flags
#[derive(Default)]
struct FormFields {
    name: Option<String>,
    ingredients: Option<String>,
    steps: Vec<String>,
    category: Option<String>,
    image_path: Option<String>,
}

/// Parse the flag-style arguments shared by `add` and `edit`.
///
/// `--step` can repeat as many times as the cook needs; there is no cap.
fn parse_fields(args: &[String]) -> Result<FormFields> {
    let mut fields = FormFields::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                i += 1;
                fields.name = args.get(i).cloned();
            }
            "--ingredients" => {
                i += 1;
                fields.ingredients = args.get(i).cloned();
            }
            "--step" => {
                i += 1;
                if let Some(step) = args.get(i) {
                    fields.steps.push(step.clone());
                }
            }
            "--category" => {
                i += 1;
                fields.category = args.get(i).cloned();
            }
            "--image" => {
                i += 1;
                fields.image_path = args.get(i).cloned();
            }
            arg => {
                return Err(PantryError::Generic(format!("Unknown flag: {}", arg)));
            }
        }
        i += 1;
    }

    Ok(fields)
}

async fn handle_add(args: &[String]) -> Result<()> {
    let fields = parse_fields(args)?;

    // The store accepts empty fields (always has), but a nameless recipe
    // is usually a typo, so say something.
    if fields.name.as_deref().unwrap_or("").is_empty() {
        eprintln!("Note: adding a recipe with no name.");
    }

    // Read the image before touching the store; a second submission can't
    // start until this one finishes.
    let image = match &fields.image_path {
        Some(path) => image_loader::load_data_url(path).await?,
        None => String::new(),
    };

    let mut store = open_store()?;
    let id = store.add(RecipeInput {
        name: fields.name.unwrap_or_default(),
        ingredients: fields.ingredients.unwrap_or_default(),
        steps: fields.steps,
        category: fields.category.unwrap_or_default(),
        image,
    })?;

    println!("Added recipe {}", id);
    print!("{}", Renderer::render(&store.list()));

    Ok(())
}

fn handle_list() -> Result<()> {
    let store = open_store()?;
    print!("{}", Renderer::render(&store.list()));
    Ok(())
}

fn handle_search(args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No search query provided");
        return Ok(());
    }

    let query = args.join(" ");
    let store = open_store()?;
    let results = store.filter(&query);

    if results.is_empty() {
        println!("No recipes found matching '{}'", query);
    } else {
        println!("\nFound {} recipe(s) matching '{}':", results.len(), query);
        print!("{}", Renderer::render(&results));
    }

    Ok(())
}

fn handle_view(args: &[String]) -> Result<()> {
    let id = parse_id(args)?;
    let store = open_store()?;

    let recipe = store
        .get(id)
        .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))?;
    print!("{}", Renderer::render_detail(recipe));

    Ok(())
}

async fn handle_edit(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(PantryError::Generic(
            "Usage: recipe-pantry edit <id> [--name ...] [--step ...]".to_string(),
        ));
    }

    let id = parse_one_id(&args[0])?;
    let fields = parse_fields(&args[1..])?;

    let mut store = open_store()?;

    // Prefill from the existing record, then lay the provided flags over
    // it. Nothing is removed until the commit below, so bailing out here
    // (or an image read failing) leaves the recipe untouched.
    let draft = store.begin_edit(id)?;

    let image = match &fields.image_path {
        Some(path) => image_loader::load_data_url(path).await?,
        None => draft.image,
    };

    let steps = if fields.steps.is_empty() {
        draft.steps
    } else {
        fields.steps
    };

    store.commit_edit(
        id,
        RecipeInput {
            name: fields.name.unwrap_or(draft.name),
            ingredients: fields.ingredients.unwrap_or(draft.ingredients),
            steps,
            category: fields.category.unwrap_or(draft.category),
            image,
        },
    )?;

    println!("Updated recipe {}", id);
    print!("{}", Renderer::render(&store.list()));

    Ok(())
}

fn handle_delete(args: &[String]) -> Result<()> {
    let id = parse_id(args)?;
    let mut store = open_store()?;

    let removed = store.delete(id)?;
    println!("Deleted '{}'", removed.name);
    print!("{}", Renderer::render(&store.list()));

    Ok(())
}

fn parse_id(args: &[String]) -> Result<Uuid> {
    match args.first() {
        Some(raw) => parse_one_id(raw),
        None => Err(PantryError::Generic(
            "Error: No recipe id provided".to_string(),
        )),
    }
}

fn parse_one_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| PantryError::Generic(format!("'{}' is not a valid recipe id", raw)))
}

fn open_store() -> Result<RecipeStore> {
    let backend = FileBackend::open_default()?;
    RecipeStore::load(Arc::new(backend) as Arc<dyn KvBackend>)
}

fn print_usage() {
    println!(
        r#"recipe-pantry v{} - Your recipe box, on disk

USAGE:
    recipe-pantry <COMMAND> [OPTIONS]

COMMANDS:
    add [flags]            Add a recipe
    list                   Show all recipes
    search <query>         Search by name, ingredients, or category
    view <id>              Show one recipe in full
    edit <id> [flags]      Update a recipe (only the flags you pass change)
    delete <id>            Remove a recipe
    version                Show version
    help                   Show this help

ADD/EDIT FLAGS:
    --name <name>              Recipe name
    --ingredients <text>       Ingredients, free text
    --step <text>              A cooking step; repeat for more steps
    --category <text>          Category, free text
    --image <path>             Attach an image file

EXAMPLES:
    recipe-pantry add --name Tea --ingredients "water,leaves" \
        --step boil --step steep --category drink
    recipe-pantry search drink
    recipe-pantry edit 6f9619ff-8b86-4d01-b42d-00cf4fc964ff --name "Green Tea"

Recipes are stored in ~/.recipe-pantry/recipes.json
"#,
        env!("CARGO_PKG_VERSION")
    );
}
