use clap::Parser;
use motto::application::{
    init::init, AddQuoteService, CategoriesService, ExportQuotesService, FilterService,
    ImportQuotesService, ShowOutcome, ShowQuoteService,
};
use motto::cli::{empty_pick_message, format_category_list, format_quote, Cli, Commands};
use motto::domain::CategoryFilter;
use motto::error::MottoError;
use motto::infrastructure::{FileSystemStore, QuoteRepository, SessionCache};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MottoError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Show { category }) => {
            let store = FileSystemStore::discover()?;
            let session = SessionCache::for_store(store.root());
            let service = ShowQuoteService::new(store, session);

            let outcome = service.pick_new(category.as_deref())?;
            print_outcome(&outcome);
            Ok(())
        }
        Some(Commands::Add { text, category }) => {
            let store = FileSystemStore::discover()?;
            let service = AddQuoteService::new(store);

            let quote = service.execute(&text, &category)?;
            println!("Added quote:");
            print!("{}", format_quote(&quote));
            Ok(())
        }
        Some(Commands::Categories) => {
            let store = FileSystemStore::discover()?;
            let service = CategoriesService::new(store);

            let categories = service.execute()?;
            print!("{}", format_category_list(&categories));
            Ok(())
        }
        Some(Commands::Filter { category, clear }) => {
            let store = FileSystemStore::discover()?;
            let service = FilterService::new(store.clone());

            if clear {
                service.clear()?;
                println!("Filter cleared");
                Ok(())
            } else if let Some(category) = category {
                let filter = service.set(&category)?;
                println!("Filter set to '{}'", filter);

                // The filter may name a category with no quotes yet
                let known = CategoriesService::new(store).execute()?;
                if filter != CategoryFilter::All && !known.contains(&filter.to_string()) {
                    println!("Note: no stored quotes in category '{}' yet", filter);
                }
                Ok(())
            } else {
                println!("{}", service.get()?);
                Ok(())
            }
        }
        Some(Commands::Import { file }) => {
            let store = FileSystemStore::discover()?;
            let service = ImportQuotesService::new(store);

            let merged = service.execute(&file)?;
            println!("Imported {} quotes", merged);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let store = FileSystemStore::discover()?;
            let service = ExportQuotesService::new(store);

            let count = service.execute(&output)?;
            println!("Exported {} quotes to {}", count, output.display());
            Ok(())
        }
        None => {
            // Bare invocation: restore this session's last quote, or pick one
            let store = FileSystemStore::discover()?;
            let session = SessionCache::for_store(store.root());
            let service = ShowQuoteService::new(store, session);

            let outcome = service.current()?;
            print_outcome(&outcome);
            Ok(())
        }
    }
}

fn print_outcome(outcome: &ShowOutcome) {
    match &outcome.quote {
        Some(quote) => print!("{}", format_quote(quote)),
        None => println!("{}", empty_pick_message(&outcome.filter)),
    }
}
