use clap::Parser;
use tagline::application::{init, retag_notes, ConfigService, RetagOptions, TagEdit, TagsService};
use tagline::cli::{format_retag_report, format_tag_list, Cli, Commands};
use tagline::domain::Placement;
use tagline::error::TaglineError;
use tagline::infrastructure::{FileSystemRepository, NoteRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TaglineError> {
    match cli.command {
        Commands::Init {
            path,
            placement,
            marker,
        } => {
            let placement = Placement::from_str(&placement).map_err(TaglineError::Config)?;

            init::init(&path, placement, marker)
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("placement = {}", config.placement.as_str());
                println!("marker = {}", config.marker);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagline config [--list | <key> [<value>]]");
                println!("Valid keys: placement, marker, created");
                Ok(())
            }
        }
        Commands::Tags { file, recursive } => {
            let repo = FileSystemRepository::discover()?;
            let marker = repo.load_config()?.marker;
            let service = TagsService::new(repo);

            match file {
                Some(filename) => match service.note_tags(&filename)? {
                    Some(tags) => {
                        print!("{}", format_tag_list(&tags, marker));
                        Ok(())
                    }
                    None => {
                        println!("No tag line found in {}", filename);
                        Ok(())
                    }
                },
                None => {
                    let tags = service.all_tags(recursive)?;
                    print!("{}", format_tag_list(&tags, marker));
                    Ok(())
                }
            }
        }
        Commands::Rename {
            old_tag,
            new_tag,
            file,
            recursive,
            dry_run,
        } => {
            let repo = FileSystemRepository::discover()?;
            let report = retag_notes(
                &repo,
                RetagOptions {
                    edit: TagEdit::Rename { old_tag, new_tag },
                    file,
                    recursive,
                    dry_run,
                },
            )?;
            print!("{}", format_retag_report(&report));
            Ok(())
        }
        Commands::Remove {
            tag,
            file,
            recursive,
            dry_run,
        } => {
            let repo = FileSystemRepository::discover()?;
            let report = retag_notes(
                &repo,
                RetagOptions {
                    edit: TagEdit::Remove { tag },
                    file,
                    recursive,
                    dry_run,
                },
            )?;
            print!("{}", format_retag_report(&report));
            Ok(())
        }
    }
}
