use std::{fs, path::Path, process};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = if config::is_dsn(&db_path) {
        db_path.clone()
    } else {
        format!("sqlite://{}?mode=rwc", db_path)
    };

    let result = match std::env::args().nth(1).as_deref() {
        Some("clean") => {
            remove_db_file(&db_path);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await
        }
        Some("up") | None => {
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'. Expected one of: up, fresh, clean");
            process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("Migration failed: {err}");
        process::exit(1);
    }
}

fn remove_db_file(path: &str) {
    if config::is_dsn(path) {
        println!("Not a database file, skipping delete: {}", path);
        return;
    }

    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(err) => {
            eprintln!("Failed to delete {}: {err}", db_path.display());
            process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if config::is_dsn(path) {
        return;
    }
    if let Some(parent) = Path::new(path).parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {err}", parent.display());
            process::exit(1);
        }
    }
}
