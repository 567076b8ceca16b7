//! CLI tool to load the initial bridge inventory.
//!
//! Usage:
//!   cargo run --bin load-bridge-data
//!   cargo run --bin load-bridge-data -- --skip-migrations
//!
//! Safe to run repeatedly: existing bridges and traffic snapshots are left
//! untouched.

use std::env;

use bridge_records_lib::config::Config;
use bridge_records_lib::db::DbPool;
use bridge_records_lib::services::load_initial_data;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut run_migrations = true;

    for arg in &args {
        match arg.as_str() {
            "--skip-migrations" => run_migrations = false,
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
    }

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match DbPool::new(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    if run_migrations && let Err(e) = pool.run_migrations().await {
        eprintln!("Error running migrations: {}", e);
        std::process::exit(1);
    }

    match load_initial_data(&pool).await {
        Ok(summary) => {
            for name in &summary.bridges_created {
                println!("Created {}", name);
            }
            if summary.traffic_created > 0 {
                println!("Created {} traffic snapshot(s)", summary.traffic_created);
            }
            println!("Data loaded successfully!");
        }
        Err(e) => {
            eprintln!("Error loading bridge data: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Bridge Data Loader");
    println!();
    println!("Usage:");
    println!("  load-bridge-data [--skip-migrations]");
    println!();
    println!("Options:");
    println!("  --skip-migrations   Assume the schema is already up to date");
    println!("  -h, --help          Show this help");
    println!();
    println!("Environment:");
    println!("  RUST_ENV       development | production (required)");
    println!("  DATABASE_URL   PostgreSQL connection string");
}
