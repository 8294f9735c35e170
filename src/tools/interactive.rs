//! Interactive assistant loop
//!
//! Prompts for queries on stdin until the user leaves. Empty input gets a
//! user-facing warning before the engine is ever invoked; "not found" is a
//! message, not a failure of the loop.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::cache::SessionCache;
use crate::cli::QueryArgs;
use crate::error::AppError;

use super::query::execute_query;

const EXIT_WORDS: [&str; 3] = ["salir", "exit", "q"];

/// Run the interactive loop until EOF or an exit word.
pub fn run_interactive(cache: &mut SessionCache) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // Warm the cache up front so the first query is not the slow one
    let records = cache.catalog().len();
    info!("Interactive session started with {} catalog records", records);

    println!("Asistente aduanal — catálogo de errores ({} registros)", records);
    println!("Ingrese un código o descripción (ejemplo: \"codigo 2350\" o \"tipo de cambio\").");
    println!("Escriba \"salir\" para terminar.\n");

    let mut line = String::new();
    loop {
        print!("consulta> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            println!("Por favor ingrese un código o descripción válida.\n");
            continue;
        }
        if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
            break;
        }

        let args = QueryArgs {
            query: input.to_string(),
            limit: None,
            json: false,
        };
        match execute_query(&args, cache) {
            Ok(output) => println!("{}", output),
            Err(AppError::NotFound(msg)) => println!("⚠️ {}\n", msg),
            Err(AppError::InvalidInput(msg)) => println!("⚠️ {}\n", msg),
            Err(e) => return Err(e),
        }
    }

    println!("Hasta luego.");
    Ok(())
}
