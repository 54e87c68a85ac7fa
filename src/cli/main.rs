//! # strata shell
//!
//! An interactive REPL for strata-db. Outside a database the shell is in
//! engine mode (`CREATE DATABASE x;`, `DROP DATABASE x;`, or a bare name
//! to enter); inside one, every line is forwarded verbatim to
//! `Database::run_query` and the outcome is rendered.

use std::env;
use std::io::{self, BufRead, Write};

use strata::session::Engine;
use strata::sql::ast::EngineCommand;
use strata::{BatchOutcome, ResultSet, StatementOutput};

fn main() {
    let args: Vec<String> = env::args().collect();
    let data_dir = if args.len() > 1 {
        args[1].clone()
    } else {
        ".".to_string()
    };

    println!("strata-db v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter \".help\" for usage hints.");
    println!("Data directory: {data_dir}");

    let mut engine = Engine::new(&data_dir);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = match engine.current() {
            Some(db) => format!("{}> ", db.name()),
            None => "strata> ".to_string(),
        };
        print!("{prompt}");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => break,
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('.') {
            if handle_dot_command(trimmed, &mut engine) {
                break;
            }
            continue;
        }

        if engine.current().is_some() {
            run_statements(&mut engine, trimmed);
        } else {
            run_engine_command(&mut engine, trimmed);
        }
    }

    if let Err(e) = engine.save_current() {
        eprintln!("Error saving database: {e}");
    }
    println!();
}

/// Handle a dot-command. Returns `true` when the shell should exit.
fn handle_dot_command(command: &str, engine: &mut Engine) -> bool {
    match command {
        ".exit" | ".quit" => return true,
        ".help" => {
            println!(".exit            Save the current database and quit");
            println!(".help            Show this message");
            println!(".save            Persist the current database now");
            println!(".tables          List tables in the current database");
            println!();
            println!("Without a database: CREATE DATABASE x; / DROP DATABASE x; / x");
            println!("Inside a database:  CREATE TABLE / INSERT INTO / SELECT");
        }
        ".save" => match engine.save_current() {
            Ok(()) => println!("Saved."),
            Err(e) => eprintln!("Error: {e}"),
        },
        ".tables" => match engine.current() {
            Some(db) => {
                for name in db.table_names() {
                    println!("{name}");
                }
            }
            None => println!("No database selected."),
        },
        _ => println!("Unknown command: {command}"),
    }
    false
}

fn run_engine_command(engine: &mut Engine, line: &str) {
    match engine.run_command(line) {
        Ok(EngineCommand::CreateDatabase(name)) => println!("Database {name} created."),
        Ok(EngineCommand::DropDatabase(name)) => println!("Database {name} dropped."),
        Ok(EngineCommand::Enter(name)) => println!("Entered database {name}."),
        Err(e) => eprintln!("Error: {e}"),
    }
}

fn run_statements(engine: &mut Engine, line: &str) {
    let Some(db) = engine.current_mut() else {
        return;
    };
    let outcome = db.run_query(line);
    render_outcome(&outcome);
}

fn render_outcome(outcome: &BatchOutcome) {
    for diagnostic in &outcome.diagnostics {
        eprintln!("[lexer] line {}: {}", diagnostic.line, diagnostic.message);
    }
    for result in &outcome.results {
        match result {
            Ok(StatementOutput::Created { table }) => println!("Created table {table}."),
            Ok(StatementOutput::Inserted { table }) => println!("Inserted 1 row into {table}."),
            Ok(StatementOutput::Rows(result_set)) => print_result_set(result_set),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn print_result_set(result: &ResultSet) {
    if result.columns.is_empty() {
        return;
    }

    // Column widths from the header and every row.
    let mut widths: Vec<usize> = result.columns.iter().map(|c| c.len()).collect();
    for row in &result.rows {
        for (i, value) in row.iter().enumerate() {
            if i < widths.len() && value.len() > widths[i] {
                widths[i] = value.len();
            }
        }
    }

    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:<w$}"))
        .collect();
    println!("{}", header.join(" | "));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("-+-"));

    for row in &result.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, &w)| format!("{value:<w$}"))
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!("({} rows)", result.rows.len());
}
