//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `productive_core` linkage.
//! - Run one create/list/toggle round over an in-memory database.
//! - Keep output deterministic for quick local sanity checks.

use productive_core::db::open_db_in_memory;
use productive_core::{CreateTodoRequest, SqliteTodoRepository, TodoService};

fn main() {
    println!("productive_core version={}", productive_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("smoke=db_open status=error error={err}");
            std::process::exit(1);
        }
    };
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    let request = CreateTodoRequest {
        title: "smoke check".to_string(),
        ..CreateTodoRequest::default()
    };
    let created = match service.create_todo(&request) {
        Ok(todo) => todo,
        Err(err) => {
            eprintln!("smoke=create status=error error={err}");
            std::process::exit(1);
        }
    };
    println!("smoke=create status=ok title={}", created.title);

    match service.toggle_todo(&created.id) {
        Ok(todo) => println!("smoke=toggle status=ok completed={}", todo.completed),
        Err(err) => {
            eprintln!("smoke=toggle status=error error={err}");
            std::process::exit(1);
        }
    }

    match service.get_all_todos() {
        Ok(todos) => println!("smoke=list status=ok count={}", todos.len()),
        Err(err) => {
            eprintln!("smoke=list status=error error={err}");
            std::process::exit(1);
        }
    }
}
