pub mod query;
pub mod stats;
pub mod validate;

/// Run a command body, mapping its error to a process exit code.
pub fn run_command<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), String>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
