use bank_account::common::error::AppError;

fn main() {
    match bank_account::app::run(std::env::args()) {
        Ok(()) => {}
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
