use nextup::cli::{internal_error, is_internal, run};

fn main() {
    env_logger::init();
    // No-op outside Windows
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        if is_internal(&e) {
            internal_error(&e);
        }
        // User error
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
