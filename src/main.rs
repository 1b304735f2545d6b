use etiqueta::cli::run;
use etiqueta::error::ClassifyError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    // Color swatches need virtual terminal processing on Windows; elsewhere this is a no-op
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        // Table and configuration errors are user errors; anything else is internal
        if e.chain().any(|cause| cause.downcast_ref::<ClassifyError>().is_some()) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }

        eprintln!("Internal error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
