use labl::cli::run;
use labl::models::LabelError;

fn main() {
    if let Err(e) = run() {
        // Malformed input and unknown override keys are user errors;
        // anything else (broken pipe, serializer failure) is internal
        let is_user_error = e.downcast_ref::<LabelError>().is_some()
            || e.downcast_ref::<std::io::Error>().is_some();
        if is_user_error {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }

        eprintln!("Internal error: {}", e);
        let mut causes = e.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            for err in causes {
                eprintln!("{:indent$}  {}", "", err);
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
