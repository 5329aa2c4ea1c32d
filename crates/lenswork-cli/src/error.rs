use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("storage budget") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  The gallery is at its storage limit. Delete older photos:");
        eprintln!("  {} lenswork delete <photo-id>", "$".dimmed());
    }

    if msg.contains("owner session") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Open the owner session first:");
        eprintln!("  {} lenswork login", "$".dimmed());
    }

    if msg.contains("incorrect owner key") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Access denied. Double-check the key and try again.");
    }

    std::process::exit(1);
}
