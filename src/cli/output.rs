//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for an exhaustive state sweep
pub fn create_sweep_progress(total_states: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_states);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} states ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
