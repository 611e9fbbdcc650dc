use colored::Colorize;

/// Rendered tables go to stdout untouched so they stay pipeable.
pub fn table(rendered: &str) {
    print!("{}", rendered);
}

pub fn hint(msg: &str) {
    eprintln!("{} {}", "hint:".cyan().bold(), msg.dimmed());
}

/// The single line printed for any failed invocation.
pub fn error(msg: &str) {
    eprintln!("{} {}", "Error executing command:".red().bold(), msg);
}
