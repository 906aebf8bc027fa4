use colored::*;
use std::io::{self, Write};

const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

// painstakingly hand-crafted ASCII art coloring, one color per letter-ish
#[rustfmt::skip]
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}{}{}{}{}", "     _     ".red().bold(), "     ".yellow().bold(), "         ".green().bold(), "     ".cyan().bold(), "                ".blue().bold())?;
    writeln!(out, "{}{}{}{}{}", " ___| |__  ".red().bold(), " ____".yellow().bold(), "_      __".green().bold(), "___ _".cyan().bold(), "_ _ ___  ___    ".blue().bold())?;
    writeln!(out, "{}{}{}{}{}", "/ __| '_ \\ ".red().bold(), "/ _ \\".yellow().bold(), " \\ /\\ / /".green().bold(), " __/ ".cyan().bold(), "_` / __|/ _ \\   ".blue().bold())?;
    writeln!(out, "{}{}{}{}{}", "\\__ \\ | | |".red().bold(), " (_) ".yellow().bold(), "\\ V  V / ".green().bold(), "(_| (".cyan().bold(), "_| \\__ \\  __/   ".blue().bold())?;
    writeln!(out, "{}{}{}{}{}", "|___/_| |_|".red().bold(), "\\___/".yellow().bold(), " \\_/\\_/ \\".green().bold(), "___\\_".cyan().bold(), "_,_|___/\\___|   ".blue().bold())?;
    Ok(())
}

/// Colors every visible character, walking the palette; spaces stay plain
/// and don't advance it.
pub fn rainbow(text: &str) -> String {
    let mut palette = RAINBOW.iter().cycle();
    text.chars()
        .map(|c| match c {
            ' ' => c.to_string(),
            _ => match palette.next() {
                Some(color) => c.to_string().color(*color).bold().to_string(),
                None => c.to_string(),
            },
        })
        .collect()
}

pub fn section(title: &str) -> String {
    format!("{} {}", "==>".magenta().bold(), title.cyan().bold())
}
