use colored::Colorize;
use tagger::api::{CmdMessage, ListedFile, MessageLevel};
use tagger::config::TaggerConfig;
use tagger::model::Tag;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per file: `<uuid> <path>`, with the add time first when `long`.
pub(super) fn format_files(files: &[ListedFile], long: bool) -> Vec<String> {
    files
        .iter()
        .map(|listed| {
            let base = format!("{} {}", listed.file.id(), listed.file.path());
            match (long, listed.added_at) {
                (true, Some(at)) => format!("{}  {}", at.format(TIME_FORMAT), base),
                (true, None) => format!("{:<16}  {}", "-", base),
                (false, _) => base,
            }
        })
        .collect()
}

pub(super) fn print_files(files: &[ListedFile], long: bool) {
    for line in format_files(files, long) {
        println!("{}", line);
    }
}

/// Tags print as `name` or `name=value`, one per line.
pub(super) fn print_tags(tags: &[Tag]) {
    for tag in tags {
        match tag.as_value() {
            Some(value) => println!("{}={}", tag.name().bold(), value),
            None => println!("{}", tag.name().bold()),
        }
    }
}

pub(super) fn print_config(config: &TaggerConfig) {
    for (key, value) in config.list_all() {
        println!("{} = {}", key.cyan(), value);
    }
}
