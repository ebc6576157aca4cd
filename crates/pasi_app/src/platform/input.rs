use std::fs;
use std::path::Path;

use pasi_core::{FileHandle, Msg};

pub const HELP: &str = "commands: click | enter | leave | pick <path>... | drop <path>... | quit";

/// One line typed by the user, standing in for a DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Command::Msg(Msg::NoOp);
    };
    let paths: Vec<&str> = words.collect();
    match verb {
        "click" | "next" => Command::Msg(Msg::QuizClicked),
        "enter" | "dragover" => Command::Msg(Msg::DragEntered),
        "leave" | "dragleave" => Command::Msg(Msg::DragLeft),
        "pick" => Command::Msg(Msg::FilesDropped {
            picker: file_list(&paths),
            dropped: Vec::new(),
        }),
        "drop" => Command::Msg(Msg::FilesDropped {
            picker: Vec::new(),
            dropped: file_list(&paths),
        }),
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn file_list(paths: &[&str]) -> Vec<FileHandle> {
    paths.iter().map(|path| file_handle(Path::new(path))).collect()
}

/// Builds a handle from file metadata. Unreadable paths get a zero size and are
/// skipped by the selection rules like any other empty file.
fn file_handle(path: &Path) -> FileHandle {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let byte_size = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map_or(0, |meta| meta.len());
    FileHandle::new(name, byte_size, path)
}
