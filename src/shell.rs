use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::{
    controller::{Action, ListController},
    export::export_file,
};

const HELP: &str = "\
commands:
  reload                        fetch the list again
  add <name...> <price>         create a book
  update <id> <name...> <price> edit a row and save it
  delete <id>                   delete a book
  show                          print the list
  export <path>                 write the list to a csv file
  help                          this text
  quit                          leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Reload,
    Add { name: String, price: String },
    Update { id: i64, name: String, price: String },
    Delete(i64),
    Show,
    Export(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, rest) = match words.split_first() {
            Some(split) => split,
            None => return Ok(None),
        };

        let command = match (*head, rest) {
            ("reload" | "r", []) => Command::Reload,
            ("show" | "ls", []) => Command::Show,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            ("add", [name @ .., price]) if !name.is_empty() => Command::Add {
                name: name.join(" "),
                price: price.to_string(),
            },
            ("update", [id, name @ .., price]) if !name.is_empty() => Command::Update {
                id: parse_id(id)?,
                name: name.join(" "),
                price: price.to_string(),
            },
            ("delete" | "rm", [id]) => Command::Delete(parse_id(id)?),
            ("export", [path]) => Command::Export(path.to_string()),
            (other, _) => return Err(format!("cannot understand {:?}; try help", other)),
        };
        Ok(Some(command))
    }
}

fn parse_id(input: &str) -> Result<i64, String> {
    input
        .parse()
        .map_err(|_| format!("{:?} is not a book id", input))
}

/// Read commands line by line until `quit` or end of input. Failed actions
/// are reported and the loop carries on with the view as it was.
pub async fn run<R, W>(controller: &mut ListController, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match controller.start().await {
        Ok(()) => write!(out, "{}", controller.view())?,
        Err(e) => writeln!(out, "error: {}", e)?,
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Show => {
                write!(out, "{}", controller.view())?;
                continue;
            }
            Command::Export(path) => {
                match export_file(&path, controller.view().rows()) {
                    Ok(count) => writeln!(out, "wrote {} rows to {}", count, path)?,
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "error: {}", e)?;
                    }
                }
                continue;
            }
            Command::Reload => controller.reload().await,
            Command::Add { name, price } => controller.add(&name, &price).await,
            Command::Update { id, name, price } => controller.edit(id, &name, &price).await,
            Command::Delete(id) => controller.press(Action::Delete(id)).await,
        };

        match result {
            Ok(()) => write!(out, "{}", controller.view())?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }
    Ok(())
}
