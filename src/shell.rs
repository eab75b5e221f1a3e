//! Line-oriented terminal front end for [`ContactsController`].

use std::fmt::{Display, Formatter};
use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::types::{ContactId, TypeConstraintError};
use crate::forms::FormError;
use crate::forms::contact::ContactField;
use crate::notifications::NotificationSink;
use crate::pagination::page_links;
use crate::repository::{ContactReader, ContactWriter};
use crate::services::contacts::{ContactsController, ContactsView};

pub const HELP: &str = "\
Commands:
  refresh | r             reload the current page
  next | n                go to the next page
  prev | p                go to the previous page
  page <n>                go to page n
  add                     show or hide the add-contact form
  name|email|phone <v>    fill a form field
  submit                  create a contact from the form
  delete | rm <id>        delete a contact
  help                    show this text
  quit | exit             leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid page number: {0}")]
    InvalidPage(String),

    #[error("invalid contact id: {0}")]
    InvalidId(#[from] TypeConstraintError),

    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Refresh,
    Next,
    Previous,
    Page(u32),
    ToggleForm,
    SetField(ContactField, String),
    Submit,
    Delete(ContactId),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_lowercase().as_str() {
            "help" | "h" | "?" => Command::Help,
            "refresh" | "r" | "list" | "ls" => Command::Refresh,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "page" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("page number"));
                }
                let page = rest
                    .parse::<u32>()
                    .map_err(|_| ShellError::InvalidPage(rest.to_string()))?;
                Command::Page(page)
            }
            "add" => Command::ToggleForm,
            "name" | "email" | "phone" => {
                let field = head.parse::<ContactField>()?;
                Command::SetField(field, rest.to_string())
            }
            "submit" => Command::Submit,
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("contact id"));
                }
                Command::Delete(ContactId::new(rest)?)
            }
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(head.to_string())),
        };

        Ok(command)
    }
}

impl Display for ContactsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Contact List ({})", self.window.total())?;

        if self.form.open {
            writeln!(f, "--- new contact ---")?;
            writeln!(f, "  name:  {}", self.form.name)?;
            writeln!(f, "  email: {}", self.form.email)?;
            writeln!(f, "  phone: {}", self.form.phone)?;
            writeln!(f, "  (type `submit` to save)")?;
        }

        if self.loading {
            writeln!(f, "loading...")?;
        }

        if self.contacts.is_empty() {
            writeln!(f, "  (no contacts)")?;
        }
        for contact in &self.contacts {
            writeln!(f, "- {} [{}]", contact.name, contact.id)?;
            writeln!(f, "  Email: {}", contact.email)?;
            writeln!(f, "  Phone: {}", contact.phone)?;
        }

        let links = page_links(self.window.total_pages(), self.window.page())
            .into_iter()
            .map(|link| match link {
                Some(page) if page == self.window.page() => format!("[{page}]"),
                Some(page) => page.to_string(),
                None => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        write!(
            f,
            "Page {} of {} totalPages",
            self.window.page(),
            self.window.total_pages()
        )?;
        if !links.is_empty() {
            write!(f, "  {links}")?;
        }
        Ok(())
    }
}

/// Applies one command to the controller. Returns `false` once the user asked
/// to leave.
pub async fn execute<R, N>(controller: &ContactsController<R, N>, command: Command) -> bool
where
    R: ContactReader + ContactWriter,
    N: NotificationSink,
{
    let result = match command {
        Command::Quit => return false,
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Refresh => controller.refresh().await.map(|_| ()),
        Command::Next => match controller.next_page().await {
            Some(result) => result.map(|_| ()),
            None => {
                println!("Already on the last page");
                Ok(())
            }
        },
        Command::Previous => match controller.previous_page().await {
            Some(result) => result.map(|_| ()),
            None => {
                println!("Already on the first page");
                Ok(())
            }
        },
        Command::Page(page) => controller.request_page(page).await.map(|_| ()),
        Command::ToggleForm => {
            controller.toggle_form();
            Ok(())
        }
        Command::SetField(field, value) => {
            controller.set_form_field(field, value);
            Ok(())
        }
        Command::Submit => controller.submit_form().await,
        Command::Delete(id) => controller.remove(&id).await,
    };

    if let Err(err) = result {
        log::debug!("Command failed: {err}");
    }
    println!("{}", controller.view());
    true
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

/// Loads the first page and then reads commands from stdin until `quit` or
/// end of input.
pub async fn run_shell<R, N>(controller: &ContactsController<R, N>) -> std::io::Result<()>
where
    R: ContactReader + ContactWriter,
    N: NotificationSink,
{
    if let Err(err) = controller.refresh().await {
        log::debug!("Initial load failed: {err}");
    }
    println!("{}", controller.view());
    println!("Type `help` for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if !execute(controller, command).await {
                    break;
                }
            }
            Err(err) => println!("{err}; type `help` for commands"),
        }
        prompt()?;
    }

    Ok(())
}
