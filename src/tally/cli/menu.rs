//! Interactive numbered menu.
//!
//! Reads line-oriented input and writes line-oriented output. Every error is
//! shown and the loop carries on; only option 6 or end of input leaves it.

use super::render::{format_amount, render_articles, render_error, render_messages};
use std::io::{self, BufRead, Write};
use tally::api::{CmdMessage, CmdResult, TallyApi};
use tally::commands::list::NO_RECORDS;
use tally::error::Result;
use tally::model::{Article, ArticleEdit, NewArticle, SearchField};
use tally::store::DataStore;

const MENU: &str = "\
=== Inventory & Budget Ledger ===
1. Register article
2. List articles
3. Search articles
4. Edit article
5. Delete article
6. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Create,
    List,
    Search,
    Edit,
    Delete,
    Exit,
}

impl Choice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Choice::Create),
            "2" => Some(Choice::List),
            "3" => Some(Choice::Search),
            "4" => Some(Choice::Edit),
            "5" => Some(Choice::Delete),
            "6" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut TallyApi<S>,
    input: R,
    out: W,
    eof: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut TallyApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            eof: false,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            write!(self.out, "{}", MENU)?;
            let choice = self.prompt("Select an option (1-6): ")?;
            if self.eof && choice.is_empty() {
                writeln!(self.out)?;
                writeln!(self.out, "Exiting...")?;
                return Ok(());
            }

            let outcome = match Choice::parse(&choice) {
                Some(Choice::Create) => self.create(),
                Some(Choice::List) => self.list(),
                Some(Choice::Search) => self.search(),
                Some(Choice::Edit) => self.edit(),
                Some(Choice::Delete) => self.delete(),
                Some(Choice::Exit) => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    let invalid = CmdMessage::error("Invalid option. Please try again.");
                    write!(self.out, "{}", render_messages(&[invalid]))?;
                    Ok(None)
                }
            };

            match outcome {
                Ok(Some(result)) => self.show(&result)?,
                Ok(None) => {}
                Err(ActionError::Io(e)) => return Err(e),
                Err(ActionError::Tally(e)) => write!(self.out, "{}", render_error(&e))?,
            }
            writeln!(self.out)?;
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        if !result.listed_articles.is_empty() {
            write!(self.out, "{}", render_articles(&result.listed_articles))?;
        }
        write!(self.out, "{}", render_messages(&result.messages))
    }

    /// Mirrors the "nothing registered yet" short-circuit for options that
    /// would otherwise prompt against an empty ledger.
    fn require_articles(&mut self) -> ActionResult<bool> {
        if self.api.has_articles()? {
            return Ok(true);
        }
        let empty = CmdResult {
            messages: vec![CmdMessage::info(NO_RECORDS)],
            ..Default::default()
        };
        self.show(&empty)?;
        Ok(false)
    }

    fn create(&mut self) -> ActionResult<Option<CmdResult>> {
        writeln!(self.out, "\n--- Register New Article ---")?;
        let name = self.prompt("Name: ")?;
        let category = self.prompt("Category: ")?;
        let quantity = self.prompt("Quantity: ")?;
        let unit_price = self.prompt("Unit price: ")?;
        let description = self.prompt("Description: ")?;

        let input =
            NewArticle::new(name, category, quantity, unit_price).with_description(description);
        Ok(Some(self.api.create_article(input)?))
    }

    fn list(&mut self) -> ActionResult<Option<CmdResult>> {
        let result = self.api.list_articles()?;
        if !result.listed_articles.is_empty() {
            writeln!(self.out, "\n--- Article List ---")?;
        }
        Ok(Some(result))
    }

    fn search(&mut self) -> ActionResult<Option<CmdResult>> {
        if !self.require_articles()? {
            return Ok(None);
        }
        let field = self.prompt("Search by (name/category): ")?;
        let parsed: SearchField = field.parse().map_err(ActionError::Tally)?;
        let value = self.prompt(&format!("Enter the {} to search: ", parsed))?;

        let result = self.api.search_articles(parsed.as_str(), &value)?;
        if !result.listed_articles.is_empty() {
            writeln!(self.out, "\n--- Search Results ---")?;
        }
        Ok(Some(result))
    }

    fn edit(&mut self) -> ActionResult<Option<CmdResult>> {
        if !self.require_articles()? {
            return Ok(None);
        }
        let id = self.prompt("ID of the article to edit: ")?;
        let current = self.api.get_article(&id)?;
        writeln!(self.out, "Editing article: {}", current.name)?;

        let edit = self.prompt_edit(&current)?;
        Ok(Some(self.api.edit_article(&id, &edit)?))
    }

    fn prompt_edit(&mut self, current: &Article) -> io::Result<ArticleEdit> {
        Ok(ArticleEdit {
            name: Some(self.prompt(&format!("Name [{}]: ", current.name))?),
            category: Some(self.prompt(&format!("Category [{}]: ", current.category))?),
            quantity: Some(self.prompt(&format!(
                "Quantity [{}]: ",
                format_amount(current.quantity)
            ))?),
            unit_price: Some(self.prompt(&format!(
                "Price [{}]: ",
                format_amount(current.unit_price)
            ))?),
            description: Some(
                self.prompt(&format!("Description [{}]: ", current.description))?,
            ),
        })
    }

    fn delete(&mut self) -> ActionResult<Option<CmdResult>> {
        if !self.require_articles()? {
            return Ok(None);
        }
        let id = self.prompt("ID of the article to delete: ")?;
        Ok(Some(self.api.delete_article(&id)?))
    }
}

/// Menu actions fail either on the terminal (fatal) or in the ledger
/// (reported, then the loop continues).
enum ActionError {
    Io(io::Error),
    Tally(tally::error::TallyError),
}

type ActionResult<T> = std::result::Result<T, ActionError>;

impl From<io::Error> for ActionError {
    fn from(e: io::Error) -> Self {
        ActionError::Io(e)
    }
}

impl From<tally::error::TallyError> for ActionError {
    fn from(e: tally::error::TallyError) -> Self {
        ActionError::Tally(e)
    }
}

/// Runs the menu until the user exits or input ends.
pub fn run_menu<S, R, W>(api: &mut TallyApi<S>, input: R, out: W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    Menu::new(api, input, out).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally::store::memory::InMemoryStore;

    fn pen() -> Article {
        Article {
            id: 1,
            name: "Pen".into(),
            category: "Office".into(),
            quantity: 10.0,
            unit_price: 0.5,
            description: String::new(),
        }
    }

    fn drive(store: InMemoryStore, script: &str) -> (TallyApi<InMemoryStore>, String) {
        let mut api = TallyApi::new(store, std::env::temp_dir().join("tally-menu-tests"));
        let mut out = Vec::new();
        run_menu(&mut api, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_option_ends_loop() {
        let (_, out) = drive(InMemoryStore::new(), "6\n");
        assert!(out.contains("1. Register article"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn end_of_input_ends_loop() {
        let (_, out) = drive(InMemoryStore::new(), "");
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn invalid_option_reprompts() {
        let (_, out) = drive(InMemoryStore::new(), "9\n6\n");
        assert!(out.contains("Invalid option. Please try again."));
        assert_eq!(out.matches("Select an option").count(), 2);
    }

    #[test]
    fn register_then_list() {
        let (api, out) = drive(
            InMemoryStore::new(),
            "1\nPen\nOffice\n10\n0.5\n\n2\n6\n",
        );
        assert_eq!(api.store().articles().len(), 1);
        assert!(out.contains("Article 'Pen' registered with id 1."));
        assert!(out.contains("--- Article List ---"));
        assert!(out.contains("1     Pen"));
    }

    #[test]
    fn validation_error_is_reported_and_loop_continues() {
        let (api, out) = drive(InMemoryStore::new(), "1\nPen\nOffice\nten\n0.5\n\n6\n");
        assert!(out.contains("quantity/price must be numeric"));
        assert!(out.contains("Exiting..."));
        assert!(api.store().articles().is_empty());
    }

    #[test]
    fn list_on_empty_ledger_says_so() {
        let (_, out) = drive(InMemoryStore::new(), "2\n6\n");
        assert!(out.contains(NO_RECORDS));
    }

    #[test]
    fn search_on_empty_ledger_skips_prompts() {
        let (_, out) = drive(InMemoryStore::new(), "3\n6\n");
        assert!(out.contains(NO_RECORDS));
        assert!(!out.contains("Search by"));
    }

    #[test]
    fn search_rejects_unknown_field() {
        let (_, out) = drive(InMemoryStore::with_articles(vec![pen()]), "3\nprice\n6\n");
        assert!(out.contains("invalid search field"));
        assert!(!out.contains("Enter the"));
    }

    #[test]
    fn search_by_category() {
        let (_, out) = drive(
            InMemoryStore::with_articles(vec![pen()]),
            "3\ncategory\nOFFICE\n6\n",
        );
        assert!(out.contains("--- Search Results ---"));
        assert!(out.contains("Pen"));
    }

    #[test]
    fn edit_shows_current_values_and_keeps_blanks() {
        let (api, out) = drive(
            InMemoryStore::with_articles(vec![pen()]),
            "4\n1\n\n\n12\n\n\n6\n",
        );
        assert!(out.contains("Editing article: Pen"));
        assert!(out.contains("Quantity [10]: "));
        let edited = &api.store().articles()[0];
        assert_eq!(edited.quantity, 12.0);
        assert_eq!(edited.name, "Pen");
        assert_eq!(edited.unit_price, 0.5);
    }

    #[test]
    fn edit_unknown_id_reports_not_found() {
        let (_, out) = drive(InMemoryStore::with_articles(vec![pen()]), "4\n7\n6\n");
        assert!(out.contains("Article not found: 7"));
        assert!(!out.contains("Editing article"));
    }

    #[test]
    fn delete_by_id() {
        let (api, out) = drive(InMemoryStore::with_articles(vec![pen()]), "5\n1\n6\n");
        assert!(out.contains("Article 'Pen' deleted."));
        assert!(api.store().articles().is_empty());
    }

    #[test]
    fn delete_invalid_id_text() {
        let (api, out) = drive(InMemoryStore::with_articles(vec![pen()]), "5\nabc\n6\n");
        assert!(out.contains("invalid id"));
        assert_eq!(api.store().articles().len(), 1);
    }

    #[test]
    fn corrupt_document_is_reported_not_fatal() {
        let mut store = InMemoryStore::new();
        store.set_corrupt(true);
        let (_, out) = drive(store, "2\n6\n");
        assert!(out.contains("Corrupt articles document"));
        assert!(out.contains("Exiting..."));
    }
}
