// Line commands for the interactive shell.
//
// Each command reads from or writes to the store through the ParkStore
// trait and renders plain text. No store logic lives here.

use parks_core::display::FeaturePreview;
use parks_core::submission::FEATURE_OPTIONS;
use parks_core::{
    CollectionSummary, DisplayConfig, MarkerCategory, Park, ParkId, ParkPatch, ParkStore,
    SubmissionForm, display_order, handoff,
};
use std::fmt::Write;

pub const HELP: &str = "\
Commands:
  list                      Parks, newest submissions first
  directory                 Parks with their map marker category
  show <id>                 Full details for one park
  add name=..; address=..; rating=1-5; features=a,b; description=..
                            Submit a new park
  rate <id> <rating>        Change a park's rating
  summary                   Collection counts
  features                  Feature tags offered when adding a park
  help                      This message
  quit                      Exit";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Directory,
    Show(ParkId),
    Add(SubmissionForm),
    Rate(ParkId, f64),
    Summary,
    Features,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "directory" | "map" => Ok(Command::Directory),
            "show" => {
                if rest.is_empty() {
                    return Err("usage: show <id>".to_string());
                }
                Ok(Command::Show(ParkId::from(rest)))
            }
            "add" => parse_form(rest).map(Command::Add),
            "rate" => {
                let mut parts = rest.split_whitespace();
                let (Some(id), Some(rating), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err("usage: rate <id> <rating>".to_string());
                };
                let rating: f64 = rating
                    .parse()
                    .ok()
                    .filter(|r: &f64| r.is_finite())
                    .ok_or_else(|| format!("'{}' is not a number", rating))?;
                Ok(Command::Rate(ParkId::from(id), rating))
            }
            "summary" => Ok(Command::Summary),
            "features" => Ok(Command::Features),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("empty command, try 'help'".to_string()),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

fn parse_form(input: &str) -> Result<SubmissionForm, String> {
    let mut form = SubmissionForm::new();

    for field in input.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", field))?;
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "name" => form.name = value.to_string(),
            "address" => form.address = value.to_string(),
            "description" => form.description = value.to_string(),
            "rating" => {
                let stars: u8 = value
                    .parse()
                    .ok()
                    .filter(|stars| (1..=5).contains(stars))
                    .ok_or_else(|| format!("rating must be 1-5, got '{}'", value))?;
                form.set_rating(stars);
            }
            "features" => {
                for feature in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                    form.toggle_feature(feature);
                }
            }
            other => return Err(format!("unknown field '{}'", other)),
        }
    }

    Ok(form)
}

/// Executes commands against a store
pub struct Shell<S: ParkStore> {
    store: S,
    display: DisplayConfig,
}

impl<S: ParkStore> Shell<S> {
    pub fn new(store: S, display: DisplayConfig) -> Self {
        Self { store, display }
    }

    /// Run a command and render its output
    pub fn execute(&self, command: Command) -> String {
        match command {
            Command::List => self.render_list(),
            Command::Directory => self.render_directory(),
            Command::Show(id) => self.render_detail(&id),
            Command::Add(form) => match form.validate() {
                Ok(candidate) => {
                    let park = self.store.append(candidate);
                    format!("✅ Success! {} has been added (id {}).", park.name, park.id)
                }
                Err(e) => format!("❌ {}", e),
            },
            Command::Rate(id, rating) => {
                match self.store.patch(&id, ParkPatch::new().rating(rating)) {
                    Some(park) => format!("Rated {} {}.", park.name, park.rating),
                    None => format!("No park with id {}.", id),
                }
            }
            Command::Summary => {
                let summary = CollectionSummary::of(&self.store.list());
                format!(
                    "{} parks ({} submitted, {} original)",
                    summary.total, summary.user_submitted, summary.seed
                )
            }
            Command::Features => FEATURE_OPTIONS.join(", "),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn render_list(&self) -> String {
        let parks = display_order(&self.store.list());
        let mut out = format!("🐕 Windsor Dog Parks ({} parks)\n", parks.len());

        for park in &parks {
            let badge = if park.is_user_submitted() { " NEW!" } else { "" };
            let _ = writeln!(out, "\n[{}] {} ★ {}{}", park.id, park.name, park.rating, badge);
            let _ = writeln!(out, "    {}", park.address);
            let _ = writeln!(out, "    {}", self.feature_line(park));
            if !park.description.is_empty() {
                let _ = writeln!(out, "    {}", park.description);
            }
        }

        out
    }

    fn render_directory(&self) -> String {
        let parks = display_order(&self.store.list());
        let mut out = String::new();

        for park in &parks {
            let marker = MarkerCategory::of(park);
            let _ = writeln!(
                out,
                "{} [{}] {} ★ {} • {} features",
                marker.color(),
                park.id,
                park.name,
                park.rating,
                park.features.len()
            );
        }

        out
    }

    fn render_detail(&self, id: &ParkId) -> String {
        let Some(park) = self.store.get(id) else {
            return format!("No park with id {}.", id);
        };

        // Same path the detail view takes: serialize, hand off, decode.
        let park = match handoff::encode(&park).and_then(|payload| handoff::decode(&payload)) {
            Ok(park) => park,
            Err(e) => return format!("❌ {}", e),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", park.name);
        let _ = writeln!(out, "★ {} average rating", park.rating);
        let _ = writeln!(out, "{}", park.address);
        if !park.features.is_empty() {
            let _ = writeln!(out, "Features: {}", park.features.join(", "));
        }
        if !park.description.is_empty() {
            let _ = writeln!(out, "{}", park.description);
        }
        if let Some(added) = park.date_added {
            let _ = writeln!(
                out,
                "Added by {} on {}",
                park.added_by.as_deref().unwrap_or("?"),
                added.format("%Y-%m-%d")
            );
        }
        out
    }

    fn feature_line(&self, park: &Park) -> String {
        let preview = FeaturePreview::of(park, self.display.feature_preview_limit);
        let mut line = preview.shown.join(" · ");
        if let Some(more) = preview.more_label() {
            line.push(' ');
            line.push_str(&more);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parks_core::MemoryParkStore;

    fn shell() -> Shell<MemoryParkStore> {
        Shell::new(MemoryParkStore::with_windsor_seed(), DisplayConfig::default())
    }

    #[test]
    fn test_parse_add() {
        let command =
            Command::parse("add name=Test Park; address=1 Main St; rating=4; features=Fenced,Beach")
                .unwrap();

        let Command::Add(form) = command else {
            panic!("expected add");
        };
        assert_eq!(form.name, "Test Park");
        assert_eq!(form.rating, 4);
        assert_eq!(form.features(), &["Fenced".to_string(), "Beach".to_string()]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("rate 1").is_err());
        assert!(Command::parse("rate 1 high").is_err());
        assert!(Command::parse("rate 1 NaN").is_err());
        assert!(Command::parse("rate 1 inf").is_err());
        assert!(Command::parse("add name=A; address=B; rating=9").is_err());
        assert!(Command::parse("add name=A; address=B; rating=0").is_err());
        assert!(Command::parse("add name").is_err());
        assert!(Command::parse("dance").is_err());
        assert_eq!(Command::parse("  LIST ").unwrap(), Command::List);
    }

    #[test]
    fn test_add_then_list_shows_new_park_first() {
        let shell = shell();
        let added = shell.execute(Command::parse("add name=Test Park; address=1 Main St").unwrap());
        assert!(added.starts_with("✅"));

        let list = shell.execute(Command::List);
        assert!(list.contains("(6 parks)"));
        let first_entry = list.lines().nth(2).unwrap();
        assert!(first_entry.contains("Test Park"));
        assert!(first_entry.ends_with("NEW!"));
    }

    #[test]
    fn test_add_requires_name_and_address() {
        let shell = shell();
        let output = shell.execute(Command::parse("add name=Test Park").unwrap());
        assert!(output.starts_with("❌"));
        assert_eq!(shell.execute(Command::Summary), "5 parks (0 submitted, 5 original)");
    }

    #[test]
    fn test_rate_unknown_park() {
        let shell = shell();
        assert_eq!(shell.execute(Command::Rate(ParkId::from("99"), 5.0)), "No park with id 99.");
        assert_eq!(shell.execute(Command::Rate(ParkId::from("5"), 4.0)), "Rated Sandpoint Beach 4.");
    }

    #[test]
    fn test_show_detail() {
        let shell = shell();
        let detail = shell.execute(Command::Show(ParkId::from("1")));
        assert!(detail.starts_with("Malden Park Dog Area"));
        assert!(detail.contains("Features: Fenced, Water Station, Large Dogs"));
    }
}
