// Card rendering.
// Paints fetched repository data onto a card through the `Card` capability.

use crate::fetcher::RepositoryData;
use crate::format::format_number;
use crate::github::Repository;

pub const FALLBACK_TITLE: &str = "Untitled Project";
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Presentational target a card renderer writes to.
///
/// Implemented by whatever holds the card: a DOM binding, a terminal view,
/// or the in-memory [`MemoryCard`].
pub trait Card {
    /// Address of the card's repository link, if the card has one.
    fn link(&self) -> Option<String>;

    fn set_title(&mut self, title: &str);

    fn set_description(&mut self, description: &str);

    /// Replace the whole stats region with `stats`.
    fn set_stats(&mut self, stats: Vec<StatItem>);

    /// Insert the transient loading indicator into the stats region.
    fn show_loading(&mut self);

    /// Remove the loading indicator, leaving the region as it was before.
    fn hide_loading(&mut self);
}

/// One entry of a card's stats line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatItem {
    Stars(u64),
    Forks(u64),
    Language(String),
}

impl StatItem {
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            StatItem::Stars(_) => Some("★"),
            StatItem::Forks(_) => Some("⑂"),
            StatItem::Language(_) => None,
        }
    }

    /// Display text: formatted counts, the language name verbatim.
    pub fn text(&self) -> String {
        match self {
            StatItem::Stars(n) | StatItem::Forks(n) => format_number(*n),
            StatItem::Language(language) => language.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatItem::Stars(_) => "Stars",
            StatItem::Forks(_) => "Forks",
            StatItem::Language(_) => "Language",
        }
    }

    /// Markup for hosts that render cards as HTML.
    pub fn to_markup(&self) -> String {
        match self.icon() {
            Some(icon) => format!(
                r#"<span class="project-stat" title="{}"><span class="stat-icon" aria-hidden="true">{}</span> {}</span>"#,
                self.label(),
                icon,
                escape_html(&self.text())
            ),
            None => format!(
                r#"<span class="project-stat project-language">{}</span>"#,
                escape_html(&self.text())
            ),
        }
    }
}

/// Markup for a full stats region.
pub fn stats_markup(stats: &[StatItem]) -> String {
    stats.iter().map(StatItem::to_markup).collect()
}

/// Paint `data` onto `card`: title, description, and a rebuilt stats region.
pub fn render<C: Card + ?Sized>(card: &mut C, data: &RepositoryData) {
    card.set_title(&display_title(data));
    card.set_description(display_description(&data.repository));
    card.set_stats(stat_items(&data.repository));
}

/// Readme title, else the prettified repository name, else a placeholder.
pub fn display_title(data: &RepositoryData) -> String {
    if let Some(title) = &data.readme_title {
        return title.clone();
    }

    match data.repository.name.as_deref() {
        Some(name) if !name.is_empty() => prettify_name(name),
        _ => FALLBACK_TITLE.to_string(),
    }
}

pub fn display_description(repo: &Repository) -> &str {
    match repo.description.as_deref() {
        Some(description) if !description.is_empty() => description,
        _ => FALLBACK_DESCRIPTION,
    }
}

/// Stars, forks and language, in that order, skipping absent fields.
pub fn stat_items(repo: &Repository) -> Vec<StatItem> {
    let mut items = Vec::with_capacity(3);
    if let Some(stars) = repo.stargazers_count {
        items.push(StatItem::Stars(stars));
    }
    if let Some(forks) = repo.forks_count {
        items.push(StatItem::Forks(forks));
    }
    if let Some(language) = &repo.language {
        items.push(StatItem::Language(language.clone()));
    }
    items
}

/// "my-cool-repo" -> "My Cool Repo".
fn prettify_name(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// In-memory card.
///
/// `stats` is None until something has been rendered, matching a card whose
/// markup has not been augmented yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCard {
    pub link: Option<String>,
    pub title: String,
    pub description: String,
    pub stats: Option<Vec<StatItem>>,
    pub loading: bool,
}

impl MemoryCard {
    /// A card showing its default markup: a link plus placeholder text.
    pub fn new(link: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            title: title.into(),
            description: description.into(),
            stats: None,
            loading: false,
        }
    }

    /// Whether a renderer has populated this card.
    pub fn is_populated(&self) -> bool {
        self.stats.is_some()
    }
}

impl Card for MemoryCard {
    fn link(&self) -> Option<String> {
        self.link.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn set_stats(&mut self, stats: Vec<StatItem>) {
        self.stats = Some(stats);
    }

    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }
}
