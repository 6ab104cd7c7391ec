use crate::application::read_models::{CharacterCardView, CharacterListView};
use crate::catalog::domain::{film_count_label, CharacterViewModel};
use crate::catalog::policies::SpeciesTheme;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use owo_colors::{AnsiColors, OwoColorize};

/// Rendered for empty attribute values
const NOT_AVAILABLE: &str = "N/A";

/// Width of the label column in the detail panel
const LABEL_WIDTH: usize = 14;

const RULE: &str = "────────────────────────────────────────";

/// TextFormatter adapter rendering the character grid and detail panel
///
/// Colors are only emitted when `colored` is set, so the same formatter
/// works for terminals and for files.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    pub fn with_colors(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.colored {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn theme_color(theme: SpeciesTheme) -> AnsiColors {
        match theme {
            SpeciesTheme::Human => AnsiColors::Blue,
            SpeciesTheme::Droid => AnsiColors::White,
            SpeciesTheme::Wookiee => AnsiColors::Yellow,
            SpeciesTheme::Twilek => AnsiColors::Cyan,
            SpeciesTheme::Hutt => AnsiColors::Green,
            SpeciesTheme::YodaSpecies => AnsiColors::BrightGreen,
            SpeciesTheme::Trandoshan => AnsiColors::BrightYellow,
            SpeciesTheme::MonCalamari => AnsiColors::BrightRed,
            SpeciesTheme::Rodian => AnsiColors::BrightCyan,
            SpeciesTheme::Default => AnsiColors::Magenta,
        }
    }

    fn or_not_available(value: &str) -> &str {
        if value.trim().is_empty() {
            NOT_AVAILABLE
        } else {
            value
        }
    }

    /// Value followed by its unit, or N/A without a unit
    fn with_unit(value: &str, unit: &str) -> String {
        if value.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            format!("{} {}", value, unit)
        }
    }

    fn field(&self, label: &str, value: &str) -> String {
        let label = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
        format!("{}{}\n", self.dim(&label), value)
    }

    fn render_header(&self, view: &CharacterListView) -> String {
        let mut output = format!(
            "Page {} of {} ({} total characters)\n",
            view.current_page,
            view.total_pages.max(1),
            view.total_count
        );

        match &view.search_term {
            Some(term) if view.total_count == 0 => {
                output.push_str(&format!("No results found for \"{}\"\n", term));
            }
            Some(term) => {
                let noun = if view.total_count == 1 {
                    "result"
                } else {
                    "results"
                };
                output.push_str(&format!(
                    "Found {} {} for \"{}\"\n",
                    view.total_count, noun, term
                ));
            }
            None if view.cards.is_empty() => output.push_str("No characters found\n"),
            None => {}
        }
        output
    }

    fn render_card(&self, card: &CharacterCardView, name_width: usize) -> String {
        // Pad before painting; escape codes would throw the width off
        let name = format!("{:<width$}", card.name, width = name_width);
        format!(
            "  {:>2}. {}  {}\n",
            card.index,
            self.paint(&name, AnsiColors::Yellow),
            self.dim(&film_count_label(card.film_count))
        )
    }

    fn render_navigation(&self, view: &CharacterListView) -> String {
        let mut hints = Vec::new();
        if view.has_previous {
            hints.push("« previous (p)");
        }
        if view.has_next {
            hints.push("next (n) »");
        }
        if hints.is_empty() {
            String::new()
        } else {
            format!("\n{}\n", self.dim(&hints.join("  |  ")))
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for TextFormatter {
    fn format_page(&self, view: &CharacterListView) -> Result<String> {
        let mut output = self.render_header(view);

        if !view.cards.is_empty() {
            output.push('\n');
            let name_width = view
                .cards
                .iter()
                .map(|card| card.name.chars().count())
                .max()
                .unwrap_or(0);
            for card in &view.cards {
                output.push_str(&self.render_card(card, name_width));
            }
        }

        output.push_str(&self.render_navigation(view));
        Ok(output)
    }

    fn format_character(&self, character: &CharacterViewModel) -> Result<String> {
        let theme = SpeciesTheme::for_species(&character.species);
        let species = Self::or_not_available(&character.species);
        let date_added = character
            .created_date()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let mut output = String::new();
        output.push_str(&format!(
            "{}  {}\n",
            self.paint(Self::or_not_available(&character.name), AnsiColors::Yellow),
            self.paint(&format!("[{}]", species), Self::theme_color(theme))
        ));
        output.push_str(RULE);
        output.push('\n');

        output.push_str(&self.field("Height", &Self::with_unit(&character.height, "cm")));
        output.push_str(&self.field("Mass", &Self::with_unit(&character.mass, "kg")));
        output.push_str(&self.field("Birth Year", Self::or_not_available(&character.birth_year)));
        output.push_str(&self.field("Gender", Self::or_not_available(&character.gender)));
        output.push_str(&self.field("Eye Color", Self::or_not_available(&character.eye_color)));
        output.push_str(&self.field("Hair Color", Self::or_not_available(&character.hair_color)));
        output.push_str(&self.field("Skin Color", Self::or_not_available(&character.skin_color)));
        output.push_str(&self.field("Films", &character.film_count_label()));
        output.push_str(&self.field("Date Added", &date_added));

        let homeworld = &character.homeworld;
        output.push_str(&format!("\n{}\n", self.paint("Homeworld", AnsiColors::Cyan)));
        output.push_str(&self.field("  Name", Self::or_not_available(&homeworld.name)));
        output.push_str(&self.field("  Population", Self::or_not_available(&homeworld.population)));
        output.push_str(&self.field("  Terrain", Self::or_not_available(&homeworld.terrain)));
        output.push_str(&self.field("  Climate", Self::or_not_available(&homeworld.climate)));

        output.push_str(&format!(
            "\n{}\n",
            self.paint("Films Appeared In", AnsiColors::Cyan)
        ));
        if character.films.is_empty() {
            output.push_str(&format!("  {}\n", NOT_AVAILABLE));
        }
        for title in &character.films {
            output.push_str(&format!("  • {}\n", title));
        }

        output.push('\n');
        output.push_str(&self.field("Portrait", &character.portrait_url()));
        Ok(output)
    }
}
