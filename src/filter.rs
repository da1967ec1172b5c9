//! Project card filtering

use folio_reveal::ProjectCard;

/// Filter value that shows every card
pub const SHOW_ALL: &str = "Tous";

pub fn is_visible(card: &ProjectCard, filter: &str) -> bool {
    filter == SHOW_ALL || card.category.as_deref() == Some(filter)
}

/// Visibility of every card under `filter`, in card order
pub fn visibility<'a>(cards: &'a [ProjectCard], filter: &'a str) -> impl Iterator<Item = (&'a ProjectCard, bool)> + 'a {
    cards.iter().map(move |card| (card, is_visible(card, filter)))
}
