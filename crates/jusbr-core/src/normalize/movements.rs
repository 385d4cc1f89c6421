use crate::provider::{MovementItem, MovementSourceItem};
use crate::{Movement, MovementDate, MovementSource};

use super::first_present;

pub const NO_DESCRIPTION: &str = "Movimentação sem descrição";
pub const DEFAULT_MOVEMENT_KIND: &str = "ANDAMENTO";

/// Map docket entries one to one, keeping provider order.
pub fn map_movements(items: &[MovementItem]) -> Vec<Movement> {
    items.iter().map(map_movement).collect()
}

pub fn map_movement(item: &MovementItem) -> Movement {
    Movement {
        date: MovementDate::parse(item.date.as_deref()),
        description: first_present([item.content.as_deref()])
            .unwrap_or(NO_DESCRIPTION)
            .to_owned(),
        kind: first_present([item.kind.as_deref()])
            .unwrap_or(DEFAULT_MOVEMENT_KIND)
            .to_owned(),
        documents: Vec::new(),
        source: item
            .source
            .as_ref()
            .map(map_source)
            .unwrap_or_default(),
    }
}

fn map_source(source: &MovementSourceItem) -> MovementSource {
    MovementSource {
        id: source.id,
        name: source.name.clone(),
        kind: source.kind.clone(),
        abbreviation: source.abbreviation.clone(),
        degree: source.degree,
        degree_label: source.degree_label.clone(),
    }
}
