//! Mapping from upstream payloads to the public domain shape.
//!
//! Everything here is pure. Field renames are one-to-one and nested lists keep
//! their order and length.

use regex::Regex;
use serde::Deserialize;

use crate::{
    AbilitySlot, Creature, CreatureList, CreatureListItem, NamedResource, Sprites, StatEntry,
    TypeSlot,
};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UpstreamPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<UpstreamNamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UpstreamNamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UpstreamCreature {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    sprites: UpstreamSprites,
    #[serde(default)]
    types: Vec<UpstreamTypeSlot>,
    #[serde(default)]
    abilities: Vec<UpstreamAbilitySlot>,
    #[serde(default)]
    stats: Vec<UpstreamStat>,
    species: UpstreamNamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UpstreamSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    front_shiny: Option<String>,
    #[serde(default)]
    back_default: Option<String>,
    #[serde(default)]
    back_shiny: Option<String>,
    #[serde(default)]
    other: Option<UpstreamOtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UpstreamOtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<UpstreamArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UpstreamArtwork {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct UpstreamTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: UpstreamNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct UpstreamAbilitySlot {
    ability: UpstreamNamedResource,
    is_hidden: bool,
    slot: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct UpstreamStat {
    base_stat: u32,
    effort: u32,
    stat: UpstreamNamedResource,
}

impl From<UpstreamNamedResource> for NamedResource {
    fn from(value: UpstreamNamedResource) -> Self {
        Self {
            name: value.name,
            url: value.url,
        }
    }
}

/// Pulls the numeric id out of `.../{resource}/{digits}/` resource URLs.
#[derive(Debug, Clone)]
pub struct IdExtractor {
    pattern: Regex,
}

impl IdExtractor {
    /// # Errors
    ///
    /// Returns the regex error if the pattern built from `resource` cannot compile.
    pub fn new(resource: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"/{}/([0-9]+)/", regex::escape(resource)))?;
        Ok(Self { pattern })
    }

    /// Returns 0 when the URL does not match or the digits overflow.
    pub fn extract(&self, url: &str) -> u32 {
        self.pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
            .unwrap_or(0)
    }
}

pub(crate) fn normalize_list_item(
    item: UpstreamNamedResource,
    extractor: &IdExtractor,
) -> CreatureListItem {
    CreatureListItem {
        id: extractor.extract(&item.url),
        name: item.name,
        url: item.url,
    }
}

pub(crate) fn normalize_page(page: UpstreamPage, extractor: &IdExtractor) -> CreatureList {
    CreatureList {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results: page
            .results
            .into_iter()
            .map(|item| normalize_list_item(item, extractor))
            .collect(),
    }
}

pub(crate) fn normalize_creature(raw: UpstreamCreature) -> Creature {
    let official_artwork = raw
        .sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default);

    Creature {
        id: raw.id,
        name: raw.name,
        height: raw.height,
        weight: raw.weight,
        base_experience: raw.base_experience,
        sprites: Sprites {
            front_default: raw.sprites.front_default,
            front_shiny: raw.sprites.front_shiny,
            back_default: raw.sprites.back_default,
            back_shiny: raw.sprites.back_shiny,
            official_artwork,
        },
        types: raw
            .types
            .into_iter()
            .map(|entry| TypeSlot {
                slot: entry.slot,
                kind: entry.kind.into(),
            })
            .collect(),
        abilities: raw
            .abilities
            .into_iter()
            .map(|entry| AbilitySlot {
                ability: entry.ability.into(),
                is_hidden: entry.is_hidden,
                slot: entry.slot,
            })
            .collect(),
        stats: raw
            .stats
            .into_iter()
            .map(|entry| StatEntry {
                base_stat: entry.base_stat,
                effort: entry.effort,
                stat: entry.stat.into(),
            })
            .collect(),
        species: raw.species.into(),
    }
}
