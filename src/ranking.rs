use crate::bounty::bounty_from_value;
use crate::model::RawCharacterItem;

/// A character that survived filtering, carrying its parsed bounty.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCharacter {
    pub name: String,
    pub epithet: String,
    pub bounty: u64,
}

/// Keeps the `limit` highest bounties.
///
/// Items with an empty name or an unparseable bounty are dropped. The sort is
/// stable, so characters with equal bounties keep their API order.
pub fn rank_top(items: Vec<RawCharacterItem>, limit: usize) -> Vec<RankedCharacter> {
    let mut ranked: Vec<RankedCharacter> = items
        .into_iter()
        .filter_map(|item| {
            if item.name.is_empty() {
                return None;
            }
            let bounty = bounty_from_value(&item.bounty)?;
            Some(RankedCharacter {
                name: item.name,
                epithet: item.job,
                bounty,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.bounty.cmp(&a.bounty));
    ranked.truncate(limit);
    ranked
}
