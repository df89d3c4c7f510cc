//! Stateless queries over a slice of board records.

use super::coins_model::{CoinRecord, GainerLoser, SortOrder};

/// Exact, case-insensitive symbol lookup. Returns the first match.
pub fn find_by_symbol<'a>(records: &'a [CoinRecord], symbol: &str) -> Option<&'a CoinRecord> {
    let wanted = symbol.to_uppercase();
    if wanted.is_empty() {
        return None;
    }
    records.iter().find(|r| r.symbol == wanted)
}

/// Reorders the records in place by price.
pub fn sort_by_price(records: &mut [CoinRecord], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Desc => records.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// Single scan for the largest and smallest 24h change.
///
/// Ties keep the earliest record. Returns `None` for an empty board.
pub fn top_gainer_loser(records: &[CoinRecord]) -> Option<GainerLoser> {
    let mut gainer: Option<&CoinRecord> = None;
    let mut loser: Option<&CoinRecord> = None;

    for record in records {
        let change = record.change_percent;
        if gainer.map_or(true, |best| change > best.change_percent) {
            gainer = Some(record);
        }
        if loser.map_or(true, |worst| change < worst.change_percent) {
            loser = Some(record);
        }
    }

    match (gainer, loser) {
        (Some(top_gainer), Some(top_loser)) => Some(GainerLoser {
            top_gainer: top_gainer.clone(),
            top_loser: top_loser.clone(),
        }),
        _ => None,
    }
}
