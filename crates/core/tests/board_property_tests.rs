//! Property-based tests for the board queries and CSV rendering.
//!
//! These tests check the query invariants over arbitrary boards using the
//! `proptest` crate for random test case generation.

use coinboard_core::{
    find_by_symbol, render_csv, sort_by_price, top_gainer_loser, CoinRecord, SortOrder,
};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Generates a coin id in the shape the upstream uses (`bitcoin`, `shiba-inu`).
fn arb_coin_id() -> impl Strategy<Value = String> {
    "[a-z]{2,10}(-[a-z]{2,6})?"
}

/// Generates a record with a non-negative price; some changes are exactly 0.
fn arb_record() -> impl Strategy<Value = CoinRecord> {
    (
        arb_coin_id(),
        0.0f64..100_000.0,
        prop_oneof![Just(0.0f64), -99.0f64..500.0],
    )
        .prop_map(|(id, price, change)| CoinRecord::new(&id, price, change))
}

fn arb_board() -> impl Strategy<Value = Vec<CoinRecord>> {
    proptest::collection::vec(arb_record(), 0..20)
}

/// Generates an arbitrary `order` query value.
fn arb_order_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("asc".to_string()),
        Just("desc".to_string()),
        "[a-zA-Z]{0,6}",
    ])
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn symbol_is_uppercased_id(record in arb_record()) {
        prop_assert_eq!(record.symbol.clone(), record.id.to_uppercase());
    }

    #[test]
    fn change_has_two_decimals_and_percent(change in -99.0f64..500.0) {
        let display = CoinRecord::new("x", 1.0, change).change_display();
        let number = display.strip_suffix('%').expect("trailing percent");
        let (_, decimals) = number.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(number.parse::<f64>().is_ok());
    }

    #[test]
    fn search_matches_any_casing(board in arb_board(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!board.is_empty());
        let target = &board[pick.index(board.len())];

        let lower = find_by_symbol(&board, &target.symbol.to_lowercase()).map(|r| r.symbol.clone());
        let upper = find_by_symbol(&board, &target.symbol).map(|r| r.symbol.clone());
        prop_assert_eq!(lower.as_deref(), Some(target.symbol.as_str()));
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn search_miss_returns_none(board in arb_board()) {
        // Generated symbols never contain digits.
        prop_assert!(find_by_symbol(&board, "COIN42").is_none());
    }

    #[test]
    fn sort_orders_by_price(mut board in arb_board(), order in arb_order_value()) {
        let order = SortOrder::parse(order.as_deref());
        let before = board.len();
        sort_by_price(&mut board, order);

        prop_assert_eq!(board.len(), before);
        for pair in board.windows(2) {
            match order {
                SortOrder::Asc => prop_assert!(pair[0].price <= pair[1].price),
                SortOrder::Desc => prop_assert!(pair[0].price >= pair[1].price),
            }
        }
    }

    #[test]
    fn every_record_renders_a_percent_change(board in arb_board()) {
        for record in &board {
            let display = record.change_display();
            prop_assert!(display.ends_with('%'));
            prop_assert!(display.trim_end_matches('%').parse::<f64>().is_ok());
        }
    }

    #[test]
    fn gainer_and_loser_bound_every_change(board in arb_board()) {
        match top_gainer_loser(&board) {
            None => prop_assert!(board.is_empty()),
            Some(result) => {
                let gain = result.top_gainer.change_percent;
                let loss = result.top_loser.change_percent;
                for record in &board {
                    prop_assert!(record.change_percent <= gain);
                    prop_assert!(record.change_percent >= loss);
                }
            }
        }
    }

    #[test]
    fn csv_has_header_plus_one_row_per_record(board in arb_board()) {
        let csv = String::from_utf8(render_csv(&board).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        prop_assert_eq!(lines.len(), board.len() + 1);
        prop_assert_eq!(lines[0], "Name,Symbol,Price (USD),24h Change");
        for (line, record) in lines[1..].iter().zip(&board) {
            let expected = format!("{},{},", record.name, record.symbol);
            prop_assert!(line.starts_with(&expected));
        }
    }
}
