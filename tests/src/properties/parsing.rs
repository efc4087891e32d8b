//! Identifier-parsing and formatting properties.

#[cfg(test)]
mod tests {
    use explorer_data::{
        clamp_rows_per_page, composite_block_id, epoch_id_from_label, from_wei, BlockId,
        ParsedAccountId, SignatureScheme, MAX_ROWS_PER_PAGE, MIN_ROWS_PER_PAGE,
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_clamp_stays_in_bounds(rows in proptest::option::of(any::<u32>())) {
            let clamped = clamp_rows_per_page(rows);
            prop_assert!((MIN_ROWS_PER_PAGE..=MAX_ROWS_PER_PAGE).contains(&clamped));
        }

        #[test]
        fn prop_composite_round_trips_through_classification(
            epoch in any::<u64>(),
            creator in "acc_[a-f0-9]{12}",
            index in any::<u64>(),
        ) {
            let id = composite_block_id(epoch, &creator, index);
            let is_composite = matches!(BlockId::classify(&id), BlockId::Composite { .. });
            prop_assert!(is_composite, "{id} did not classify as composite");
        }

        #[test]
        fn prop_two_part_ids_are_sids(shard in "[0-9]{1,3}", height in "[0-9]{1,6}") {
            let id = format!("{shard}:{height}");
            let classified = BlockId::classify(&id);
            prop_assert!(classified.is_sid());
        }

        #[test]
        fn prop_from_wei_never_has_trailing_dot(raw in "[1-9][0-9]{0,27}") {
            let coins = from_wei(&raw);
            prop_assert!(!coins.ends_with('.'));
            prop_assert!(!coins.is_empty());
        }

        #[test]
        fn prop_epoch_label_round_trips(id in any::<u64>()) {
            prop_assert_eq!(epoch_id_from_label(&format!("epoch#{id}")), id);
        }
    }

    #[test]
    fn test_clamp_reference_points() {
        assert_eq!(clamp_rows_per_page(Some(5)), 10);
        assert_eq!(clamp_rows_per_page(Some(250)), 100);
        assert_eq!(clamp_rows_per_page(Some(37)), 37);
        assert_eq!(clamp_rows_per_page(None), 10);
    }

    #[test]
    fn test_from_wei_reference_point() {
        assert_eq!(from_wei("1234500000000000000"), "1.2345");
    }

    #[test]
    fn test_signature_scheme_reference_points() {
        assert_eq!(
            SignatureScheme::infer(&"a".repeat(44)).describe(),
            "ED25519"
        );
        let evm = format!("0x{}", "b".repeat(40));
        assert_eq!(
            SignatureScheme::infer(&evm).describe(),
            "ECDSA, EVM-compatible"
        );
        assert_eq!(
            SignatureScheme::infer(&"c".repeat(64)).describe(),
            "PQC, post-quantum"
        );
    }

    #[test]
    fn test_account_id_parsing_reference_points() {
        let qualified = ParsedAccountId::parse("3:acc_user");
        assert_eq!(qualified.shard, "3");
        assert_eq!(qualified.address, "acc_user");

        let evm = ParsedAccountId::parse(&format!("0x{}", "AB".repeat(20)));
        assert_eq!(evm.shard, "0");
        assert_eq!(evm.address, format!("0x{}", "ab".repeat(20)));

        let system = ParsedAccountId::parse("system/staking");
        assert_eq!(system.shard, "x");
        assert!(system.system_contract);
    }
}
