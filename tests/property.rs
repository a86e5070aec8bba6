use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use waves_core::crypto::{curve25519, Signer};
use waves_core::encoding::base58;
use waves_core::money::currency::{well_known, BTC_ID, USD_ID, WAVES_ID};
use waves_core::wallet::{address_from_passphrase, cleanup_optional_prefix, validate_address, verify_address};
use waves_core::{CurrencyData, CurrencyRegistry, Money, NetworkConfig};

fn currency(precision: u32) -> Arc<waves_core::Currency> {
    CurrencyRegistry::with_defaults().create(CurrencyData::temporary("Prop", precision))
}

proptest! {
    #[test]
    fn money_round_trips_through_coins(coins in -1_000_000_000_000i64..1_000_000_000_000i64, precision in 0u32..=8) {
        let c = currency(precision);
        let tokens = Decimal::new(coins, precision);
        let money = Money::from_tokens(tokens, Arc::clone(&c)).unwrap();
        let back = Money::from_coins(money.to_coins().unwrap(), c).unwrap();
        prop_assert_eq!(back.to_tokens(), tokens);
    }

    #[test]
    fn floor_rounding_is_idempotent(mantissa in any::<i64>(), scale in 0u32..=16, precision in 0u32..=8) {
        let c = currency(precision);
        let value = Decimal::new(mantissa, scale);
        let once = Money::new(value, Arc::clone(&c)).unwrap();
        let twice = Money::new(once.amount(), Arc::clone(&c)).unwrap();
        prop_assert_eq!(once.amount(), twice.amount());
        prop_assert!(once.amount() <= value);
    }

    #[test]
    fn distinct_currencies_never_mix(a in 0usize..5, b in 0usize..5, x in 0i64..1_000_000, y in 0i64..1_000_000) {
        prop_assume!(a != b);
        let known = well_known();
        let first = Money::from_coins(x, Arc::new(known[a].clone())).unwrap();
        let second = Money::from_coins(y, Arc::new(known[b].clone())).unwrap();
        prop_assert!(first.plus(&second).is_err());
        prop_assert!(first.minus(&second).is_err());
        prop_assert!(first.greater_than(&second).is_err());
    }

    #[test]
    fn address_derivation_is_deterministic(phrase in "[a-z]{3,8}( [a-z]{3,8}){0,14}") {
        for config in [NetworkConfig::mainnet(), NetworkConfig::testnet()] {
            let a = address_from_passphrase(&phrase, &config).unwrap();
            let b = address_from_passphrase(&phrase, &config).unwrap();
            prop_assert_eq!(&a.address, &b.address);
            prop_assert!(verify_address(&a.address, &config));
        }
    }

    #[test]
    fn signatures_verify_and_detect_tampering(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 1..256),
        flip in any::<prop::sample::Index>(),
    ) {
        let private = curve25519::clamp(&seed);
        let public = base58::encode(&curve25519::public_key(&private));
        let private = base58::encode(&private);

        let signer = Signer::default();
        let signature = signer.sign(&private, &message).unwrap();
        prop_assert!(signer.verify(&public, &message, &signature));

        let mut tampered = message.clone();
        let i = flip.index(tampered.len());
        tampered[i] ^= 0x01;
        prop_assert!(!signer.verify(&public, &tampered, &signature));
    }

    #[test]
    fn base58_alphabet_is_accepted(s in "[1-9A-HJ-NP-Za-km-z]{0,40}") {
        prop_assert!(base58::is_valid(&s));
    }

    #[test]
    fn non_alphabet_characters_are_rejected(prefix in "[1-9A-HJ-NP-Za-km-z]{0,10}", bad in "[0OIl +/]") {
        let s = format!("{}{}", prefix, bad);
        prop_assert!(!base58::is_valid(&s));
    }

    #[test]
    fn wrong_length_addresses_are_rejected(s in "[1-9A-HJ-NP-Za-km-z]{1,60}") {
        let config = NetworkConfig::mainnet();
        prop_assume!(s.len() != config.raw_address_length);
        prop_assume!(!s.starts_with("1W"));
        prop_assert!(!validate_address(&s, &config));
    }

    #[test]
    fn prefix_cleanup_is_idempotent(s in "(1W)?[1-9A-HJ-NP-Za-km-z]{35}") {
        let config = NetworkConfig::mainnet();
        let once = cleanup_optional_prefix(&s, &config);
        prop_assert_eq!(cleanup_optional_prefix(once, &config), once);
    }
}

#[test]
fn registry_ids_are_stable() {
    let registry = CurrencyRegistry::with_defaults();
    for id in [WAVES_ID, BTC_ID, USD_ID] {
        let a = registry.get(id).unwrap();
        let b = registry.create(CurrencyData::new(id, "ignored", 0));
        assert!(Arc::ptr_eq(&a, &b));
    }
}
