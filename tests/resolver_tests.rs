//! Call-order tests for the entry resolver using a mocked bundle store.

use anyhow::{Result, ensure};
use glossa::bundle::{BundleError, BundleStore, KeyPath, ResourceEntry};
use glossa::locale::{FallbackChain, LocaleTag};
use glossa::resolver::{AnchorPolicy, EntryResolver};
use mockall::{Sequence, mock};

mock! {
    pub Store {}
    impl BundleStore for Store {
        fn read(
            &self,
            bundle: &str,
            locale: &LocaleTag,
            key_path: &KeyPath,
        ) -> Result<ResourceEntry, BundleError>;
    }
}

fn expect_miss(store: &mut MockStore, seq: &mut Sequence, locale: &'static str, path: &'static str) {
    store
        .expect_read()
        .withf(move |_, tag, key_path| tag.to_string() == locale && key_path.to_string() == path)
        .times(1)
        .in_sequence(seq)
        .returning(|bundle, tag, key_path| Err(BundleError::not_found(bundle, tag, key_path)));
}

#[test]
fn anchored_lookup_consults_default_exactly_once() -> Result<()> {
    let mut store = MockStore::new();
    let mut seq = Sequence::new();
    expect_miss(&mut store, &mut seq, "en", "CurrencyMeta/XXX/0");
    expect_miss(&mut store, &mut seq, "root", "CurrencyMeta/XXX/0");
    store
        .expect_read()
        .withf(|_, tag, key_path| {
            tag.to_string() == "en" && key_path.to_string() == "CurrencyMeta/DEFAULT/0"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ResourceEntry::Integer(2)));

    let resolver = EntryResolver::new(&store);
    let policy = AnchorPolicy::with_default(LocaleTag::parse("en"), 1);
    let path = KeyPath::new().key("CurrencyMeta").key("XXX").index(0);
    let entry = resolver.resolve_anchored("curr", &policy, &path)?;
    ensure!(entry == ResourceEntry::Integer(2), "unexpected entry {entry:?}");
    Ok(())
}

#[test]
fn chain_lookup_stops_at_first_hit() -> Result<()> {
    let mut store = MockStore::new();
    let mut seq = Sequence::new();
    expect_miss(&mut store, &mut seq, "zh_Hans_SG", "Currencies/JPY/1");
    expect_miss(&mut store, &mut seq, "zh_Hans", "Currencies/JPY/1");
    store
        .expect_read()
        .withf(|_, tag, _| tag.to_string() == "zh")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ResourceEntry::from("日元")));
    store
        .expect_read()
        .withf(|_, tag, _| tag.is_root())
        .never();

    let resolver = EntryResolver::new(&store);
    let chain = FallbackChain::from_canonical(LocaleTag::parse("zh_Hans_SG"));
    let path = KeyPath::new().key("Currencies").key("JPY").index(1);
    let entry = resolver.resolve("curr", &chain, &path)?;
    ensure!(entry.as_str() == Some("日元"), "unexpected entry {entry:?}");
    Ok(())
}

#[test]
fn store_failures_are_not_treated_as_misses() {
    let mut store = MockStore::new();
    store.expect_read().times(1).returning(|_, _, _| {
        Err(BundleError::Io {
            path: "data/curr/en.json".into(),
            source: std::io::Error::other("disk on fire"),
        })
    });
    let resolver = EntryResolver::new(&store);
    let chain = FallbackChain::from_canonical(LocaleTag::parse("en"));
    let outcome = resolver.resolve("curr", &chain, &KeyPath::new().key("Currencies"));
    assert!(matches!(outcome, Err(ref err) if !err.is_missing()));
}
